//! Stable identifiers for categories and rule codes.
//!
//! Category ids are single lowercase words. `code` is a short snake_case discriminator.

// Categories
pub const CATEGORY_HEADINGS: &str = "headings";
pub const CATEGORY_IMAGES: &str = "images";
pub const CATEGORY_LINKS: &str = "links";
pub const CATEGORY_CONTRAST: &str = "contrast";
pub const CATEGORY_FORMS: &str = "forms";
pub const CATEGORY_ARIA: &str = "aria";
pub const CATEGORY_KEYBOARD: &str = "keyboard";

// Codes: headings
pub const CODE_MISSING_H1: &str = "missing_h1";
pub const CODE_MULTIPLE_H1: &str = "multiple_h1";
pub const CODE_HEADING_LEVEL_SKIP: &str = "heading_level_skip";
pub const CODE_EMPTY_HEADING: &str = "empty_heading";

// Codes: images
pub const CODE_IMG_MISSING_ALT: &str = "img_missing_alt";
pub const CODE_IMG_MEANINGLESS_ALT: &str = "img_meaningless_alt";

// Codes: links
pub const CODE_EMPTY_LINK: &str = "empty_link";
pub const CODE_GENERIC_LINK_TEXT: &str = "generic_link_text";
pub const CODE_JAVASCRIPT_HREF: &str = "javascript_href";
pub const CODE_IMAGE_LINK_MISSING_ALT: &str = "image_link_missing_alt";

// Codes: contrast
pub const CODE_LOW_CONTRAST: &str = "low_contrast";

// Codes: forms
pub const CODE_MISSING_LABEL: &str = "missing_label";

// Codes: aria
pub const CODE_INVALID_ROLE: &str = "invalid_role";
pub const CODE_MISSING_MAIN_LANDMARK: &str = "missing_main_landmark";

// Codes: keyboard
pub const CODE_NEGATIVE_TABINDEX: &str = "negative_tabindex";
