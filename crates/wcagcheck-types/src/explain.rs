//! Explain registry for categories and rule codes.
//!
//! Maps category ids and codes to human-readable explanations with remediation guidance.

use crate::ids;
use crate::violation::Category;

/// Explanation entry for a category or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the category/code.
    pub title: &'static str,
    /// What the rule looks for and which WCAG criterion it approximates.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after markup examples.
    pub examples: ExamplePair,
}

/// Before and after markup examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Markup that would trigger a violation.
    pub before: &'static str,
    /// Markup that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by category id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    if let Some(category) = Category::from_id(identifier) {
        return Some(explain_category(category));
    }

    match identifier {
        ids::CODE_MISSING_H1 => Some(Explanation {
            title: "Missing Level-One Heading",
            description: "The page has no `<h1>`. Screen reader users jump to the first-level heading to find the main topic of a page (WCAG 1.3.1, 2.4.6).",
            remediation: "Add exactly one `<h1>` describing the page's main content.",
            examples: ExamplePair {
                before: "<div class=\"title\">Annual report</div>",
                after: "<h1>Annual report</h1>",
            },
        }),
        ids::CODE_MULTIPLE_H1 => Some(Explanation {
            title: "Multiple Level-One Headings",
            description: "More than one `<h1>` makes the page outline ambiguous.",
            remediation: "Keep a single `<h1>` and demote the others to `<h2>` or lower.",
            examples: ExamplePair {
                before: "<h1>News</h1>\n<h1>Events</h1>",
                after: "<h1>News</h1>\n<h2>Events</h2>",
            },
        }),
        ids::CODE_HEADING_LEVEL_SKIP => Some(Explanation {
            title: "Skipped Heading Level",
            description: "A heading jumps more than one level below the previous heading, breaking the document outline.",
            remediation: "Nest headings one level at a time (`h2` under `h1`, `h3` under `h2`).",
            examples: ExamplePair {
                before: "<h1>Guide</h1>\n<h4>Install</h4>",
                after: "<h1>Guide</h1>\n<h2>Install</h2>",
            },
        }),
        ids::CODE_EMPTY_HEADING => Some(Explanation {
            title: "Empty Heading",
            description: "A heading element contains no text, so it is announced without content.",
            remediation: "Give the heading text or remove the element.",
            examples: ExamplePair {
                before: "<h2></h2>",
                after: "<h2>Contact</h2>",
            },
        }),
        ids::CODE_IMG_MISSING_ALT => Some(Explanation {
            title: "Image Missing Alt Text",
            description: "An `<img>` has no `alt` attribute and is not marked decorative (WCAG 1.1.1).",
            remediation: "Describe the image in `alt`, or use `alt=\"\"`, `role=\"presentation\"` or `aria-hidden=\"true\"` for decorative images.",
            examples: ExamplePair {
                before: "<img src=\"team.jpg\">",
                after: "<img src=\"team.jpg\" alt=\"The support team at the 2024 meetup\">",
            },
        }),
        ids::CODE_IMG_MEANINGLESS_ALT => Some(Explanation {
            title: "Meaningless Alt Text",
            description: "The alt text is a placeholder word such as \"image\" or \"photo\" that conveys nothing.",
            remediation: "Describe what the image shows or why it is there.",
            examples: ExamplePair {
                before: "<img src=\"chart.png\" alt=\"image\">",
                after: "<img src=\"chart.png\" alt=\"Sales doubled between March and June\">",
            },
        }),
        ids::CODE_EMPTY_LINK => Some(Explanation {
            title: "Empty Link",
            description: "A link has no text, image, `aria-label` or `title`, so it has no accessible name (WCAG 2.4.4).",
            remediation: "Add link text or an `aria-label`.",
            examples: ExamplePair {
                before: "<a href=\"/cart\"><span class=\"icon-cart\"></span></a>",
                after: "<a href=\"/cart\" aria-label=\"Shopping cart\"><span class=\"icon-cart\"></span></a>",
            },
        }),
        ids::CODE_GENERIC_LINK_TEXT => Some(Explanation {
            title: "Generic Link Text",
            description: "Link text such as \"click here\" or \"read more\" does not describe the destination out of context.",
            remediation: "Use text that names the destination.",
            examples: ExamplePair {
                before: "<a href=\"/pricing\">click here</a>",
                after: "<a href=\"/pricing\">View pricing plans</a>",
            },
        }),
        ids::CODE_JAVASCRIPT_HREF => Some(Explanation {
            title: "JavaScript Link Target",
            description: "`javascript:` URLs behave like buttons but are announced as links.",
            remediation: "Use a `<button>` for actions and real URLs for navigation.",
            examples: ExamplePair {
                before: "<a href=\"javascript:void(0)\" onclick=\"openMenu()\">Menu</a>",
                after: "<button type=\"button\" onclick=\"openMenu()\">Menu</button>",
            },
        }),
        ids::CODE_IMAGE_LINK_MISSING_ALT => Some(Explanation {
            title: "Image Link Missing Alt Text",
            description: "A link whose only content is an image without alt text has no accessible name.",
            remediation: "Give the image alt text describing the link destination.",
            examples: ExamplePair {
                before: "<a href=\"/\"><img src=\"logo.svg\"></a>",
                after: "<a href=\"/\"><img src=\"logo.svg\" alt=\"Home\"></a>",
            },
        }),
        ids::CODE_LOW_CONTRAST => Some(Explanation {
            title: "Low Color Contrast",
            description: "Text colour and background colour are too similar. The threshold is 3.5:1 for body text and 2.5:1 for large or bold text (WCAG 1.4.3, relaxed).",
            remediation: "Darken the text or lighten the background until the ratio clears the threshold.",
            examples: ExamplePair {
                before: "<p style=\"color: #aaaaaa; background-color: #ffffff\">Fine print</p>",
                after: "<p style=\"color: #555555; background-color: #ffffff\">Fine print</p>",
            },
        }),
        ids::CODE_MISSING_LABEL => Some(Explanation {
            title: "Form Control Missing Label",
            description: "A form control is neither referenced by `<label for>` nor wrapped in a `<label>` (WCAG 1.3.1, 3.3.2).",
            remediation: "Associate a visible `<label>` with the control.",
            examples: ExamplePair {
                before: "<input type=\"email\" id=\"email\">",
                after: "<label for=\"email\">Email</label>\n<input type=\"email\" id=\"email\">",
            },
        }),
        ids::CODE_INVALID_ROLE => Some(Explanation {
            title: "Invalid ARIA Role",
            description: "The `role` attribute is not a WAI-ARIA role, so assistive technology ignores it (WCAG 4.1.2).",
            remediation: "Use a valid role or remove the attribute.",
            examples: ExamplePair {
                before: "<div role=\"sidebar\">…</div>",
                after: "<div role=\"complementary\">…</div>",
            },
        }),
        ids::CODE_MISSING_MAIN_LANDMARK => Some(Explanation {
            title: "Missing Main Landmark",
            description: "The page has no `<main>` element or `role=\"main\"`, so users cannot skip to the primary content.",
            remediation: "Wrap the primary content in `<main>`.",
            examples: ExamplePair {
                before: "<div id=\"content\">…</div>",
                after: "<main id=\"content\">…</main>",
            },
        }),
        ids::CODE_NEGATIVE_TABINDEX => Some(Explanation {
            title: "Interactive Element Removed From Tab Order",
            description: "A visible, enabled interactive element outside a dialog has `tabindex=\"-1\"` and cannot be reached with the keyboard (WCAG 2.1.1).",
            remediation: "Remove `tabindex=\"-1\"` or use `tabindex=\"0\"`.",
            examples: ExamplePair {
                before: "<button tabindex=\"-1\">Subscribe</button>",
                after: "<button>Subscribe</button>",
            },
        }),
        _ => None,
    }
}

/// One remediation tip per category, shown when the category has violations.
pub fn category_tip(category: Category) -> &'static str {
    match category {
        Category::Headings => {
            "Use one <h1> per page and nest headings in order without skipping levels."
        }
        Category::Images => "Give every informative image descriptive alt text; mark decorative images with alt=\"\".",
        Category::Links => "Make every link's purpose clear from its text, or provide an aria-label.",
        Category::Contrast => "Increase the contrast between text and background colours.",
        Category::Forms => "Associate a <label> with every form control.",
        Category::Aria => "Use valid ARIA roles and mark the primary content with <main>.",
        Category::Keyboard => "Keep every interactive element reachable with the Tab key.",
    }
}

/// List all known category ids.
pub fn all_category_ids() -> &'static [&'static str] {
    &[
        ids::CATEGORY_HEADINGS,
        ids::CATEGORY_IMAGES,
        ids::CATEGORY_LINKS,
        ids::CATEGORY_CONTRAST,
        ids::CATEGORY_FORMS,
        ids::CATEGORY_ARIA,
        ids::CATEGORY_KEYBOARD,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_H1,
        ids::CODE_MULTIPLE_H1,
        ids::CODE_HEADING_LEVEL_SKIP,
        ids::CODE_EMPTY_HEADING,
        ids::CODE_IMG_MISSING_ALT,
        ids::CODE_IMG_MEANINGLESS_ALT,
        ids::CODE_EMPTY_LINK,
        ids::CODE_GENERIC_LINK_TEXT,
        ids::CODE_JAVASCRIPT_HREF,
        ids::CODE_IMAGE_LINK_MISSING_ALT,
        ids::CODE_LOW_CONTRAST,
        ids::CODE_MISSING_LABEL,
        ids::CODE_INVALID_ROLE,
        ids::CODE_MISSING_MAIN_LANDMARK,
        ids::CODE_NEGATIVE_TABINDEX,
    ]
}

fn explain_category(category: Category) -> Explanation {
    match category {
        Category::Headings => Explanation {
            title: "Headings",
            description: "Checks that the page has a single `<h1>`, that heading levels are not skipped, and that headings are not empty.",
            remediation: category_tip(category),
            examples: ExamplePair {
                before: "<h3>Welcome</h3>",
                after: "<h1>Welcome</h1>",
            },
        },
        Category::Images => Explanation {
            title: "Images",
            description: "Checks `<img>` elements for missing or placeholder alternative text.",
            remediation: category_tip(category),
            examples: ExamplePair {
                before: "<img src=\"map.png\">",
                after: "<img src=\"map.png\" alt=\"Map of the venue\">",
            },
        },
        Category::Links => Explanation {
            title: "Links",
            description: "Checks links for missing accessible names, generic wording and `javascript:` targets.",
            remediation: category_tip(category),
            examples: ExamplePair {
                before: "<a href=\"/docs\">here</a>",
                after: "<a href=\"/docs\">Read the documentation</a>",
            },
        },
        Category::Contrast => Explanation {
            title: "Color contrast",
            description: "Computes the contrast ratio of every visible text element against its effective background. Runs at `medium` and `high` only.",
            remediation: category_tip(category),
            examples: ExamplePair {
                before: "<p style=\"color: #bbbbbb\">Muted</p>",
                after: "<p style=\"color: #595959\">Muted</p>",
            },
        },
        Category::Forms => Explanation {
            title: "Forms",
            description: "Checks that form controls have an associated label. Label checks run at `medium` and `high`.",
            remediation: category_tip(category),
            examples: ExamplePair {
                before: "<input id=\"q\">",
                after: "<label for=\"q\">Search</label>\n<input id=\"q\">",
            },
        },
        Category::Aria => Explanation {
            title: "ARIA",
            description: "Checks `role` values against the WAI-ARIA role list and looks for a main landmark. Runs at `high` only.",
            remediation: category_tip(category),
            examples: ExamplePair {
                before: "<div role=\"content\">…</div>",
                after: "<main>…</main>",
            },
        },
        Category::Keyboard => Explanation {
            title: "Keyboard navigation",
            description: "Flags visible interactive elements removed from the tab order. Runs at `high` only.",
            remediation: category_tip(category),
            examples: ExamplePair {
                before: "<a href=\"/next\" tabindex=\"-1\">Next</a>",
                after: "<a href=\"/next\">Next</a>",
            },
        },
    }
}
