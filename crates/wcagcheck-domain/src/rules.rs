//! Declarative rule table.
//!
//! Every category declares the level at which it runs at all, its scoring weight and how its
//! examined node set is counted. Every rule declares its minimum level, its impact per level
//! and its detector. [`crate::run_category`] is the single interpreter over this table.

use crate::checks::{aria, contrast, forms, headings, images, keyboard, links};
use crate::error::CheckError;
use crate::model::{Document, NodeId};
use wcagcheck_types::{ids, Category, Impact, SeverityLevel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactPolicy {
    Fixed(Impact),
    /// One impact at `high`, another at every lower level.
    HighElse { high: Impact, otherwise: Impact },
}

impl ImpactPolicy {
    pub fn at(self, level: SeverityLevel) -> Impact {
        match self {
            ImpactPolicy::Fixed(impact) => impact,
            ImpactPolicy::HighElse { high, otherwise } => {
                if level == SeverityLevel::High {
                    high
                } else {
                    otherwise
                }
            }
        }
    }
}

/// A raw detection before impact assignment and severity filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Offending node; `None` for page-level findings such as a missing `<h1>`.
    pub node: Option<NodeId>,
    pub message: String,
}

impl Hit {
    pub fn at(node: NodeId, message: impl Into<String>) -> Self {
        Self {
            node: Some(node),
            message: message.into(),
        }
    }

    pub fn page(message: impl Into<String>) -> Self {
        Self {
            node: None,
            message: message.into(),
        }
    }
}

pub type Detector = fn(&Document) -> Result<Vec<Hit>, CheckError>;

pub struct RuleSpec {
    pub code: &'static str,
    pub category: Category,
    pub min_level: SeverityLevel,
    pub impact: ImpactPolicy,
    /// Messages from this rule carry the important marker.
    pub important: bool,
    pub detect: Detector,
}

pub struct CategorySpec {
    pub category: Category,
    /// Below this level the category reports a skipped, passing result.
    pub min_level: SeverityLevel,
    pub weight: u32,
    pub population: fn(&Document) -> usize,
}

const SERIOUS_AT_HIGH: ImpactPolicy = ImpactPolicy::HighElse {
    high: Impact::Serious,
    otherwise: Impact::Moderate,
};

pub static CATEGORIES: [CategorySpec; 7] = [
    CategorySpec {
        category: Category::Headings,
        min_level: SeverityLevel::VeryLow,
        weight: 10,
        population: headings::population,
    },
    CategorySpec {
        category: Category::Images,
        min_level: SeverityLevel::VeryLow,
        weight: 15,
        population: images::population,
    },
    CategorySpec {
        category: Category::Links,
        min_level: SeverityLevel::VeryLow,
        weight: 15,
        population: links::population,
    },
    CategorySpec {
        category: Category::Contrast,
        min_level: SeverityLevel::Medium,
        weight: 15,
        population: contrast::population,
    },
    CategorySpec {
        category: Category::Forms,
        min_level: SeverityLevel::Low,
        weight: 15,
        population: forms::population,
    },
    CategorySpec {
        category: Category::Aria,
        min_level: SeverityLevel::Medium,
        weight: 10,
        population: aria::population,
    },
    CategorySpec {
        category: Category::Keyboard,
        min_level: SeverityLevel::High,
        weight: 10,
        population: keyboard::population,
    },
];

pub static RULES: &[RuleSpec] = &[
    // headings
    RuleSpec {
        code: ids::CODE_MISSING_H1,
        category: Category::Headings,
        min_level: SeverityLevel::Low,
        impact: ImpactPolicy::Fixed(Impact::Moderate),
        important: false,
        detect: headings::missing_h1,
    },
    RuleSpec {
        code: ids::CODE_MULTIPLE_H1,
        category: Category::Headings,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Minor),
        important: false,
        detect: headings::multiple_h1,
    },
    RuleSpec {
        code: ids::CODE_HEADING_LEVEL_SKIP,
        category: Category::Headings,
        min_level: SeverityLevel::Medium,
        impact: ImpactPolicy::Fixed(Impact::Minor),
        important: false,
        detect: headings::level_skips,
    },
    RuleSpec {
        code: ids::CODE_EMPTY_HEADING,
        category: Category::Headings,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Minor),
        important: false,
        detect: headings::empty_headings,
    },
    // images
    RuleSpec {
        code: ids::CODE_IMG_MISSING_ALT,
        category: Category::Images,
        min_level: SeverityLevel::Low,
        impact: SERIOUS_AT_HIGH,
        important: false,
        detect: images::missing_alt,
    },
    RuleSpec {
        code: ids::CODE_IMG_MEANINGLESS_ALT,
        category: Category::Images,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Minor),
        important: false,
        detect: images::meaningless_alt,
    },
    // links
    RuleSpec {
        code: ids::CODE_EMPTY_LINK,
        category: Category::Links,
        min_level: SeverityLevel::Low,
        impact: SERIOUS_AT_HIGH,
        important: false,
        detect: links::empty_links,
    },
    RuleSpec {
        code: ids::CODE_GENERIC_LINK_TEXT,
        category: Category::Links,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Minor),
        important: false,
        detect: links::generic_text,
    },
    RuleSpec {
        code: ids::CODE_JAVASCRIPT_HREF,
        category: Category::Links,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Minor),
        important: false,
        detect: links::javascript_hrefs,
    },
    RuleSpec {
        code: ids::CODE_IMAGE_LINK_MISSING_ALT,
        category: Category::Links,
        min_level: SeverityLevel::Low,
        impact: SERIOUS_AT_HIGH,
        important: false,
        detect: links::image_links_missing_alt,
    },
    // contrast
    RuleSpec {
        code: ids::CODE_LOW_CONTRAST,
        category: Category::Contrast,
        min_level: SeverityLevel::Medium,
        impact: ImpactPolicy::Fixed(Impact::Serious),
        important: false,
        detect: contrast::low_contrast,
    },
    // forms
    RuleSpec {
        code: ids::CODE_MISSING_LABEL,
        category: Category::Forms,
        min_level: SeverityLevel::Medium,
        impact: SERIOUS_AT_HIGH,
        important: true,
        detect: forms::missing_labels,
    },
    // aria
    RuleSpec {
        code: ids::CODE_INVALID_ROLE,
        category: Category::Aria,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Moderate),
        important: false,
        detect: aria::invalid_roles,
    },
    RuleSpec {
        code: ids::CODE_MISSING_MAIN_LANDMARK,
        category: Category::Aria,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Moderate),
        important: false,
        detect: aria::missing_main,
    },
    // keyboard
    RuleSpec {
        code: ids::CODE_NEGATIVE_TABINDEX,
        category: Category::Keyboard,
        min_level: SeverityLevel::High,
        impact: ImpactPolicy::Fixed(Impact::Moderate),
        important: false,
        detect: keyboard::negative_tabindex,
    },
];

pub fn category_spec(category: Category) -> &'static CategorySpec {
    // CATEGORIES is declared in `Category::ALL` order.
    &CATEGORIES[Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default()]
}

pub fn rules_for(category: Category) -> impl Iterator<Item = &'static RuleSpec> {
    RULES.iter().filter(move |r| r.category == category)
}

pub fn total_weight() -> u32 {
    CATEGORIES.iter().map(|c| c.weight).sum()
}
