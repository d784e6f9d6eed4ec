//! Rendering: a pure view model of an audit plus HTML and Markdown adapters.

#![forbid(unsafe_code)]

mod html;
mod markdown;
mod model;
mod view;

pub use html::{escape_html, render_html_fragments, render_html_report, HtmlFragments};
pub use markdown::render_markdown;
pub use model::{
    BadgeView, CategoryResults, CategoryRow, GroupedViolation, PageView, RenderableReport,
    ReportView, RowStatus, Tip,
};
pub use view::build_view;
