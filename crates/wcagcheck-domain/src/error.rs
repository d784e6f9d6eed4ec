use thiserror::Error;

/// A rule check could not complete. The engine records it against the category and keeps
/// running the remaining checks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("unparsable {property} value {value:?} on <{tag}>")]
    UnparsableColor {
        property: &'static str,
        value: String,
        tag: String,
    },
}
