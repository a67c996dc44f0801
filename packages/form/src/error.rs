/// A fault raised while wiring the controller to a page.
///
/// None of these are recoverable: the controller assumes the page structure it is deployed with, so a
/// missing element means the page and the controller disagree and the form would otherwise give no feedback.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required element could not be found.
    #[error("required element is missing from the page: {what}")]
    MissingElement { what: String },

    /// The [`FormConfig`](crate::FormConfig) cannot drive a form.
    #[error("invalid form configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Turn an optional lookup into a [`Error::MissingElement`] fault.
pub fn require<T>(found: Option<T>, what: impl Into<String>) -> Result<T> {
    found.ok_or_else(|| Error::MissingElement { what: what.into() })
}
