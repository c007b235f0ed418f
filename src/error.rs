use thiserror::Error;

/// Errors raised while parsing page content and mapping infoboxes.
#[derive(Debug, Error)]
pub enum Error {
    /// Page content that is not the expected JSON shape. The batch skips the
    /// page and continues.
    #[error("unparseable page content: {0}")]
    InvalidPage(#[from] serde_json::Error),

    /// A template block without a name is structurally malformed.
    #[error("unnamed template on page {page:?}")]
    UnnamedTemplate { page: String },

    /// A mapping rule needs both fields of a pair; continuing with only one
    /// half would silently misalign the extracted data.
    #[error("template {template:?} on page {page:?}: field {field:?} is required alongside {other:?}")]
    MissingRequiredField {
        page: String,
        template: String,
        field: &'static str,
        other: &'static str,
    },

    /// Entities must carry a non-empty display name.
    #[error("entity name must not be empty")]
    EmptyEntityName,
}
