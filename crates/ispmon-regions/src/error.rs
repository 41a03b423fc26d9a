#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no divisions")]
    Empty,

    #[error("division {division} has no districts")]
    EmptyDivision { division: String },

    #[error("empty {field} in catalog row for {id}")]
    EmptyField { field: &'static str, id: String },

    #[error("duplicate region id: {id}")]
    DuplicateId { id: String },

    #[error("region id {id} collides with the reserved root id")]
    ReservedId { id: String },

    #[error("failed to parse region CSV: {message}")]
    Csv { message: String },

    #[error("region CSV is missing required column {column}")]
    MissingColumn { column: &'static str },
}
