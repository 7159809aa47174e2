// ============================================================================
// Customer Business Rule Errors
// ============================================================================
//
// The full taxonomy for customer operations. NotFound / DuplicateEmail /
// validation variants map to 404 / 409 / 422 in the routes layer; Database
// covers everything the storage engine reports that is not a unique-constraint
// violation.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Cliente não encontrado")]
    NotFound,

    #[error("Email já cadastrado")]
    DuplicateEmail,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl CustomerError {
    /// True for the variants caused by a malformed payload.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyEmail | Self::InvalidEmail(_) | Self::EmptyName
        )
    }
}
