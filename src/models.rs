use serde::{Deserialize, Serialize};

// ============================================================================
// Customer Models
// ============================================================================

/// A customer row as stored (and returned to API callers).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Payload for creating a customer. Both fields are required.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

/// Partial-update payload. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CustomerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
