// ============================================================================
// Customer Domain - Business Rules for the Customer Resource
// ============================================================================
//
// This module contains all Customer-specific code:
// - Value objects (Email)
// - Errors (CustomerError enum)
//
// Storage access lives in `crate::db`; this module is pure validation.
//
// ============================================================================

pub mod errors;
pub mod value_objects;

// Re-export for convenience
pub use errors::*;
pub use value_objects::*;
