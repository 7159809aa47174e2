// ============================================================================
// Domain Modules
// ============================================================================

pub mod customer;
