//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `navigation`, `sign_out`) so guards
//! and pages depend on small focused models.

pub mod navigation;
pub mod session;
pub mod sign_out;
