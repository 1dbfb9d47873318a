//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Auth pages (`sign_in`, `register`, `sign_out`) drive the session; the
//! protected pages only read it. Guards are applied in `app`, not here.

pub mod dashboard;
pub mod my_courses;
pub mod register;
pub mod sign_in;
pub mod sign_out;
