//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic free of Leptos rendering so it can be
//! unit tested without mounting components.

pub mod form;
pub mod guard;
