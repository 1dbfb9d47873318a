//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive session and routing handles as props; nothing here
//! reaches for ambient context.

pub mod app_header;
pub mod guard;
pub mod loading_indicator;
