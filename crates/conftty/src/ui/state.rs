//! Local UI state owned by mounted screens.

pub mod feedback;
pub mod focus;
pub mod help_action;
pub mod render_signal;
