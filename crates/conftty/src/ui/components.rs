//! Reusable widgets shared by pages.

pub mod category_badge;
pub mod favorite_toggle;
pub mod footer_bar;
pub mod session_card;
pub mod status_bar;
