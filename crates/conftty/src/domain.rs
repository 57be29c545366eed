//! Display view models shared by presenters, primitives and the controller.

pub mod session;
pub mod speaker;
