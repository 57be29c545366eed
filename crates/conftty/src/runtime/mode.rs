//! Screen-specific key handling modules.

pub(crate) mod session_detail;
pub(crate) mod speaker_list;
