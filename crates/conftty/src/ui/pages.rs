//! Full-screen UI page modules.

pub mod session_detail;
pub mod speaker_list;
