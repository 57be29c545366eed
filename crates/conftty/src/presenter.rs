//! Presenters turning controller snapshots into render trees and routing
//! gestures back to the controller.

pub mod session_detail;
pub mod speaker_list;

pub use session_detail::{SessionDetailPresenter, SessionDetailTree, VotingSurface};
pub use speaker_list::{SpeakerListPresenter, SpeakerListTree};
