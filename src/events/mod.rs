//! Match events and the status line they drive.

mod event;
mod status;

pub use event::MatchEvent;
pub use status::StatusMessage;
