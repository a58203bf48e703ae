//! Game sessions: a position plus its move history.

mod record;
mod repetition;
mod session;

pub use record::{MoveListEntry, MoveRecord};
pub use session::GameSession;
