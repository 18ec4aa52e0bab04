//! Game sessions
//!
//! One [`Session`] per chat holds the secret word and the guess history and
//! renders progress by editing a single message in place.

mod registry;
mod session;

pub use registry::SessionRegistry;
pub use session::{
    DEFAULT_MAX_TRIES, GameMode, Guess, GuessOutcome, RejectReason, Session, SessionState,
    difficulty_hint,
};
