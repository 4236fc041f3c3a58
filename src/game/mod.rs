//! Game progression: dictionary, keyboard aggregation, and the session
//! state machine.

mod dictionary;
mod keyboard;
mod session;

pub use dictionary::{Dictionary, EmptyPoolError};
pub use keyboard::KeyboardState;
pub use session::{GameSession, GuessError, MAX_ATTEMPTS, SessionStatus, SubmitOutcome};
