//! Handler modules for keyboard input, match actions, the setup form and the
//! saved-match library.

mod input_handler;
mod library_handler;
mod match_handler;
mod setup_handler;

pub use input_handler::InputHandler;
pub use library_handler::LibraryHandler;
pub use match_handler::MatchHandler;
pub use setup_handler::SetupHandler;
