//! Handler implementations: logging, chat filter, event logging, reactions.

mod logging_filter;
mod poop_handler;
mod reaction_handler;

pub use logging_filter::{ChatFilterHandler, LoggingHandler};
pub use poop_handler::{event_for, PoopHandler};
pub use reaction_handler::ReactionHandler;
