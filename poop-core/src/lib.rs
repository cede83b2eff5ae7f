//! # poop-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types, and tracing
//! initialization. Transport-agnostic; used by the bot crate's Telegram layer and handler chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, Sticker, ToCoreMessage, ToCoreUser, User, POOP_EMOJI,
};
