use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Bot error: {0}")]
    Bot(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Message has no user sender")]
    MissingSender,

    #[error("Forwarded message has no visible sender")]
    HiddenForwardSender,

    #[error("Forwarded message has no forward date")]
    MissingForwardDate,
}

pub type Result<T> = std::result::Result<T, BotError>;
