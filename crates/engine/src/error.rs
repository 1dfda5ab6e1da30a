use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown page context: '{0}' (expected one of: home, barbers, ai-assistant, booking)")]
    UnknownPage(String),
}
