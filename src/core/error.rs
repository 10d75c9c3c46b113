use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryModeError {
    #[error("unknown delivery mode name: {0}")]
    UnknownName(String),
    #[error("unknown JMS delivery mode code: {0}")]
    UnknownCode(i32),
}
