use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Invalid address family: {0}")]
    InvalidAddressFamily(String),
}
