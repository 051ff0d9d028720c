use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to accept client: {0}")]
    Accept(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompanionError>;
