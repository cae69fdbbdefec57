use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `plx auth login`")]
    NotAuthenticated,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("client storage error: {0}")]
    StorageError(String),

    #[error("{0}")]
    Other(String),
}
