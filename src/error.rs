use std::io;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}
