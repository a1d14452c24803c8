//! Error types for the rule-file layer
//!
//! The engine core is infallible by construction: names are interned on
//! first sight and ids are only minted internally, so there is nothing to
//! fail. Errors only arise when loading or saving rule sets.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
