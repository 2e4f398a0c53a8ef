//! Error types for resource initialization and the file adapter.
//!
//! The normalization pipeline itself is total and never fails; only loading
//! the linguistic resources and the surrounding file I/O can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while initializing a linguistic resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{kind} not found: {}", path.display())]
    Missing { kind: &'static str, path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to build Hunspell dictionary {name}: {message}")]
    Hunspell { name: String, message: String },
    #[error("invalid resource config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while reading a document or writing its normalized output.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Erro: Arquivo não encontrado em {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize trace: {0}")]
    Trace(#[from] serde_json::Error),
}
