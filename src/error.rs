use std::path::PathBuf;

use thiserror::Error;

/// Failure local to a single schema entry. These are recorded in the batch
/// report and never abort the run.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("schema document could not be loaded from {path}: {source}")]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("schema document at {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("schema could not be compiled: {0}")]
    Compile(#[from] CompileError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EntryError {
    pub fn kind(&self) -> &'static str {
        match self {
            EntryError::NotFound { .. } => "not found",
            EntryError::Parse { .. } => "parse error",
            EntryError::Compile(_) => "compile failure",
            EntryError::Write { .. } => "write failure",
        }
    }
}

/// Failure that invalidates the whole batch. A naming collision means the
/// configured schema roster itself is inconsistent, so the run aborts before
/// any output is written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("naming collision: \"{first}\" and \"{second}\" both derive {what} \"{derived}\"")]
    NamingCollision {
        first: String,
        second: String,
        what: &'static str,
        derived: String,
    },
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("schema root must be an object schema, got {found}")]
    NonObjectRoot { found: String },
    #[error("unsupported schema construct: {0}")]
    Unsupported(String),
    #[error("unresolvable reference {0}")]
    UnresolvedRef(String),
}
