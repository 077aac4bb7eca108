//! Error type shared by the week model, seed loading and the terminal shell.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::fields::Day;
use crate::task::TaskId;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to read seed file {}: {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse seed file {}: {source}", .path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode seed: {0}")]
    SeedEncode(#[from] serde_json::Error),

    #[error("no task {id} on {day}")]
    TaskNotFound { day: Day, id: TaskId },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
