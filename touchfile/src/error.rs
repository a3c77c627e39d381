use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single touch call.
///
/// Every failure on an existing file reads as "unable to touch file", a
/// failure to create a missing one as "unable to open file to".
#[derive(Debug, Error)]
pub enum TouchError {
    #[error("unable to touch file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to touch file '{}'", path.display())]
    SetTimes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to touch file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to touch file '{}'", path.display())]
    Truncate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to open file to '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TouchError {
    /// Status code reported to script callers for any failure.
    pub const CODE: i32 = -1;

    pub fn code(&self) -> i32 {
        Self::CODE
    }
}

pub type TouchResult<T> = Result<T, TouchError>;
