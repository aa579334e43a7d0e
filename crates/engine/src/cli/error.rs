use core::fmt;
use std::path::{Path, PathBuf};

use crate::error::{LineCol, SchematicError};

/// Attach the input path and position to a grid error.
pub fn error_context(path: &Path, error: SchematicError) -> anyhow::Error {
    let pos = error.pos();

    let context = ErrorContext {
        path: path.to_owned(),
        pos,
    };

    anyhow::Error::new(error).context(context)
}

/// Location of an error in an input file.
#[derive(Debug)]
struct ErrorContext {
    path: PathBuf,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path.display(), pos = self.pos)
    }
}
