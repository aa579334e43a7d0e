//! Loading schematic text from storage.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

const BOM: char = '\u{feff}';

/// Errors raised while loading a schematic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The source could not be opened or read.
    #[error("source unavailable: {}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    /// The source is not valid UTF-8.
    #[error("source is not utf-8: {}", path.display())]
    NotUtf8 { path: PathBuf },
}

/// Read the full contents of the source at the given path.
///
/// A leading byte order mark is stripped.
pub fn read<P>(path: P) -> Result<String, SourceError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let unavailable = |error| SourceError::Unavailable {
        path: path.to_owned(),
        error,
    };

    let mut file = File::open(path).map_err(unavailable)?;
    let mut buf = Vec::with_capacity(4096);
    file.read_to_end(&mut buf).map_err(unavailable)?;

    let Ok(mut text) = String::from_utf8(buf) else {
        return Err(SourceError::NotUtf8 {
            path: path.to_owned(),
        });
    };

    if text.starts_with(BOM) {
        text.drain(..BOM.len_utf8());
    }

    Ok(text)
}
