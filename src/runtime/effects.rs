use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::command::FileSource;
use crate::error::{Result, TypistError};

pub fn read_source(source: &FileSource) -> Result<Vec<u8>> {
    match source {
        FileSource::Stdin => {
            let mut data = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut data)
                .map_err(|source| TypistError::Read {
                    path: "-".to_string(),
                    source,
                })?;
            Ok(data)
        }
        FileSource::Path(path) => fs::read(path).map_err(|source| TypistError::Read {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Append `data`, creating the file if needed.
pub fn append_file(path: &Path, data: &[u8]) -> Result<()> {
    let err = |source: io::Error| TypistError::Append {
        path: path.display().to_string(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(err)?;
    file.write_all(data).map_err(err)
}
