use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::error::FetchError;

pub const CHUNK_SIZE: usize = 8192;

/// Creates or truncates `destination` and writes `body` into it chunk by chunk.
///
/// Read errors come from the transfer and are reported as [`FetchError::Http`];
/// write errors are [`FetchError::Filesystem`]. A failed copy leaves whatever was
/// already written in place.
pub fn stream_to_file<R: Read>(body: &mut R, destination: &Path) -> Result<u64, FetchError> {
    let mut file = File::create(destination)
        .map_err(|err| FetchError::Filesystem(format!("create {}: {err}", destination.display())))?;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut written = 0u64;
    loop {
        let n = match body.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(FetchError::Http(err.to_string())),
        };
        file.write_all(&buf[..n]).map_err(|err| {
            FetchError::Filesystem(format!("write {}: {err}", destination.display()))
        })?;
        written += n as u64;
    }
    file.flush()
        .map_err(|err| FetchError::Filesystem(format!("flush {}: {err}", destination.display())))?;
    Ok(written)
}

/// Names of the entries directly inside `dir`, sorted.
pub fn list_entry_names(dir: &Path) -> Result<Vec<String>, FetchError> {
    let entries = fs::read_dir(dir)
        .map_err(|err| FetchError::Filesystem(format!("read {}: {err}", dir.display())))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| FetchError::Filesystem(err.to_string()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
