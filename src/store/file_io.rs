// shortcuts-vdf/src/store/file_io.rs

//! Whole-file persistence of a shortcuts document.
//!
//! Reads and writes are single blocking calls. There is no temp-file rename,
//! so an interrupted write can leave a truncated file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::Result;
use crate::value::Document;

/// Reads and decodes the file at `path`. A missing file is an empty document.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist; starting with no shortcuts.", path.display());
            return Ok(Document::new());
        }
        Err(e) => return Err(e.into()),
    };
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode(&bytes)?)
}

/// Encodes `doc` and writes it to `path`, creating parent directories first.
pub fn write_document(path: impl AsRef<Path>, doc: &Document) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let bytes = encode(doc);
    fs::write(path, &bytes)?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
