//! Reading table dumps from local or remote, optionally compressed, files.
use crate::error::ReadError;
use log::info;
use std::io::Read;

/// Reads the whole dump at `path` into memory.
///
/// `path` may be a local file or an http(s) URL. `.gz` and `.bz2` files are decompressed on the
/// fly.
pub fn read_dump(path: &str) -> Result<Vec<u8>, ReadError> {
    let mut reader = oneio::get_reader(path)?;
    let mut buffer = vec![];
    reader.read_to_end(&mut buffer)?;
    info!("read {} bytes from {}", buffer.len(), path);
    Ok(buffer)
}
