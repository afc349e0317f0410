//! Streaming content hashing using BLAKE3

use crate::error::StorageError;
use crate::types::Digest;
use blake3::Hasher;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default read size for streaming hash computation: 1 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the content digest of a file by streaming it through an
/// incremental BLAKE3 hasher in `chunk_size`-byte reads.
///
/// The whole file is never held in memory, so files larger than RAM hash
/// fine. The file handle is released on every exit path. Open and read
/// failures are returned to the caller, which decides whether the file is
/// skipped or the operation aborts. A zero chunk size is rejected: a
/// zero-length read buffer would end the loop immediately and hash every
/// file as empty.
pub fn hash_file(file_path: &Path, chunk_size: usize) -> Result<Digest, StorageError> {
    if chunk_size == 0 {
        return Err(StorageError::InvalidChunkSize(chunk_size));
    }
    let mut file = File::open(file_path)?;
    let mut hasher = Hasher::new();
    let mut buf = vec![0u8; chunk_size];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(*hasher.finalize().as_bytes())
}

/// Compute the digest of an in-memory byte slice.
///
/// Produces the same digest `hash_file` would for a file with this content.
pub fn hash_bytes(content: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(content);
    *hasher.finalize().as_bytes()
}
