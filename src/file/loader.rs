//! Loading document text from files or standard input.
//!
//! The loader hands back raw text; parsing belongs to the edit layer. Gzip
//! input is transparent: files with a `.gz` extension are decompressed, and
//! stdin is sniffed for the gzip magic bytes.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads document text from a file, decompressing `.gz` files.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid UTF-8, or is a
/// `.gz` file that fails to decompress.
///
/// # Example
///
/// ```no_run
/// use yamledit::file::loader::load_document;
///
/// let text = load_document("config.yaml").unwrap();
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_gzipped {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        decompress_gzip(&bytes)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Reads document text from standard input until EOF, decompressing if the
/// stream starts with the gzip magic bytes.
pub fn load_document_from_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip(&buffer)
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")
    }
}

fn decompress_gzip(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip data")?;
    Ok(content)
}
