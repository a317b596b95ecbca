//! XMind package writing functionality.
//!
//! This module creates `.xmind` files: ZIP archives holding `content.xml`
//! and `meta.xml` at their root, both deflate-compressed.

use super::constants::{CONTENT_XML, META_XML};
use crate::common::{Error, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Prefix of the staging directory created next to the output archive
const STAGING_PREFIX: &str = "xmind-staging-";

/// Builder for XMind packages (ZIP archives)
///
/// # Examples
///
/// ```no_run
/// # use outline2xmind::xmind::PackageWriter;
/// # use outline2xmind::Result;
/// # fn example() -> Result<()> {
/// let mut writer = PackageWriter::new();
/// writer.add_file("content.xml", b"<xmap-content/>")?;
/// writer.add_file("meta.xml", b"<meta/>")?;
///
/// let bytes = writer.finish_to_bytes()?;
/// std::fs::write("map.xmind", bytes)?;
/// # Ok(())
/// # }
/// ```
pub struct PackageWriter<W: Write + Seek> {
    zip_writer: ZipWriter<W>,
    entries: Vec<String>,
}

impl PackageWriter<std::io::Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory
    pub fn new() -> Self {
        Self::with_writer(std::io::Cursor::new(Vec::new()))
    }

    /// Finish writing and return the bytes
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter<std::io::Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek> PackageWriter<W> {
    /// Create a new package writer with a custom writer
    pub fn with_writer(writer: W) -> Self {
        Self {
            zip_writer: ZipWriter::new(writer),
            entries: Vec::new(),
        }
    }

    /// Add a deflate-compressed file to the package
    ///
    /// # Arguments
    ///
    /// * `path` - Path within the ZIP archive (e.g., "content.xml")
    /// * `content` - File content as bytes
    pub fn add_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        if self.entries.iter().any(|e| e == path) {
            return Err(Error::InvalidFormat(format!("duplicate package entry: {path}")));
        }

        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content)?;
        self.entries.push(path.to_string());

        Ok(())
    }

    /// Entry names added so far, in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Finalize the ZIP archive and hand back the underlying writer
    pub fn finish(self) -> Result<W> {
        let writer = self.zip_writer.finish()?;
        Ok(writer)
    }
}

/// Package both XML parts into an archive at `output_path`.
///
/// The parts are first written to a staging directory next to the output,
/// then bundled from there. The staging directory is removed whether or not
/// packaging succeeds; on success a failed removal is reported as an error.
/// An existing file at `output_path` is overwritten.
pub fn pack(content: &[u8], meta: &[u8], output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let staging_root = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(staging_root)?;
    log::debug!("Staging package parts in {}", staging.path().display());

    fs::write(staging.path().join(CONTENT_XML), content)?;
    fs::write(staging.path().join(META_XML), meta)?;

    let file = File::create(output_path)?;
    let mut writer = PackageWriter::with_writer(BufWriter::new(file));
    for name in [CONTENT_XML, META_XML] {
        let bytes = fs::read(staging.path().join(name))?;
        writer.add_file(name, &bytes)?;
    }
    writer.finish()?.flush()?;

    staging.close()?;
    Ok(())
}
