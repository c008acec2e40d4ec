//! Saving and loading a matrix to and from a file path.
//!
//! Thin wrappers that open the file, buffer it, and hand the stream to
//! [`codec::encode_matrix`](crate::codec::encode_matrix) or
//! [`codec::decode_matrix`](crate::codec::decode_matrix).

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use offstore_core::{CodecError, Element};

use crate::codec::{decode_matrix, encode_matrix, Layout};
use crate::matrix::OffsetMatrix;

impl<T: Element> OffsetMatrix<T> {
    /// Write the matrix to `path` in the counted layout, replacing any
    /// existing file.
    ///
    /// Fails with [`CodecError::Open`] if the file cannot be created.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        self.save_with(path, Layout::Counted, None)
    }

    /// As [`save`](Self::save), reporting per-row progress to `out`.
    pub fn save_verbose(
        &self,
        path: impl AsRef<Path>,
        out: &mut dyn Write,
    ) -> Result<(), CodecError> {
        self.save_with(path, Layout::Counted, Some(out))
    }

    /// Write the matrix to `path` in `layout`, optionally reporting
    /// progress.
    pub fn save_with(
        &self,
        path: impl AsRef<Path>,
        layout: Layout,
        progress: Option<&mut dyn Write>,
    ) -> Result<(), CodecError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        encode_matrix(&mut writer, self, layout, progress)?;
        writer.flush()?;
        log::debug!(
            "saved matrix to {}: {} rows, {} values",
            path.display(),
            self.len(),
            self.values()
        );
        Ok(())
    }

    /// Replace the matrix contents with the counted-layout file at `path`.
    ///
    /// Fails with [`CodecError::Open`], leaving the matrix untouched, if the
    /// file cannot be opened. Any later failure leaves the matrix empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        self.load_with(path, Layout::Counted, None)
    }

    /// As [`load`](Self::load), reporting progress in values read to `out`.
    pub fn load_verbose(
        &mut self,
        path: impl AsRef<Path>,
        out: &mut dyn Write,
    ) -> Result<(), CodecError> {
        self.load_with(path, Layout::Counted, Some(out))
    }

    /// Replace the matrix contents with the `layout` file at `path`,
    /// optionally reporting progress.
    pub fn load_with(
        &mut self,
        path: impl AsRef<Path>,
        layout: Layout,
        progress: Option<&mut dyn Write>,
    ) -> Result<(), CodecError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        if let Err(e) = decode_matrix(&mut reader, self, layout, progress) {
            log::debug!("failed to load matrix from {}: {e}", path.display());
            return Err(e);
        }
        log::debug!(
            "loaded matrix from {}: {} rows, {} values",
            path.display(),
            self.len(),
            self.values()
        );
        Ok(())
    }
}
