//! Binary encode/decode for persisted matrices.
//!
//! All fields are fixed width in native byte order, with no padding, no
//! magic and no version. Coordinates are 8-byte two's-complement
//! integers, counts are `u64`.
//!
//! ```text
//! [total value count u64]            (Layout::Counted only)
//! [row min i64] [row count u64]
//! per row, ascending:
//!     [col min i64] [col count u64] [col count × T::WIDTH bytes]
//! ```
//!
//! Empty rows are written as col min `0`, col count `0`. Decoding reads
//! value blocks in bounded chunks and allocates each row only after its
//! header has been read, so a hostile count cannot force an allocation
//! larger than the data actually present.

use std::io::{self, Read, Write};

use offstore_core::{last_coord, CodecError, Coord, Element};

use crate::matrix::OffsetMatrix;
use crate::vector::OffsetVector;

/// Values per chunk when streaming a row's value block.
pub const CHUNK_VALUES: usize = 4096;

/// Rows reserved up front when decoding; further rows grow as read.
const CHUNK_ROWS: usize = 1024;

/// Header variant of the persisted layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Leading total value count, checked against the rows on decode.
    #[default]
    Counted,
    /// No total value count; the header starts at the row min.
    Bare,
}

// ── Primitive writers ───────────────────────────────────────────

/// Write a native-order u64.
pub fn write_u64_ne(w: &mut dyn Write, v: u64) -> Result<(), CodecError> {
    w.write_all(&v.to_ne_bytes())?;
    Ok(())
}

/// Write a native-order coordinate.
pub fn write_coord_ne(w: &mut dyn Write, v: Coord) -> Result<(), CodecError> {
    w.write_all(&v.to_ne_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Fill `buf` completely; running out of input is [`CodecError::Truncated`]
/// naming `what`.
pub fn read_exact_or_truncated(
    r: &mut dyn Read,
    buf: &mut [u8],
    what: &str,
) -> Result<(), CodecError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => CodecError::Truncated {
            detail: format!("{what}: expected {} bytes", buf.len()),
        },
        _ => CodecError::Io(e),
    })
}

/// Read a native-order u64.
pub fn read_u64_ne(r: &mut dyn Read, what: &str) -> Result<u64, CodecError> {
    let mut buf = [0u8; 8];
    read_exact_or_truncated(r, &mut buf, what)?;
    Ok(u64::from_ne_bytes(buf))
}

/// Read a native-order coordinate.
pub fn read_coord_ne(r: &mut dyn Read, what: &str) -> Result<Coord, CodecError> {
    let mut buf = [0u8; 8];
    read_exact_or_truncated(r, &mut buf, what)?;
    Ok(Coord::from_ne_bytes(buf))
}

// ── Value blocks ────────────────────────────────────────────────

fn encode_values<T: Element>(
    w: &mut dyn Write,
    values: &[T],
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    for chunk in values.chunks(CHUNK_VALUES) {
        buf.clear();
        buf.resize(chunk.len() * T::WIDTH, 0);
        for (v, out) in chunk.iter().zip(buf.chunks_exact_mut(T::WIDTH)) {
            v.write_ne(out);
        }
        w.write_all(buf)?;
    }
    Ok(())
}

fn decode_values<T: Element>(
    r: &mut dyn Read,
    count: usize,
    buf: &mut Vec<u8>,
) -> Result<Vec<T>, CodecError> {
    let mut values = Vec::with_capacity(count.min(CHUNK_VALUES));
    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(CHUNK_VALUES);
        buf.resize(n * T::WIDTH, 0);
        read_exact_or_truncated(r, buf, "row values")?;
        values.extend(buf.chunks_exact(T::WIDTH).map(T::read_ne));
        remaining -= n;
    }
    Ok(values)
}

// ── Matrix encode/decode ────────────────────────────────────────

/// Encode `matrix` in `layout`.
///
/// With `progress`, the 1-based row number is written after each row as
/// `"{n}\r"`, followed by a final newline. Progress output never touches
/// `w`.
pub fn encode_matrix<T: Element>(
    w: &mut dyn Write,
    matrix: &OffsetMatrix<T>,
    layout: Layout,
    mut progress: Option<&mut dyn Write>,
) -> Result<(), CodecError> {
    if layout == Layout::Counted {
        write_u64_ne(w, matrix.values() as u64)?;
    }
    write_coord_ne(w, matrix.min())?;
    write_u64_ne(w, matrix.len() as u64)?;

    let mut buf = Vec::new();
    for (n, (row, r)) in matrix.rows().enumerate() {
        write_coord_ne(w, r.min())?;
        write_u64_ne(w, r.len() as u64)?;
        encode_values(w, r.as_slice(), &mut buf)?;
        log::trace!("encoded row {row}: {} values from column {}", r.len(), r.min());

        if let Some(out) = progress.as_deref_mut() {
            write!(out, "{}\r", n + 1)?;
            out.flush()?;
        }
    }
    if let Some(out) = progress {
        writeln!(out)?;
    }
    Ok(())
}

/// Decode a matrix in `layout` into `matrix`, replacing its contents.
///
/// The matrix is cleared first and keeps its default and limits. Declared
/// counts above the matrix's `max_span`, spans whose coordinates would
/// wrap, a total that disagrees with the rows, and bytes after the last
/// row are all errors. On error the matrix is left empty.
///
/// With `progress`, the running value count is written after each row as
/// `"{read}/{total}\r"` (or `"{read}\r"` for [`Layout::Bare`]), followed by
/// a final newline.
pub fn decode_matrix<T: Element>(
    r: &mut dyn Read,
    matrix: &mut OffsetMatrix<T>,
    layout: Layout,
    progress: Option<&mut dyn Write>,
) -> Result<(), CodecError> {
    matrix.clear();
    let result = decode_into(r, matrix, layout, progress);
    if result.is_err() {
        matrix.clear();
    }
    result
}

fn decode_into<T: Element>(
    r: &mut dyn Read,
    matrix: &mut OffsetMatrix<T>,
    layout: Layout,
    mut progress: Option<&mut dyn Write>,
) -> Result<(), CodecError> {
    let (default_value, config) = (matrix.default_value(), *matrix.config());
    let declared = match layout {
        Layout::Counted => Some(read_u64_ne(r, "total value count")?),
        Layout::Bare => None,
    };
    let rows_min = read_coord_ne(r, "row min")?;
    let rows_num = checked_count(read_u64_ne(r, "row count")?, config.max_span, "row count")?;

    if rows_num == 0 {
        if let Some(total) = declared.filter(|&t| t > 0) {
            return Err(CodecError::Malformed {
                detail: format!("no rows but a total of {total} values"),
            });
        }
    } else {
        last_coord(rows_min, rows_num).map_err(|_| CodecError::Malformed {
            detail: format!("{rows_num} rows from {rows_min} overflow the coordinate range"),
        })?;
    }

    let mut rows = Vec::with_capacity(rows_num.min(CHUNK_ROWS));
    let mut buf = Vec::new();
    let mut read_total: u64 = 0;
    for n in 0..rows_num {
        let row_coord = rows_min + n as Coord;
        let cols_min = read_coord_ne(r, "column min")?;
        let cols_num = checked_count(
            read_u64_ne(r, "column count")?,
            config.max_span,
            "column count",
        )?;
        let values = decode_values::<T>(r, cols_num, &mut buf)?;
        let mut row = OffsetVector::with_config(default_value, config);
        row.replace_span(cols_min, values)
            .map_err(|e| CodecError::Malformed {
                detail: format!("row {row_coord}: {e}"),
            })?;
        rows.push(row);
        read_total += cols_num as u64;
        log::trace!("decoded row {row_coord}: {cols_num} values from column {cols_min}");

        if let Some(out) = progress.as_deref_mut() {
            match declared {
                Some(total) => write!(out, "{read_total}/{total}\r")?,
                None => write!(out, "{read_total}\r")?,
            }
            out.flush()?;
        }
    }
    if let Some(out) = progress {
        writeln!(out)?;
    }

    if let Some(declared) = declared {
        if declared != read_total {
            return Err(CodecError::TotalMismatch {
                declared,
                actual: read_total,
            });
        }
    }
    expect_end(r)?;
    matrix.replace_rows(rows_min, rows);
    Ok(())
}

fn checked_count(count: u64, max_span: usize, what: &str) -> Result<usize, CodecError> {
    usize::try_from(count)
        .ok()
        .filter(|&n| n <= max_span)
        .ok_or_else(|| CodecError::Malformed {
            detail: format!("{what} {count} exceeds the span limit {max_span}"),
        })
}

fn expect_end(r: &mut dyn Read) -> Result<(), CodecError> {
    let mut probe = [0u8; 1];
    loop {
        match r.read(&mut probe) {
            Ok(0) => return Ok(()),
            Ok(_) => return Err(CodecError::TrailingBytes),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    }
}
