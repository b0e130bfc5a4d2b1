//! Table loader — whitespace-delimited face-count text → [`NeighborTable`].
//!
//! Accepts the plain matrices written by Voronoi post-processing tools:
//!
//! ```text
//! # n1 n2 n3 n4 n5 n6 n7
//! 0 0 0 2 8 2 0
//! 0 0 1 3 6 3 0
//! ```
//!
//! Blank lines and `#` comments are skipped. Cells may be written as
//! integers or as decimals (`8.0`); decimals are truncated toward zero.
//! Either the whole table parses or nothing is returned.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::model::NeighborTable;
use crate::{Error, Result};

/// Parses face-count tables from files, readers, or strings.
pub struct TableLoader;

impl TableLoader {
    /// Load the table stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<NeighborTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Resource {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("reading {}", path.display());
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::Io(source) => Error::Resource { path: path.to_path_buf(), source },
            other => other,
        })
    }

    /// Parse a table held in memory.
    pub fn parse(text: &str) -> Result<NeighborTable> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse a table from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<NeighborTable> {
        let mut columns: Option<usize> = None;
        let mut cells = Vec::new();
        let mut truncated = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line_no = line_no + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(Error::Parse(format!("line {line_no}: not valid UTF-8 text")));
                }
                Err(e) => return Err(e.into()),
            };
            let data = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };
            if data.trim().is_empty() {
                continue;
            }

            let before = cells.len();
            for (col, token) in data.split_whitespace().enumerate() {
                let (count, was_truncated) = parse_count(token).map_err(|message| {
                    Error::Parse(format!("line {line_no}, column {}: {message}", col + 1))
                })?;
                truncated += usize::from(was_truncated);
                cells.push(count);
            }

            let width = cells.len() - before;
            match columns {
                None => columns = Some(width),
                Some(expected) if expected != width => {
                    return Err(Error::Parse(format!(
                        "line {line_no} has {width} columns, expected {expected}"
                    )));
                }
                Some(_) => {}
            }
        }

        if truncated > 0 {
            tracing::warn!("{truncated} non-integral cells truncated toward zero");
        }

        let columns = columns.ok_or_else(|| Error::Parse("table has no data rows".into()))?;
        NeighborTable::from_flat(columns, cells)
    }
}

/// Parse one cell. Returns the count and whether a fractional part was dropped.
fn parse_count(token: &str) -> std::result::Result<(u32, bool), String> {
    if let Ok(n) = token.parse::<u32>() {
        return Ok((n, false));
    }

    let value: f64 = token
        .parse()
        .map_err(|_| format!("'{token}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{token}' is not a finite number"));
    }
    if value < 0.0 {
        return Err(format!("'{token}' is negative; face counts must be non-negative"));
    }
    if value > f64::from(u32::MAX) {
        return Err(format!("'{token}' is too large for a face count"));
    }

    let whole = value.trunc();
    Ok((whole as u32, whole != value))
}
