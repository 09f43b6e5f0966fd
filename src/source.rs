//! Where values to insert come from: any text made of whitespace separated values, usually a
//! file with one integer per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Failure to get values out of a source. Malformed values are not errors: reading simply stops
/// at the first one.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be opened.
    #[error("could not open file: {}", path.display())]
    Open {
        /// The file that was asked for.
        path: PathBuf,
        /// Why opening it failed.
        #[source]
        source: io::Error,
    },
    /// The source was opened but reading from it failed part way.
    #[error("could not read values")]
    Read {
        /// The underlying I/O failure.
        #[from]
        source: io::Error,
    },
}

/// Reads values separated by any whitespace, spaces and newlines alike, in the order they appear.
///
/// Reading stops at the first token that doesn't parse as a `T`, or at the first token holding
/// bytes that aren't UTF-8. Everything before it is kept and the rest of the input is ignored.
/// Only failures of the reader itself are errors.
///
/// # Examples
///
/// ```
/// use bst_queue::source::read_values;
///
/// let values: Vec<i32> = read_values("5 3\n8\n  1 4\n".as_bytes()).unwrap();
/// assert_eq!(values, vec![5, 3, 8, 1, 4]);
///
/// let values: Vec<i32> = read_values("7 x 9".as_bytes()).unwrap();
/// assert_eq!(values, vec![7]);
///
/// let values: Vec<i32> = read_values(&b"1\n2\n\xff\n3\n"[..]).unwrap();
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn read_values<T, R>(mut reader: R) -> Result<Vec<T>, SourceError>
where
    T: FromStr,
    R: BufRead,
{
    let mut values = Vec::new();
    let mut line = Vec::new();
    let mut line_number = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_number += 1;

        let (text, valid) = match std::str::from_utf8(&line) {
            Ok(text) => (text, true),
            Err(err) => (whole_tokens(&line[..err.valid_up_to()]), false),
        };
        for token in text.split_whitespace() {
            match token.parse() {
                Ok(value) => values.push(value),
                Err(_) => {
                    log::warn!(
                        "stopped reading at {:?} on line {}, kept {} values",
                        token,
                        line_number,
                        values.len()
                    );
                    return Ok(values);
                }
            }
        }

        if !valid {
            log::warn!(
                "stopped reading at invalid UTF-8 on line {}, kept {} values",
                line_number,
                values.len()
            );
            return Ok(values);
        }
    }

    Ok(values)
}

/// The part of a valid UTF-8 prefix made of complete tokens. A token running straight into the
/// invalid bytes is cut off with them.
fn whole_tokens(prefix: &[u8]) -> &str {
    let text = std::str::from_utf8(prefix).unwrap_or_default();
    match text.rfind(char::is_whitespace) {
        Some(end) => &text[..end],
        None => "",
    }
}

/// Opens the file at `path` and reads its values with [`read_values`].
pub fn load_file<T, P>(path: P) -> Result<Vec<T>, SourceError>
where
    T: FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("reading values from {}", path.display());

    read_values(BufReader::new(file))
}
