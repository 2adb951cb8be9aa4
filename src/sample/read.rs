use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::num::ParseFloatError;
use std::path::Path;

use csv::{Reader, ReaderBuilder};
use num_traits::{Float, FromPrimitive};
use serde::de::DeserializeOwned;

#[cfg(feature = "log")]
use log::debug;

use super::Sample;

/// Failure to load a [`Sample`] from CSV input.
#[derive(Debug)]
pub enum SampleError {
    /// The file could not be opened or read.
    Io(io::Error),
    /// Malformed CSV, or a record that does not deserialize.
    Csv(csv::Error),
    /// The requested header is not present.
    MissingColumn(String),
    /// A cell of the requested column is not a real number.
    Parse {
        /// 1-based data row, the header excluded.
        row: usize,
        /// The float parser's error.
        source: ParseFloatError,
    },
    /// Headers but no data records.
    EmptyFile,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Io(e) => write!(f, "I/O error: {}", e),
            SampleError::Csv(e) => write!(f, "CSV parsing error: {}", e),
            SampleError::MissingColumn(name) => write!(f, "CSV header has no column \"{}\"", name),
            SampleError::Parse { row, source } => {
                write!(f, "row {}: not a real number ({})", row, source)
            }
            SampleError::EmptyFile => write!(f, "CSV file contains no data records"),
        }
    }
}

impl StdError for SampleError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SampleError::Io(e) => Some(e),
            SampleError::Csv(e) => Some(e),
            SampleError::Parse { source, .. } => Some(source),
            SampleError::MissingColumn(_) | SampleError::EmptyFile => None,
        }
    }
}

impl From<io::Error> for SampleError {
    fn from(e: io::Error) -> Self {
        SampleError::Io(e)
    }
}

impl From<csv::Error> for SampleError {
    fn from(e: csv::Error) -> Self {
        SampleError::Csv(e)
    }
}

fn headed<R: io::Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader)
}

fn non_empty<T>(data: Vec<T>) -> Result<Sample<T>, SampleError> {
    if data.is_empty() {
        #[cfg(feature = "log")]
        debug!("sample: no data records");
        return Err(SampleError::EmptyFile);
    }
    Ok(Sample::new(data))
}

impl<T> Sample<T> {
    /// Read sample data from a CSV file with headers matching struct fields
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, SampleError>
    where
        T: DeserializeOwned,
    {
        Self::from_reader(std::fs::File::open(path)?)
    }

    /// Same as [`Sample::read`], from any byte source.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, SampleError>
    where
        T: DeserializeOwned,
    {
        let records = headed(reader)
            .deserialize()
            .collect::<Result<Vec<T>, _>>()?;
        non_empty(records)
    }
}

impl<F> Sample<F>
where
    F: Float + FromPrimitive,
{
    /// Read the real-valued column `column` of a headed CSV file.
    pub fn read_column<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, SampleError> {
        Self::column_from_reader(std::fs::File::open(path)?, column)
    }

    /// Same as [`Sample::read_column`], from any byte source.
    pub fn column_from_reader<R: io::Read>(reader: R, column: &str) -> Result<Self, SampleError> {
        let mut rdr = headed(reader);
        let index = rdr
            .headers()?
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| SampleError::MissingColumn(column.to_string()))?;

        let mut data = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let raw = record
                .get(index)
                .ok_or_else(|| SampleError::MissingColumn(column.to_string()))?;
            let value: f64 = raw
                .parse()
                .map_err(|source| SampleError::Parse { row: row + 1, source })?;
            data.push(F::from_f64(value).unwrap_or_else(F::nan));
        }

        non_empty(data)
    }
}
