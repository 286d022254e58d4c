use crate::error::{Result, WeatherError};
use crate::models::WeatherRecord;
use crate::utils::constants::{
    DATE_COLUMN_INDEX, DATE_FORMAT, MAX_HUMIDITY_COLUMN, MAX_TEMPERATURE_COLUMN,
    MIN_TEMPERATURE_COLUMN,
};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Physical positions of the required columns, resolved once per file from its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub max_temperature: usize,
    pub min_temperature: usize,
    pub max_humidity: usize,
}

impl ColumnMapping {
    pub fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| WeatherError::MissingColumn {
                    column: name.to_string(),
                    path: path.to_path_buf(),
                })
        };

        Ok(Self {
            max_temperature: find(MAX_TEMPERATURE_COLUMN)?,
            min_temperature: find(MIN_TEMPERATURE_COLUMN)?,
            max_humidity: find(MAX_HUMIDITY_COLUMN)?,
        })
    }

    pub fn required(&self) -> [(&'static str, usize); 3] {
        [
            (MAX_TEMPERATURE_COLUMN, self.max_temperature),
            (MIN_TEMPERATURE_COLUMN, self.min_temperature),
            (MAX_HUMIDITY_COLUMN, self.max_humidity),
        ]
    }

    /// A row is usable only if every required cell is present and non-empty
    pub fn is_complete(&self, record: &StringRecord) -> bool {
        self.required()
            .iter()
            .all(|&(_, index)| record.get(index).is_some_and(|value| !value.is_empty()))
    }
}

/// A data row that survived filtering, with its line in the source file
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub line: u64,
    pub record: StringRecord,
}

/// Filtered rows of one data file. Values are still raw text.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub columns: ColumnMapping,
    pub rows: Vec<ParsedRow>,
    pub dropped_rows: usize,
}

impl ParsedFile {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert a filtered row into a typed record
    pub fn record(&self, row: &ParsedRow) -> Result<WeatherRecord> {
        let date_str = self.cell(row, "Date", DATE_COLUMN_INDEX)?;
        let date = NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
            .map_err(|_| self.conversion_error(row, "Date", date_str))?;

        Ok(WeatherRecord::new(
            date,
            self.number(row, MAX_TEMPERATURE_COLUMN, self.columns.max_temperature)?,
            self.number(row, MIN_TEMPERATURE_COLUMN, self.columns.min_temperature)?,
            self.number(row, MAX_HUMIDITY_COLUMN, self.columns.max_humidity)?,
        ))
    }

    /// Typed records for all filtered rows, in file order
    pub fn records(&self) -> Result<Vec<WeatherRecord>> {
        self.rows.iter().map(|row| self.record(row)).collect()
    }

    fn cell<'r>(&self, row: &'r ParsedRow, column: &str, index: usize) -> Result<&'r str> {
        row.record
            .get(index)
            .ok_or_else(|| self.conversion_error(row, column, ""))
    }

    fn number<T: FromStr>(&self, row: &ParsedRow, column: &str, index: usize) -> Result<T> {
        let value = self.cell(row, column, index)?;
        value
            .trim()
            .parse::<T>()
            .map_err(|_| self.conversion_error(row, column, value))
    }

    fn conversion_error(&self, row: &ParsedRow, column: &str, value: &str) -> WeatherError {
        WeatherError::Conversion {
            column: column.to_string(),
            value: value.to_string(),
            line: row.line,
            path: self.path.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordReader;

impl RecordReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a data file, locate the required columns by header name and drop
    /// rows missing any of them
    pub fn parse(&self, path: &Path) -> Result<ParsedFile> {
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file), path)
    }

    /// Same as [`RecordReader::parse`] over any reader; `path` is used for error reporting
    pub fn parse_reader<R: Read>(&self, reader: R, path: &Path) -> Result<ParsedFile> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMapping::from_headers(csv_reader.headers()?, path)?;

        let mut rows = Vec::new();
        let mut dropped_rows = 0;

        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            if !columns.is_complete(&record) {
                debug!("Dropping incomplete row at line {} of {}", line, path.display());
                dropped_rows += 1;
                continue;
            }

            rows.push(ParsedRow { line, record });
        }

        debug!(
            "Parsed {}: {} rows kept, {} dropped",
            path.display(),
            rows.len(),
            dropped_rows
        );

        Ok(ParsedFile {
            path: path.to_path_buf(),
            columns,
            rows,
            dropped_rows,
        })
    }
}
