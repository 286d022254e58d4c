use crate::error::{Result, WeatherError};
use crate::utils::constants::MONTH_ABBREVIATIONS;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Look up a two-digit month code ("01".."12") and the abbreviation used in file names
fn month_entry(code: &str) -> Result<(&'static str, &'static str)> {
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(c, _)| *c == code)
        .copied()
        .ok_or_else(|| WeatherError::InvalidMonth(code.to_string()))
}

/// A year and month given as `YYYY/MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    month_code: &'static str,
    month_abbreviation: &'static str,
}

impl Period {
    pub fn new(year: i32, month_code: &str) -> Result<Self> {
        let (month_code, month_abbreviation) = month_entry(month_code)?;

        Ok(Self {
            year,
            month_code,
            month_abbreviation,
        })
    }

    pub fn month_code(&self) -> &'static str {
        self.month_code
    }

    pub fn month_abbreviation(&self) -> &'static str {
        self.month_abbreviation
    }
}

impl FromStr for Period {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| WeatherError::InvalidPeriod(s.to_string()))?;

        if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(WeatherError::InvalidPeriod(s.to_string()));
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| WeatherError::InvalidPeriod(s.to_string()))?;

        Period::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.month_code)
    }
}

/// Selects data files by name: extension, year substring and optional month abbreviation
#[derive(Debug, Clone)]
pub struct FileFilter {
    extension: String,
    year: String,
    month: Option<&'static str>,
}

impl FileFilter {
    pub fn for_year(year: i32, extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
            year: year.to_string(),
            month: None,
        }
    }

    pub fn for_period(period: &Period, extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
            year: period.year.to_string(),
            month: Some(period.month_abbreviation()),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
            && file_name.contains(&self.year)
            && self.month.map_or(true, |month| file_name.contains(month))
    }
}

/// List the regular files in `folder` accepted by `filter`, sorted by file name
pub fn list_matching_files(folder: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!("Skipping non UTF-8 file name {:?}", name);
            continue;
        };

        if filter.matches(name) {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(
        "{} files in {} match {:?}",
        files.len(),
        folder.display(),
        filter
    );

    Ok(files)
}
