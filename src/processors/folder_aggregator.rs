use crate::analyzers::ExtremaFinder;
use crate::error::{Result, WeatherError};
use crate::models::{AveragesSummary, ExtremesSummary, FileExtremes, SkippedFile};
use crate::readers::RecordReader;
use crate::settings::Settings;
use crate::utils::constants::DEFAULT_DATA_EXTENSION;
use crate::utils::filename::{list_matching_files, FileFilter, Period};
use crate::utils::progress::ProgressReporter;
use std::path::Path;
use tracing::{info, warn};

/// Per-file results of one folder scan, in processing order
#[derive(Debug, Default)]
struct FolderScan {
    extremes: Vec<FileExtremes>,
    skipped: Vec<SkippedFile>,
}

/// Runs the parse/extrema pipeline over the matching files of a folder and
/// reduces the per-file results.
pub struct FolderAggregator {
    reader: RecordReader,
    finder: ExtremaFinder,
    extension: String,
    strict: bool,
    show_progress: bool,
}

impl FolderAggregator {
    pub fn new() -> Self {
        Self {
            reader: RecordReader::new(),
            finder: ExtremaFinder::new(),
            extension: DEFAULT_DATA_EXTENSION.to_string(),
            strict: true,
            show_progress: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_extension(&settings.data_extension)
            .with_strict(settings.strict)
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// When not strict, files with schema or conversion errors are skipped
    /// with a warning instead of aborting the scan
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Highest/lowest temperature and highest humidity over every file of `year`.
    /// `None` when no file matches.
    pub fn extremes_for_year(&self, folder: &Path, year: i32) -> Result<Option<ExtremesSummary>> {
        let filter = FileFilter::for_year(year, &self.extension);
        let scan = self.scan(folder, &filter)?;

        Ok(ExtremesSummary::from_files(&scan.extremes).map(|s| s.with_skipped(scan.skipped)))
    }

    /// Same as [`FolderAggregator::extremes_for_year`] restricted to one month
    pub fn extremes_for_period(
        &self,
        folder: &Path,
        period: &Period,
    ) -> Result<Option<ExtremesSummary>> {
        let filter = FileFilter::for_period(period, &self.extension);
        let scan = self.scan(folder, &filter)?;

        Ok(ExtremesSummary::from_files(&scan.extremes).map(|s| s.with_skipped(scan.skipped)))
    }

    /// Means of the per-file extremes for one month. `None` when no file matches.
    pub fn monthly_averages(
        &self,
        folder: &Path,
        period: &Period,
    ) -> Result<Option<AveragesSummary>> {
        let filter = FileFilter::for_period(period, &self.extension);
        let scan = self.scan(folder, &filter)?;

        Ok(AveragesSummary::from_files(&scan.extremes).map(|s| s.with_skipped(scan.skipped)))
    }

    /// Parse one file and find its extremes
    pub fn file_extremes(&self, path: &Path) -> Result<FileExtremes> {
        let parsed = self.reader.parse(path)?;
        self.finder.find_extremes(&parsed)
    }

    fn scan(&self, folder: &Path, filter: &FileFilter) -> Result<FolderScan> {
        if !folder.is_dir() {
            return Err(WeatherError::FolderNotFound(folder.to_path_buf()));
        }

        let files = list_matching_files(folder, filter)?;
        let progress = ProgressReporter::new(
            files.len() as u64,
            "Reading weather files...",
            !self.show_progress,
        );

        let mut scan = FolderScan::default();
        for path in &files {
            progress.set_message(&format!("Reading {}", path.display()));

            match self.file_extremes(path) {
                Ok(extremes) => scan.extremes.push(extremes),
                Err(e @ WeatherError::NoRows { .. }) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    scan.skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) if !self.strict && e.is_file_level() => {
                    warn!("Skipping {}: {}", path.display(), e);
                    scan.skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }

            progress.increment(1);
        }
        progress.finish_and_clear();

        info!(
            "Scanned {}: {} files used, {} skipped",
            folder.display(),
            scan.extremes.len(),
            scan.skipped.len()
        );

        Ok(scan)
    }
}

impl Default for FolderAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Extreme;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "PKT,Max TemperatureC,Mean TemperatureC,Min TemperatureC,Max Humidity";

    fn write_file(dir: &TempDir, name: &str, rows: &[&str]) {
        let mut content = format!("{}\n", HEADER);
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_folder() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Murree_weather_2011_Jan.txt",
            &["2011-1-1,5,2,-4,90", "2011-1-2,8,3,-1,70"],
        );
        write_file(
            &dir,
            "Murree_weather_2011_Jun.txt",
            &["2011-6-1,31,25,18,60", "2011-6-2,33,26,19,55"],
        );
        write_file(
            &dir,
            "Murree_weather_2012_Jun.txt",
            &["2012-6-1,40,30,20,99"],
        );
        dir
    }

    #[test]
    fn test_extremes_for_year() {
        let dir = sample_folder();

        let summary = FolderAggregator::new()
            .extremes_for_year(dir.path(), 2011)
            .unwrap()
            .unwrap();

        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.max_temperature, Extreme::new(33.0, date(2011, 6, 2)));
        assert_eq!(summary.min_temperature, Extreme::new(-4.0, date(2011, 1, 1)));
        assert_eq!(summary.max_humidity, Extreme::new(90, date(2011, 1, 1)));
    }

    #[test]
    fn test_single_file_year() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Murree_weather_2023_Jan.txt",
            &["2023-01-01,30,20,10,50", "2023-01-02,35,20,5,60"],
        );

        let summary = FolderAggregator::new()
            .extremes_for_year(dir.path(), 2023)
            .unwrap()
            .unwrap();

        assert_eq!(summary.max_temperature, Extreme::new(35.0, date(2023, 1, 2)));
        assert_eq!(summary.min_temperature, Extreme::new(5.0, date(2023, 1, 2)));
        assert_eq!(summary.max_humidity, Extreme::new(60, date(2023, 1, 2)));
    }

    #[test]
    fn test_negative_year_maximum_is_reported() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "Murree_weather_2023_Jan.txt",
            &["2023-01-01,-5,-6,-10,50", "2023-01-02,-5,-7,-12,60"],
        );

        let summary = FolderAggregator::new()
            .extremes_for_year(dir.path(), 2023)
            .unwrap()
            .unwrap();

        assert_eq!(summary.max_temperature, Extreme::new(-5.0, date(2023, 1, 1)));
        assert_eq!(summary.min_temperature, Extreme::new(-12.0, date(2023, 1, 2)));
    }

    #[test]
    fn test_no_matching_files() {
        let dir = sample_folder();
        let aggregator = FolderAggregator::new();

        assert!(aggregator.extremes_for_year(dir.path(), 1999).unwrap().is_none());
        assert!(aggregator
            .monthly_averages(dir.path(), &"2011/03".parse().unwrap())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_monthly_averages() {
        let dir = sample_folder();
        write_file(
            &dir,
            "Lahore_weather_2011_Jun.txt",
            &["2011-6-1,45,38,28,41"],
        );

        let averages = FolderAggregator::new()
            .monthly_averages(dir.path(), &"2011/06".parse().unwrap())
            .unwrap()
            .unwrap();

        assert_eq!(averages.files_processed, 2);
        assert_eq!(averages.avg_max_temperature, 39.0);
        assert_eq!(averages.avg_min_temperature, 23.0);
        assert_eq!(averages.avg_max_humidity, 50.5);
    }

    #[test]
    fn test_extremes_for_period() {
        let dir = sample_folder();

        let summary = FolderAggregator::new()
            .extremes_for_period(dir.path(), &"2011/01".parse().unwrap())
            .unwrap()
            .unwrap();

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.max_temperature, Extreme::new(8.0, date(2011, 1, 2)));
    }

    #[test]
    fn test_bad_file_aborts_strict_scan() {
        let dir = sample_folder();
        fs::write(
            dir.path().join("Murree_weather_2011_Mar.txt"),
            "PKT,Max TemperatureC\n2011-3-1,20\n",
        )
        .unwrap();

        let result = FolderAggregator::new().extremes_for_year(dir.path(), 2011);

        assert!(matches!(result, Err(WeatherError::MissingColumn { .. })));
    }

    #[test]
    fn test_bad_file_skipped_when_lenient() {
        let dir = sample_folder();
        write_file(&dir, "Murree_weather_2011_Mar.txt", &["2011-3-1,warm,1,1,1"]);

        let summary = FolderAggregator::new()
            .with_strict(false)
            .extremes_for_year(dir.path(), 2011)
            .unwrap()
            .unwrap();

        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.skipped.len(), 1);
        assert!(summary.skipped[0].path.ends_with("Murree_weather_2011_Mar.txt"));
    }

    #[test]
    fn test_file_without_rows_is_skipped() {
        let dir = sample_folder();
        write_file(&dir, "Murree_weather_2011_Feb.txt", &["2011-2-1,,,,"]);

        let summary = FolderAggregator::new()
            .extremes_for_year(dir.path(), 2011)
            .unwrap()
            .unwrap();

        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.skipped.len(), 1);
    }

    #[test]
    fn test_missing_folder() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("weatherfiles");

        assert!(matches!(
            FolderAggregator::new().extremes_for_year(&missing, 2011),
            Err(WeatherError::FolderNotFound(_))
        ));
    }

    #[test]
    fn test_repeated_scans_are_identical() {
        let dir = sample_folder();
        let aggregator = FolderAggregator::new();

        let first = aggregator.extremes_for_year(dir.path(), 2011).unwrap();
        let second = aggregator.extremes_for_year(dir.path(), 2011).unwrap();

        assert_eq!(first, second);
    }
}
