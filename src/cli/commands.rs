use crate::cli::args::{Cli, Commands};
use crate::error::{Result, WeatherError};
use crate::models::ExtremesSummary;
use crate::processors::FolderAggregator;
use crate::settings::Settings;
use crate::writers::{BarChart, OutputFormat, ReportPresenter};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

const NO_DATA_FOR_YEAR: &str = "No data found for the given year.";
const NO_DATA_FOR_MONTH: &str = "No data found for the given year and month.";

pub fn run(cli: Cli) -> Result<()> {
    // Periods are validated by clap; the folder is the remaining user input
    ensure_folder(cli.command.folder())?;

    setup_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.lenient {
        settings.strict = false;
    }

    let show_progress = !cli.quiet && cli.format == OutputFormat::Text;
    let aggregator = FolderAggregator::from_settings(&settings).with_progress(show_progress);
    let presenter = ReportPresenter::new(cli.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Extremes {
            folder,
            year,
            chart,
            output,
        } => {
            info!("Computing extremes for {} in {}", year, folder.display());

            match aggregator.extremes_for_year(&folder, year)? {
                Some(summary) => {
                    presenter.present_extremes(&mut out, &summary)?;
                    if chart {
                        let path = output.unwrap_or_else(|| settings.chart_output.clone());
                        render_chart(&mut out, &summary, &path, &settings)?;
                    }
                }
                None => presenter.present_no_data(&mut out, NO_DATA_FOR_YEAR)?,
            }
        }

        Commands::Average { folder, period } => {
            info!("Computing averages for {} in {}", period, folder.display());

            match aggregator.monthly_averages(&folder, &period)? {
                Some(summary) => presenter.present_averages(&mut out, &summary)?,
                None => presenter.present_no_data(&mut out, NO_DATA_FOR_MONTH)?,
            }
        }

        Commands::Chart {
            folder,
            period,
            output,
        } => {
            info!("Charting extremes for {} in {}", period, folder.display());

            match aggregator.extremes_for_period(&folder, &period)? {
                Some(summary) => {
                    let path = output.unwrap_or_else(|| settings.chart_output.clone());
                    render_chart(&mut out, &summary, &path, &settings)?;
                }
                None => presenter.present_no_data(&mut out, NO_DATA_FOR_MONTH)?,
            }
        }
    }

    Ok(())
}

/// User-input check done before any data file is touched
fn ensure_folder(folder: &Path) -> Result<()> {
    if folder.is_dir() {
        Ok(())
    } else {
        Err(WeatherError::FolderNotFound(folder.to_path_buf()))
    }
}

fn render_chart<W: Write>(
    out: &mut W,
    summary: &ExtremesSummary,
    path: &Path,
    settings: &Settings,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    BarChart::temperature_extremes(summary.max_temperature.value, summary.min_temperature.value)
        .render(path, settings.chart_width, settings.chart_height)?;

    writeln!(out, "Chart saved to {}", path.display())?;
    Ok(())
}

/// Set up structured logging to stderr, or to `log_file` when given
fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weatherman={}", log_level)));

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .try_init(),
    };

    if let Err(e) = installed {
        debug!("Keeping the existing global subscriber: {}", e);
        return Ok(());
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
