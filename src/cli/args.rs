use crate::utils::Period;
use crate::writers::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "weatherman")]
#[command(about = "Temperature and humidity reports from monthly weather files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Settings file [default: ./weatherman.toml if present]")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(
        long,
        global = true,
        help = "Skip files with missing columns or bad values instead of aborting"
    )]
    pub lenient: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highest temperature, lowest temperature and highest humidity for a year
    Extremes {
        #[arg(help = "Folder containing the weather data files")]
        folder: PathBuf,

        #[arg(short = 'e', long)]
        year: i32,

        #[arg(long, help = "Also draw the highest/lowest temperature chart")]
        chart: bool,

        #[arg(short, long, help = "Chart image path (.png or .svg)")]
        output: Option<PathBuf>,
    },

    /// Average highest/lowest temperature and humidity for a month
    Average {
        #[arg(help = "Folder containing the weather data files")]
        folder: PathBuf,

        #[arg(short = 'a', long, help = "Year and month in the format YYYY/MM")]
        period: Period,
    },

    /// Bar chart of the highest and lowest temperature for a month
    Chart {
        #[arg(help = "Folder containing the weather data files")]
        folder: PathBuf,

        #[arg(short = 'c', long, help = "Year and month in the format YYYY/MM")]
        period: Period,

        #[arg(short, long, help = "Chart image path (.png or .svg)")]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn folder(&self) -> &Path {
        match self {
            Commands::Extremes { folder, .. }
            | Commands::Average { folder, .. }
            | Commands::Chart { folder, .. } => folder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extremes() {
        let cli = Cli::parse_from(["weatherman", "extremes", "weatherfiles", "-e", "2011", "--chart"]);

        match cli.command {
            Commands::Extremes {
                folder,
                year,
                chart,
                output,
            } => {
                assert_eq!(folder, PathBuf::from("weatherfiles"));
                assert_eq!(year, 2011);
                assert!(chart);
                assert!(output.is_none());
            }
            _ => panic!("expected extremes command"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "weatherman",
            "average",
            "weatherfiles",
            "-a",
            "2011/03",
            "--format",
            "json",
            "--lenient",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.lenient);
        assert!(
            matches!(cli.command, Commands::Average { period, .. } if period.to_string() == "2011/03")
        );
        assert_eq!(cli.command.folder(), Path::new("weatherfiles"));
    }

    #[test]
    fn test_invalid_period_rejected_at_parse_time() {
        for period in ["2011/13", "2011-03"] {
            let err = Cli::try_parse_from(["weatherman", "chart", "weatherfiles", "-c", period])
                .err()
                .expect("period should be rejected");
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }
}
