use crate::error::Result;
use crate::models::{AveragesSummary, ExtremesSummary, SkippedFile};
use clap::ValueEnum;
use serde_json::json;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a reading the way it is shown to users: whole numbers keep one decimal
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn write_skipped<W: Write>(out: &mut W, skipped: &[SkippedFile]) -> Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }

    writeln!(out, "Skipped {} files:", skipped.len())?;
    for file in skipped {
        writeln!(out, "  {}: {}", file.path.display(), file.reason)?;
    }
    Ok(())
}

pub struct ReportPresenter {
    format: OutputFormat,
}

impl ReportPresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn present_extremes<W: Write>(&self, out: &mut W, summary: &ExtremesSummary) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "Highest Temperature: {} C on {}",
                    format_value(summary.max_temperature.value),
                    summary.max_temperature.date
                )?;
                writeln!(
                    out,
                    "Lowest Temperature: {} C on {}",
                    format_value(summary.min_temperature.value),
                    summary.min_temperature.date
                )?;
                writeln!(
                    out,
                    "Highest Humidity: {} % on {}",
                    summary.max_humidity.value, summary.max_humidity.date
                )?;
                write_skipped(out, &summary.skipped)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, summary)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn present_averages<W: Write>(&self, out: &mut W, summary: &AveragesSummary) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "Average Highest Temperature: {} C",
                    format_value(summary.avg_max_temperature)
                )?;
                writeln!(
                    out,
                    "Average Lowest Temperature: {} C",
                    format_value(summary.avg_min_temperature)
                )?;
                writeln!(
                    out,
                    "Average Humidity: {} %",
                    format_value(summary.avg_max_humidity)
                )?;
                write_skipped(out, &summary.skipped)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, summary)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn present_no_data<W: Write>(&self, out: &mut W, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", message)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &json!({ "no_data": message }))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl Default for ReportPresenter {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}
