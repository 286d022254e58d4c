use crate::error::{Result, WeatherError};
use crate::utils::constants::{
    CHART_TITLE, CHART_X_LABEL, CHART_Y_LABEL, MAX_TEMPERATURE_LABEL, MIN_TEMPERATURE_LABEL,
};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: RGBColor,
}

/// Horizontal bar chart, one bar per category
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
}

fn chart_error<E: Display>(e: E) -> WeatherError {
    WeatherError::Chart(e.to_string())
}

impl BarChart {
    /// Max temperature in red, min temperature in blue
    pub fn temperature_extremes(max_temperature: f64, min_temperature: f64) -> Self {
        Self {
            title: CHART_TITLE,
            x_label: CHART_X_LABEL,
            y_label: CHART_Y_LABEL,
            bars: vec![
                Bar {
                    label: MAX_TEMPERATURE_LABEL,
                    value: max_temperature,
                    color: RED,
                },
                Bar {
                    label: MIN_TEMPERATURE_LABEL,
                    value: min_temperature,
                    color: BLUE,
                },
            ],
        }
    }

    /// Value axis covering zero and every bar, with some padding
    pub fn value_range(&self) -> Range<f64> {
        let low = self.bars.iter().map(|b| b.value).fold(0.0f64, f64::min);
        let high = self.bars.iter().map(|b| b.value).fold(0.0f64, f64::max);

        let span = high - low;
        let padding = if span > 0.0 { span * 0.1 } else { 1.0 };

        (low - padding)..(high + padding)
    }

    /// Render to an image file: SVG when the path ends in `.svg`, PNG otherwise
    pub fn render(&self, path: &Path, width: u32, height: u32) -> Result<()> {
        let size = (width, height);
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            self.draw(SVGBackend::new(path, size).into_drawing_area())?;
        } else {
            self.draw(BitMapBackend::new(path, size).into_drawing_area())?;
        }

        info!("Chart written to {}", path.display());
        Ok(())
    }

    fn draw<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(chart_error)?;

        let count = self.bars.len() as u32;
        let mut chart = ChartBuilder::on(&root)
            .caption(self.title, ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(160)
            .build_cartesian_2d(self.value_range(), (0u32..count).into_segmented())
            .map_err(chart_error)?;

        let label_of = |segment: &SegmentValue<u32>| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => self
                .bars
                .get(*i as usize)
                .map(|bar| bar.label.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        };

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(self.x_label)
            .y_desc(self.y_label)
            .y_label_formatter(&label_of)
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(self.bars.iter().zip(0u32..).map(|(bar, i)| {
                let mut rect = Rectangle::new(
                    [(0.0, SegmentValue::Exact(i)), (bar.value, SegmentValue::Exact(i + 1))],
                    bar.color.filled(),
                );
                rect.set_margin(12, 12, 0, 0);
                rect
            }))
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        Ok(())
    }
}
