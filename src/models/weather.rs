use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of observations, typed from a filtered row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub max_temperature_c: f64,
    pub min_temperature_c: f64,
    pub max_humidity: i32,
}

impl WeatherRecord {
    pub fn new(
        date: NaiveDate,
        max_temperature_c: f64,
        min_temperature_c: f64,
        max_humidity: i32,
    ) -> Self {
        Self {
            date,
            max_temperature_c,
            min_temperature_c,
            max_humidity,
        }
    }
}
