/// Header names of the required columns
pub const MAX_TEMPERATURE_COLUMN: &str = "Max TemperatureC";
pub const MIN_TEMPERATURE_COLUMN: &str = "Min TemperatureC";
pub const MAX_HUMIDITY_COLUMN: &str = "Max Humidity";

/// Position of the date column in every data file
pub const DATE_COLUMN_INDEX: usize = 0;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// File selection
pub const DEFAULT_DATA_EXTENSION: &str = ".txt";

/// Month codes and the abbreviations used in data file names
pub const MONTH_ABBREVIATIONS: [(&str, &str); 12] = [
    ("01", "Jan"),
    ("02", "Feb"),
    ("03", "Mar"),
    ("04", "Apr"),
    ("05", "May"),
    ("06", "Jun"),
    ("07", "Jul"),
    ("08", "Aug"),
    ("09", "Sep"),
    ("10", "Oct"),
    ("11", "Nov"),
    ("12", "Dec"),
];

/// Chart defaults
pub const DEFAULT_CHART_OUTPUT: &str = "weatherman-chart.png";
pub const DEFAULT_CHART_WIDTH: u32 = 1024;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;
pub const CHART_TITLE: &str = "Highest and Lowest Temperatures";
pub const CHART_X_LABEL: &str = "Temperature (°C)";
pub const CHART_Y_LABEL: &str = "Temperature Type";
pub const MAX_TEMPERATURE_LABEL: &str = "Max Temperature";
pub const MIN_TEMPERATURE_LABEL: &str = "Min Temperature";

/// Configuration
pub const DEFAULT_CONFIG_FILE: &str = "weatherman.toml";
pub const ENV_PREFIX: &str = "WEATHERMAN";
