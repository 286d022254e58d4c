use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_OUTPUT, DEFAULT_CHART_WIDTH, DEFAULT_CONFIG_FILE,
    DEFAULT_DATA_EXTENSION, ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

/// Runtime settings: defaults, then a TOML file, then `WEATHERMAN_*` variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    /// Suffix a file name must end with to be read as a data file
    #[validate(length(min = 1))]
    pub data_extension: String,

    /// Abort the whole scan on the first bad file
    pub strict: bool,

    pub chart_output: PathBuf,

    #[validate(range(min = 200, max = 8000))]
    pub chart_width: u32,

    #[validate(range(min = 200, max = 8000))]
    pub chart_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_extension: DEFAULT_DATA_EXTENSION.to_string(),
            strict: true,
            chart_output: PathBuf::from(DEFAULT_CHART_OUTPUT),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl Settings {
    /// Load settings. An explicit `config_file` must exist; otherwise
    /// `weatherman.toml` in the working directory is used when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();

        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("data_extension", defaults.data_extension)?
            .set_default("strict", defaults.strict)?
            .set_default(
                "chart_output",
                defaults.chart_output.to_string_lossy().into_owned(),
            )?
            .set_default("chart_width", i64::from(defaults.chart_width))?
            .set_default("chart_height", i64::from(defaults.chart_height))?
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        debug!("Loaded settings: {:?}", settings);

        Ok(settings)
    }
}
