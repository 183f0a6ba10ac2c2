use eyre::WrapErr;
use serde::{Deserialize, Serialize};

use crate::consts::{HISTORY_PATH, MASK_PLACEHOLDER};
use crate::generator::GeneratorOptions;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorOptions,
    pub mask_placeholder: String,
    pub history_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorOptions::default(),
            mask_placeholder: MASK_PLACEHOLDER.to_owned(),
            history_path: HISTORY_PATH.to_owned(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> crate::Result<Self> {
        let mut config: Self = toml::from_str(text)
            .wrap_err("failed to parse config")
            .map_err(crate::Error::Config)?;
        config.generator = config.generator.clamped();
        Ok(config)
    }
}
