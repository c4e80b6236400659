use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{domain::session::DurationChoices, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub duration_choices: DurationChoices,
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: u64,
    #[serde(default = "default_quotes_enabled")]
    pub quotes_enabled: bool,
    #[serde(default)]
    pub persist_name: bool,
}

fn default_duration_secs() -> u64 {
    10
}

fn default_quotes_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            duration_choices: DurationChoices::default(),
            default_duration_secs: default_duration_secs(),
            quotes_enabled: default_quotes_enabled(),
            persist_name: false,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config =
            json5::from_str(CONFIG).map_err(|e| ConfigError::Message(e.to_string()))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }

        // Unlike a client that cannot run unconfigured, the timer is fully
        // usable with the built-in defaults.
        if !found_config {
            log::info!("No configuration file found, using built-in defaults");
            let cfg = Config {
                config: AppConfig {
                    _data_dir: data_dir,
                    _config_dir: config_dir,
                },
                ..default_config
            };
            return cfg.validated();
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validated()
    }

    /// Fold a CLI duration override into the configuration, extending the
    /// choice list when needed.
    pub fn with_duration_override(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs.filter(|s| *s > 0) {
            if !self.duration_choices.contains(&secs) {
                self.duration_choices.0.push(secs);
                self.duration_choices.0.sort_unstable();
            }
            self.default_duration_secs = secs;
        }
        self
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.duration_choices.is_empty() {
            return Err(ConfigError::Message(String::from(
                "duration_choices must not be empty",
            )));
        }
        if self.duration_choices.iter().any(|&secs| secs == 0) {
            return Err(ConfigError::Message(String::from(
                "duration_choices entries must be positive",
            )));
        }
        if !self.duration_choices.contains(&self.default_duration_secs) {
            let fallback = self.duration_choices.0[0];
            log::warn!(
                "default_duration_secs {} is not offered, falling back to {}",
                self.default_duration_secs,
                fallback
            );
            self.default_duration_secs = fallback;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();

        assert_eq!(cfg.duration_choices.0, vec![10, 20, 30]);
        assert_eq!(cfg.default_duration_secs, 10);
        assert!(cfg.quotes_enabled);
        assert!(!cfg.persist_name);
    }

    #[test]
    fn test_embedded_defaults_parse_and_match() {
        let cfg: Config = json5::from_str(CONFIG).expect("embedded config must parse");

        assert_eq!(cfg.duration_choices.0, Config::default().duration_choices.0);
        assert_eq!(
            cfg.default_duration_secs,
            Config::default().default_duration_secs
        );
        assert_eq!(cfg.quotes_enabled, Config::default().quotes_enabled);
        assert_eq!(cfg.persist_name, Config::default().persist_name);
    }

    #[test]
    fn test_duration_override_extends_choices() {
        let cfg = Config::default().with_duration_override(Some(45));

        assert_eq!(cfg.default_duration_secs, 45);
        assert_eq!(cfg.duration_choices.0, vec![10, 20, 30, 45]);
    }

    #[test]
    fn test_duration_override_existing_choice() {
        let cfg = Config::default().with_duration_override(Some(20));

        assert_eq!(cfg.default_duration_secs, 20);
        assert_eq!(cfg.duration_choices.0, vec![10, 20, 30]);
    }

    #[test]
    fn test_duration_override_rejects_zero() {
        let cfg = Config::default().with_duration_override(Some(0));
        assert_eq!(cfg.default_duration_secs, 10);
    }

    #[test]
    fn test_validation_rejects_empty_choices() {
        let cfg = Config {
            duration_choices: DurationChoices(vec![]),
            ..Default::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_duration() {
        let cfg = Config {
            duration_choices: DurationChoices(vec![10, 0]),
            ..Default::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn test_validation_coerces_unoffered_default() {
        let cfg = Config {
            duration_choices: DurationChoices(vec![20, 30]),
            default_duration_secs: 10,
            ..Default::default()
        };
        let cfg = cfg.validated().expect("valid config");
        assert_eq!(cfg.default_duration_secs, 20);
    }
}
