use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_DATA_PATH: &str = "data/athkar.json";
pub const DEFAULT_PORT: u16 = 8080;
pub const MORNING_REMINDER_HOUR: u32 = 7;
pub const EVENING_REMINDER_HOUR: u32 = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    pub morning_hour: u32,
    pub evening_hour: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: DEFAULT_PORT,
            morning_hour: MORNING_REMINDER_HOUR,
            evening_hour: EVENING_REMINDER_HOUR,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            port: lookup("PORT")
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            morning_hour: hour(&lookup, "REMINDER_MORNING_HOUR", defaults.morning_hour),
            evening_hour: hour(&lookup, "REMINDER_EVENING_HOUR", defaults.evening_hour),
        }
    }
}

fn hour(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u32) -> u32 {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value < 24 => value,
        _ => {
            warn!("{name}={raw:?} is not an hour between 0 and 23, using {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("APP_DATA_PATH", "/tmp/a.json"),
            ("PORT", "9000"),
            ("REMINDER_MORNING_HOUR", "5"),
            ("REMINDER_EVENING_HOUR", " 21 "),
        ]);
        assert_eq!(config.data_path, PathBuf::from("/tmp/a.json"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.morning_hour, 5);
        assert_eq!(config.evening_hour, 21);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("PORT", "eighty"),
            ("REMINDER_MORNING_HOUR", "24"),
            ("REMINDER_EVENING_HOUR", "dusk"),
        ]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.morning_hour, MORNING_REMINDER_HOUR);
        assert_eq!(config.evening_hour, EVENING_REMINDER_HOUR);
    }
}
