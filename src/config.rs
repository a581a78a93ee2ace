use platform_dirs::AppDirs;
use serde::{Serialize, Deserialize};
use ron::ser::{to_string_pretty, PrettyConfig};
use ron::de::from_reader;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Digits shown after the point when the constant term is not an integer.
    #[serde(default = "defaults::fractional_places")]
    pub fractional_places: u32,
    /// The constant term is also printed in this base when it is not 10.
    #[serde(default = "defaults::output_base")]
    pub output_base: u32,
    #[serde(default = "defaults::show_breakdown")]
    pub show_breakdown: bool,
    #[serde(default = "defaults::check_consistency")]
    pub check_consistency: bool,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    default_!(fractional_places, u32);
    default_!(output_base, u32);
    default_!(show_breakdown, bool);
    default_!(check_consistency, bool);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fractional_places: 128,
            output_base: 10,
            show_breakdown: true,
            check_consistency: false,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        let dirs = AppDirs::new(Some("polyzero"), false)?;
        Some(dirs.config_dir.join("polyzero.cfg"))
    }

    /// Loads the config from the platform config dir, creating it if needed.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => {
                if let Some(dir) = path.parent() {
                    let _ = fs::create_dir_all(dir);
                }
                Self::load_from(&path)
            }
            None => {
                tracing::debug!("no platform config dir, using defaults");
                Self::default()
            }
        }
    }

    /// Any field missing from the file gets its default and the file is
    /// rewritten with it filled in. An unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(_) => {
                tracing::debug!("no config at {:?}, writing defaults", path);
                Self::default().write_to(path);
                return Self::default();
            }
        };
        match from_reader::<fs::File, Self>(file) {
            Ok(conf) => {
                // write back default values of any fields not present
                conf.write_to(path);
                conf
            }
            Err(e) => {
                tracing::warn!("ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    fn write_to(&self, path: &Path) {
        match to_string_pretty(self, PrettyConfig::default()) {
            Ok(text) => {
                if let Err(e) = fs::write(path, text) {
                    tracing::debug!("could not write config {:?}: {}", path, e);
                }
            }
            Err(e) => tracing::debug!("could not serialize config: {}", e),
        }
    }
}

#[test]
fn missing_fields_take_defaults() {
    let conf: Config = ron::from_str("(show_breakdown: false)").unwrap();
    assert_eq!(
        conf,
        Config { show_breakdown: false, ..Config::default() }
    );
}

#[test]
fn load_from_fills_in_file() {
    let path = std::env::temp_dir().join(format!("polyzero-test-{}.cfg", std::process::id()));
    fs::write(&path, "(output_base: 2)").unwrap();
    let conf = Config::load_from(&path);
    assert_eq!(conf.output_base, 2);
    assert_eq!(conf.fractional_places, 128);

    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains("fractional_places"));
    let _ = fs::remove_file(&path);
}
