use crate::error::{Result, StockzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.csv";
const DEFAULT_PRICE_DECIMALS: usize = 2;
const MAX_PRICE_DECIMALS: usize = 6;

pub const KEYS: [&str; 2] = ["data-file", "price-decimals"];

/// Configuration for stockz, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockzConfig {
    /// CSV file holding the records. Relative paths resolve against the stockz home.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Decimals shown for prices in listings (the file always keeps full precision)
    #[serde(default = "default_price_decimals")]
    pub price_decimals: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_price_decimals() -> usize {
    DEFAULT_PRICE_DECIMALS
}

impl Default for StockzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            price_decimals: default_price_decimals(),
        }
    }
}

impl StockzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// The data file, resolved against `home` when relative.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            home.join(path)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "price-decimals" => Some(self.price_decimals.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StockzError::Config("data-file must not be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "price-decimals" => {
                let decimals: usize = value
                    .trim()
                    .parse()
                    .ok()
                    .filter(|d| *d <= MAX_PRICE_DECIMALS)
                    .ok_or_else(|| {
                        StockzError::Config(format!(
                            "price-decimals must be a number from 0 to {}",
                            MAX_PRICE_DECIMALS
                        ))
                    })?;
                self.price_decimals = decimals;
            }
            other => {
                return Err(StockzError::Config(format!(
                    "unknown config key: {} (known keys: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
