// config
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use tracing::info;

use crate::db::DEFAULT_CATALOG_FILE;

pub static CONFIG_MANAGER: Lazy<ConfigManager> = Lazy::new(|| ConfigManager::new());

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";

#[derive(Debug, PartialEq)]
enum MODE {
    DEV,
    PROD,
}

impl MODE {
    fn from_env(raw: Option<String>) -> Self {
        match raw {
            Some(mode) if mode.to_lowercase() == "prod" => MODE::PROD,
            _ => MODE::DEV,
        }
    }
}

pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut values: HashMap<String, String> = HashMap::new();
        let mode = MODE::from_env(lookup("MODE"));
        match mode {
            MODE::DEV => {
                values.insert("HOST".to_string(), DEFAULT_HOST.to_string());
                values.insert("PORT".to_string(), DEFAULT_PORT.to_string());
                values.insert(
                    "CATALOG_PATH".to_string(),
                    lookup("CATALOG_PATH").unwrap_or(DEFAULT_CATALOG_FILE.to_string()),
                );
            }
            MODE::PROD => {
                values.insert(
                    "HOST".to_string(),
                    lookup("HOST").unwrap_or(DEFAULT_HOST.to_string()),
                );
                values.insert(
                    "PORT".to_string(),
                    lookup("PORT").unwrap_or(DEFAULT_PORT.to_string()),
                );
                values.insert(
                    "CATALOG_PATH".to_string(),
                    lookup("CATALOG_PATH").unwrap_or(DEFAULT_CATALOG_FILE.to_string()),
                );
            }
        }

        let configured: Vec<String> = values
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        info!("Config ({:?}): {:?}", mode, configured);

        ConfigManager { values }
    }

    pub fn get(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.get("HOST"), self.get("PORT"))
    }
}
