use crate::dashboard::DEFAULT_DASHBOARD_HOST;
use crate::errors::{AppError, AppResult};
use crate::models::{AdvancedParams, CostType, Granularity, GroupBy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_dashboard_host")]
    pub dashboard_host: String,
    #[serde(default = "default_cost_type")]
    pub default_cost_type: CostType,
    #[serde(default = "default_granularity")]
    pub default_granularity: Granularity,
    #[serde(default)]
    pub default_group_by: Option<GroupBy>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_dashboard_host() -> String {
    DEFAULT_DASHBOARD_HOST.to_string()
}
fn default_cost_type() -> CostType {
    CostType::RealCost
}
fn default_granularity() -> Granularity {
    Granularity::Daily
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            dashboard_host: default_dashboard_host(),
            default_cost_type: default_cost_type(),
            default_granularity: default_granularity(),
            default_group_by: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("czfilter")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".czfilter")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("czfilter.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("czfilter.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Cost parameters used when neither the command line nor a saved filter sets them.
    pub fn default_params(&self) -> AdvancedParams {
        AdvancedParams {
            cost_type: Some(self.default_cost_type),
            granularity: Some(self.default_granularity),
            group_by: self.default_group_by,
            filters: None,
        }
    }

    /// Initialize configuration directory and file.
    /// Returns the configured database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.dashboard_host, DEFAULT_DASHBOARD_HOST);
        assert_eq!(cfg.default_cost_type, CostType::RealCost);
        assert_eq!(cfg.default_granularity, Granularity::Daily);
        assert_eq!(cfg.default_group_by, None);
    }

    #[test]
    fn reads_wire_names() {
        let yaml = "default_cost_type: amortized_cost\ndefault_granularity: weekly\ndefault_group_by: region\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        let params = cfg.default_params();
        assert_eq!(params.cost_type, Some(CostType::AmortizedCost));
        assert_eq!(params.granularity, Some(Granularity::Weekly));
        assert_eq!(params.group_by, Some(GroupBy::Region));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("czfilter_missing_config_file.conf");
        let _ = fs::remove_file(&path);
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.dashboard_host, DEFAULT_DASHBOARD_HOST);
    }
}
