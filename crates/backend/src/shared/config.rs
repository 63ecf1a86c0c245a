use chrono::NaiveDate;
use contracts::dashboards::d402_sales_overview::DateRange;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable pointing to an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SALES_DASHBOARD_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub csv_path: String,
    /// chrono formats tried in order for the `Date` column
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

/// Initial date window of the dashboard.
#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub default_date_from: NaiveDate,
    pub default_date_to: NaiveDate,
}

impl ReportConfig {
    pub fn default_window(&self) -> DateRange {
        DateRange::new(self.default_date_from, self.default_date_to)
    }
}

pub fn default_date_formats() -> Vec<String> {
    vec![
        "%Y-%m-%d".to_string(),
        "%m/%d/%Y".to_string(),
        "%Y-%m-%d %H:%M:%S".to_string(),
    ]
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[data]
csv_path = "salesData.csv"

[report]
default_date_from = "2023-01-02"
default_date_to = "2023-01-06"
"#;

/// Load configuration
///
/// Search order:
/// 1. File named by `SALES_DASHBOARD_CONFIG`
/// 2. config.toml next to the executable
/// 3. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        tracing::info!("Loading config from {}: {}", CONFIG_ENV_VAR, path);
        return load_config_from(Path::new(&path));
    }

    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            return load_config_from(&config_path);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.data.date_formats.is_empty() {
        anyhow::bail!("data.date_formats must not be empty");
    }
    Ok(config)
}

/// Get the sales CSV path from configuration
///
/// Relative paths resolve against the executable directory when the file
/// exists there, otherwise against the working directory.
pub fn get_data_path(config: &Config) -> PathBuf {
    let csv_path = Path::new(&config.data.csv_path);

    if csv_path.is_absolute() {
        return csv_path.to_path_buf();
    }

    if let Some(exe_dir) = exe_dir() {
        let resolved = exe_dir.join(csv_path);
        if resolved.exists() {
            return resolved;
        }
    }

    csv_path.to_path_buf()
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
