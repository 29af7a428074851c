use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    currency::{CurrencyCode, LocaleConfig, LocaleCurrencyFormatter},
    domain::DEFAULT_PROVINCE,
    engine::WORKING_DAYS_PER_YEAR,
    errors::CostError,
};

const DEFAULT_DIR_NAME: &str = ".court_costs";
const HOME_ENV: &str = "COURT_COSTS_HOME";
const TMP_SUFFIX: &str = "tmp";

/// Estimator preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default = "EstimatorConfig::default_province_value")]
    pub default_province: String,
    #[serde(default = "EstimatorConfig::default_locale_value")]
    pub locale: String,
    #[serde(default = "EstimatorConfig::default_currency_value")]
    pub currency: String,
    #[serde(default = "EstimatorConfig::default_working_days_value")]
    pub working_days_per_year: f64,
    /// Province cost-table file used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_province: Self::default_province_value(),
            locale: Self::default_locale_value(),
            currency: Self::default_currency_value(),
            working_days_per_year: Self::default_working_days_value(),
            data_path: None,
        }
    }
}

impl EstimatorConfig {
    pub fn default_province_value() -> String {
        DEFAULT_PROVINCE.into()
    }

    pub fn default_locale_value() -> String {
        "en-CA".into()
    }

    pub fn default_currency_value() -> String {
        "CAD".into()
    }

    pub fn default_working_days_value() -> f64 {
        WORKING_DAYS_PER_YEAR
    }

    /// Builds the currency formatter described by the locale and currency settings.
    pub fn formatter(&self) -> LocaleCurrencyFormatter {
        LocaleCurrencyFormatter::new(
            CurrencyCode::new(&self.currency),
            LocaleConfig::for_tag(&self.locale),
        )
    }
}

/// Handles loading and saving [`EstimatorConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$COURT_COSTS_HOME`, falling back to `~/.court_costs`.
    pub fn new() -> Result<Self, CostError> {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, CostError> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            path: config_dir.join("config.json"),
        })
    }

    pub fn load(&self) -> Result<EstimatorConfig, CostError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(EstimatorConfig::default())
        }
    }

    pub fn save(&self, config: &EstimatorConfig) -> Result<(), CostError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CostError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
