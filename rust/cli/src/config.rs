use serde::{Deserialize, Serialize};
use std::fs;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub ascii: bool,
    pub fail_on_mismatch: bool,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub ascii: ValueSource,
    pub fail_on_mismatch: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            ascii: ValueSource::Default,
            fail_on_mismatch: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ascii: false,
            fail_on_mismatch: true,
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `FAIRVERIFY_CONFIG`, then `FAIRVERIFY_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FAIRVERIFY_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.ascii {
            cfg.ascii = v;
            sources.ascii = ValueSource::File;
        }
        if let Some(v) = f.fail_on_mismatch {
            cfg.fail_on_mismatch = v;
            sources.fail_on_mismatch = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(ascii) = std::env::var("FAIRVERIFY_ASCII")
        && !ascii.is_empty()
    {
        cfg.ascii =
            parse_bool(&ascii).ok_or_else(|| ConfigError::Invalid("Invalid ascii".into()))?;
        sources.ascii = ValueSource::Env;
    }
    if let Ok(fail) = std::env::var("FAIRVERIFY_FAIL_ON_MISMATCH")
        && !fail.is_empty()
    {
        cfg.fail_on_mismatch = parse_bool(&fail)
            .ok_or_else(|| ConfigError::Invalid("Invalid fail_on_mismatch".into()))?;
        sources.fail_on_mismatch = ValueSource::Env;
    }
    if let Ok(level) = std::env::var("FAIRVERIFY_LOG_LEVEL")
        && !level.is_empty()
    {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&mut cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    ascii: Option<bool>,
    #[serde(default)]
    fail_on_mismatch: Option<bool>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &mut Config) -> Result<(), ConfigError> {
    cfg.log_level = cfg.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
