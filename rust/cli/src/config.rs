//! Layered configuration: built-in defaults, then an optional TOML file named
//! by `EIGHTS_CONFIG`, then `EIGHTS_*` environment variables. Command-line
//! flags override the result in each command.

use eights_ai::AI_NAMES;
use serde::{Deserialize, Serialize};
use std::fs;

pub const MAX_ROUNDS: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Rounds per game; `None` draws a length of 3 to 5 from the game seed
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    /// Opponent policy used by `play`
    pub ai: String,
    /// Offer the post-game multiplier gamble
    pub gamble: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub rounds: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub gamble: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            rounds: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            gamble: ValueSource::Default,
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
            rounds: None,
            seed: None,
            ai: "baseline".into(),
            gamble: false,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves the configuration reading variables through `lookup`.
pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup("EIGHTS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.rounds {
            cfg.rounds = Some(v);
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.gamble {
            cfg.gamble = v;
            sources.gamble = ValueSource::File;
        }
    }

    if let Some(seed) = lookup("EIGHTS_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(rounds) = lookup("EIGHTS_ROUNDS")
        && !rounds.is_empty()
    {
        cfg.rounds = Some(
            rounds
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?,
        );
        sources.rounds = ValueSource::Env;
    }
    if let Some(ai) = lookup("EIGHTS_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Some(gamble) = lookup("EIGHTS_GAMBLE")
        && !gamble.is_empty()
    {
        cfg.gamble =
            parse_bool(&gamble).ok_or_else(|| ConfigError::Invalid("Invalid gamble".into()))?;
        sources.gamble = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    gamble: Option<bool>,
}

pub fn validate_rounds(rounds: u32) -> Result<(), ConfigError> {
    if !(1..=MAX_ROUNDS).contains(&rounds) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: rounds must be between 1 and {}",
            MAX_ROUNDS
        )));
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(rounds) = cfg.rounds {
        validate_rounds(rounds)?;
    }
    if !AI_NAMES.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            AI_NAMES.join(", ")
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
