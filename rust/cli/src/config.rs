//! Layered configuration: defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line
//! flags are applied last by the commands themselves.

use serde::{Deserialize, Serialize};
use std::fs;

use holdem_ai::AiParams;
use holdem_engine::rules::TableRules;

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";
pub const SEED_ENV: &str = "HOLDEM_SEED";
pub const OPPONENTS_ENV: &str = "HOLDEM_OPPONENTS";
pub const STARTING_BANK_ENV: &str = "HOLDEM_STARTING_BANK";
pub const DECKS_ENV: &str = "HOLDEM_DECKS";
pub const LOG_ENV: &str = "HOLDEM_LOG";

/// Most AI opponents a table seats.
pub const MAX_OPPONENTS: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_bank: u32,
    pub min_opp_bankroll: u32,
    pub max_opp_bankroll: u32,
    pub opponents: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub decks: usize,
    pub ai_raise: u32,
    pub ai_bluff: f64,
    pub seed: Option<u64>,
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
    pub starting_bank: ValueSource,
    pub min_opp_bankroll: ValueSource,
    pub max_opp_bankroll: ValueSource,
    pub opponents: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub decks: ValueSource,
    pub ai_raise: ValueSource,
    pub ai_bluff: ValueSource,
    pub seed: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_bank: ValueSource::Default,
            min_opp_bankroll: ValueSource::Default,
            max_opp_bankroll: ValueSource::Default,
            opponents: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            decks: ValueSource::Default,
            ai_raise: ValueSource::Default,
            ai_bluff: ValueSource::Default,
            seed: ValueSource::Default,
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
        let rules = TableRules::default();
        let ai = AiParams::default();
        Self {
            starting_bank: 100,
            min_opp_bankroll: 80,
            max_opp_bankroll: 120,
            opponents: 4,
            small_blind: rules.small_blind,
            big_blind: rules.big_blind,
            decks: rules.num_decks,
            ai_raise: ai.raise,
            ai_bluff: ai.bluff,
            seed: None,
            log_level: "warn".into(),
        }
    }
}

impl Config {
    pub fn table_rules(&self) -> TableRules {
        TableRules {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            num_decks: self.decks,
            ..TableRules::default()
        }
    }

    pub fn ai_params(&self) -> AiParams {
        AiParams {
            raise: self.ai_raise,
            bluff: self.ai_bluff,
        }
    }

    /// Applies command-line flags on top of the resolved values.
    pub fn with_overrides(
        mut self,
        opponents: Option<usize>,
        seed: Option<u64>,
        decks: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = opponents {
            self.opponents = v;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(v) = decks {
            self.decks = v;
        }
        validate(&self)?;
        Ok(self)
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

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        f.apply(&mut cfg, &mut sources);
    }

    if let Some(seed) = env_value(SEED_ENV) {
        cfg.seed = Some(parse_env(SEED_ENV, &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(n) = env_value(OPPONENTS_ENV) {
        cfg.opponents = parse_env(OPPONENTS_ENV, &n)?;
        sources.opponents = ValueSource::Env;
    }
    if let Some(bank) = env_value(STARTING_BANK_ENV) {
        cfg.starting_bank = parse_env(STARTING_BANK_ENV, &bank)?;
        sources.starting_bank = ValueSource::Env;
    }
    if let Some(decks) = env_value(DECKS_ENV) {
        cfg.decks = parse_env(DECKS_ENV, &decks)?;
        sources.decks = ValueSource::Env;
    }
    if let Some(level) = env_value(LOG_ENV) {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", name, raw)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    starting_bank: Option<u32>,
    min_opp_bankroll: Option<u32>,
    max_opp_bankroll: Option<u32>,
    opponents: Option<usize>,
    small_blind: Option<u32>,
    big_blind: Option<u32>,
    decks: Option<usize>,
    ai_raise: Option<u32>,
    ai_bluff: Option<f64>,
    seed: Option<u64>,
    log_level: Option<String>,
}

macro_rules! take_from_file {
    ($file:expr, $cfg:expr, $sources:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(v) = $file.$field {
                $cfg.$field = v;
                $sources.$field = ValueSource::File;
            }
        )+
    };
}

impl FileConfig {
    fn apply(self, cfg: &mut Config, sources: &mut ConfigSources) {
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
            sources.seed = ValueSource::File;
        }
        take_from_file!(
            self,
            cfg,
            sources,
            starting_bank,
            min_opp_bankroll,
            max_opp_bankroll,
            opponents,
            small_blind,
            big_blind,
            decks,
            ai_raise,
            ai_bluff,
            log_level,
        );
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let invalid = |msg: &str| Err(ConfigError::Invalid(format!("Invalid configuration: {}", msg)));
    if !(1..=MAX_OPPONENTS).contains(&cfg.opponents) {
        return invalid("opponents must be between 1 and 9");
    }
    if cfg.decks == 0 {
        return invalid("decks must be >=1");
    }
    if cfg.small_blind == 0 || cfg.big_blind < cfg.small_blind {
        return invalid("blinds must satisfy 0 < small_blind <= big_blind");
    }
    if cfg.starting_bank == 0 || cfg.min_opp_bankroll == 0 || cfg.max_opp_bankroll == 0 {
        return invalid("bankrolls must be >0");
    }
    if !(0.0..=1.0).contains(&cfg.ai_bluff) {
        return invalid("ai_bluff must be within 0..=1");
    }
    Ok(())
}
