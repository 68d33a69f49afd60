use crate::cmds::Cmd;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "GLANCE_CONFIG_FILE";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    UnknownKey(String),
    ReservedKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read configuration: {}", err),
            ConfigError::Parse(err) => write!(f, "could not parse configuration: {}", err),
            ConfigError::UnknownKey(name) => write!(f, "unknown key name '{}'", name),
            ConfigError::ReservedKey(name) => write!(
                f,
                "key '{}' cannot be bound: digits are reserved for day-number entry",
                name
            ),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::UnknownKey(_) | ConfigError::ReservedKey(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// On-disk representation; keys are given as strings and resolved into a
/// [`KeyMap`] on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawConfig {
    tick_rate_ms: u64,
    today_char: Option<char>,
    select_char: Option<char>,
    keys: HashMap<String, Cmd>,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            tick_rate_ms: 500,
            today_char: Some('*'),
            select_char: None,
            keys: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub tick_rate: Duration,
    pub today_char: Option<char>,
    pub select_char: Option<char>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            key_map: default_key_map(),
            tick_rate: Duration::from_millis(500),
            today_char: Some('*'),
            select_char: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let raw: RawConfig = toml::from_str(&fs::read_to_string(path)?)?;
        Config::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Config, ConfigError> {
        let mut key_map = default_key_map();
        for (name, cmd) in &raw.keys {
            key_map.insert(parse_key(name)?, *cmd);
        }

        Ok(Config {
            key_map,
            tick_rate: Duration::from_millis(raw.tick_rate_ms),
            today_char: raw.today_char,
            select_char: raw.select_char,
        })
    }
}

fn default_key_map() -> KeyMap {
    let mut key_map = HashMap::new();

    key_map.insert(Key::Char('h'), Cmd::PrevMonth);
    key_map.insert(Key::Char('l'), Cmd::NextMonth);
    key_map.insert(Key::PageUp, Cmd::PrevMonth);
    key_map.insert(Key::PageDown, Cmd::NextMonth);
    key_map.insert(Key::Char('t'), Cmd::Today);
    key_map.insert(Key::Left, Cmd::SelectPrevDay);
    key_map.insert(Key::Right, Cmd::SelectNextDay);
    key_map.insert(Key::Up, Cmd::SelectPrevWeek);
    key_map.insert(Key::Down, Cmd::SelectNextWeek);
    key_map.insert(Key::Char('q'), Cmd::Exit);

    key_map
}

fn parse_key(name: &str) -> Result<Key, ConfigError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // The day-entry prompt consumes digits before keymap dispatch, so a
        // digit binding could never fire.
        if c.is_ascii_digit() {
            return Err(ConfigError::ReservedKey(name.to_owned()));
        }
        return Ok(Key::Char(c));
    }

    match name {
        "left" => Ok(Key::Left),
        "right" => Ok(Key::Right),
        "up" => Ok(Key::Up),
        "down" => Ok(Key::Down),
        "enter" => Ok(Key::Char('\n')),
        "backspace" => Ok(Key::Backspace),
        "home" => Ok(Key::Home),
        "end" => Ok(Key::End),
        "pageup" => Ok(Key::PageUp),
        "pagedown" => Ok(Key::PageDown),
        _ => Err(ConfigError::UnknownKey(name.to_owned())),
    }
}

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("glance").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".glance.toml"));
    }

    locations
}

pub fn load_suitable_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            info!("loading configuration from {}", location.display());
            return Config::load(&location);
        }
    }

    info!("no configuration file found, using defaults");
    Ok(Config::default())
}
