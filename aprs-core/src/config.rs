//! Configuration file management for aprs-decode.
//!
//! Reads/writes `~/.aprs-decode/config.yaml` with the TNC endpoint and
//! operator station identity. Missing file or unreadable content falls
//! back to defaults; the CLI can override any of it.

use std::path::PathBuf;

/// Full configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub tnc: TncConfig,
    pub station: StationConfig,
}

/// KISS TNC network endpoint.
#[derive(Debug, Clone)]
pub struct TncConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StationConfig {
    /// Operator callsign, for log identification only.
    pub callsign: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tnc: TncConfig {
                host: "localhost".into(),
                port: 8001,
            },
            station: StationConfig { callsign: None },
        }
    }
}

/// Get the config directory path (`~/.aprs-decode/`).
pub fn config_dir() -> PathBuf {
    dirs_home().join(".aprs-decode")
}

/// Get the config file path.
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Load config from `~/.aprs-decode/config.yaml`.
///
/// Returns default config if the file doesn't exist.
pub fn load_config() -> Config {
    load_config_from(&config_file())
}

/// Load config from an explicit path, defaulting on any failure.
pub fn load_config_from(path: &std::path::Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(_) => return Config::default(),
    };

    parse_config(&text).unwrap_or_default()
}

/// Save config to `~/.aprs-decode/config.yaml`.
pub fn save_config(config: &Config) -> std::io::Result<PathBuf> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;

    let path = config_file();
    std::fs::write(&path, serialize_config(config))?;

    Ok(path)
}

/// Parse simple YAML-like config text.
fn parse_config(text: &str) -> Option<Config> {
    let mut config = Config::default();
    let mut current_section: Option<String> = None;

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let is_indented = line.starts_with("  ") || line.starts_with('\t');

        if let Some((key, val)) = stripped.split_once(':') {
            let key = key.trim();
            let val = val.trim();

            if !is_indented {
                current_section = val.is_empty().then(|| key.to_string());
            } else if let Some(ref section) = current_section {
                match section.as_str() {
                    "tnc" => match key {
                        "host" => {
                            if let Some(v) = parse_string_value(val) {
                                config.tnc.host = v;
                            }
                        }
                        "port" => {
                            if let Ok(v) = val.parse::<u16>() {
                                config.tnc.port = v;
                            }
                        }
                        _ => {}
                    },
                    "station" => {
                        if key == "callsign" {
                            config.station.callsign = parse_string_value(val);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    Some(config)
}

fn parse_string_value(val: &str) -> Option<String> {
    if val == "null" || val == "~" || val.is_empty() {
        return None;
    }
    // Strip quotes
    if (val.starts_with('"') && val.ends_with('"'))
        || (val.starts_with('\'') && val.ends_with('\''))
    {
        return Some(val[1..val.len() - 1].to_string());
    }
    Some(val.to_string())
}

/// Serialize config to YAML-like text.
fn serialize_config(config: &Config) -> String {
    let mut lines = vec!["# aprs-decode configuration".to_string(), String::new()];

    lines.push("tnc:".into());
    lines.push(format!("  host: \"{}\"", config.tnc.host));
    lines.push(format!("  port: {}", config.tnc.port));
    lines.push(String::new());

    lines.push("station:".into());
    match &config.station.callsign {
        Some(v) => lines.push(format!("  callsign: \"{v}\"")),
        None => lines.push("  callsign: null".into()),
    }

    lines.join("\n") + "\n"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
