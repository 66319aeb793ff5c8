//! Environment configuration
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `PENTRIS_GHOST` | `on`/`off`, `1`/`0`, `true`/`false` | on |
//! | `PENTRIS_SEED` | u32 | wall clock |
//! | `PENTRIS_LOG_PATH` | file path | no journal |
//!
//! Unparseable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::RoundConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub ghost_enabled: bool,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ghost_enabled: true,
            seed: 1,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key -> value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ghost_enabled = lookup("PENTRIS_GHOST")
            .and_then(|s| parse_toggle(&s))
            .unwrap_or(true);

        let seed = lookup("PENTRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("PENTRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            ghost_enabled,
            seed,
            log_path,
        }
    }

    pub fn round_config(&self) -> RoundConfig {
        RoundConfig {
            ghost_enabled: self.ghost_enabled,
            seed: self.seed,
        }
    }
}

fn parse_toggle(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "on" | "1" | "true" | "yes" => Some(true),
        "off" | "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert!(config.ghost_enabled);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_reads_values() {
        let config = GameConfig::from_lookup(lookup(&[
            ("PENTRIS_GHOST", "Off"),
            ("PENTRIS_SEED", " 1234 "),
            ("PENTRIS_LOG_PATH", "/tmp/pentris.jsonl"),
        ]));
        assert!(!config.ghost_enabled);
        assert_eq!(config.seed, 1234);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/pentris.jsonl"));
        assert_eq!(
            config.round_config(),
            RoundConfig {
                ghost_enabled: false,
                seed: 1234
            }
        );
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("PENTRIS_GHOST", "maybe"),
            ("PENTRIS_LOG_PATH", "   "),
        ]));
        assert!(config.ghost_enabled);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
