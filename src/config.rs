//! Runner configuration read from the environment.
//!
//! | Variable                   | Meaning                                | Default          |
//! |----------------------------|----------------------------------------|------------------|
//! | `MICROTRIS_SEED`           | piece RNG seed                         | clock-derived    |
//! | `MICROTRIS_LEVEL`          | gravity level (clamped to the table)   | `0`              |
//! | `MICROTRIS_KEY_RELEASE_MS` | hold timeout without release events    | `150`            |
//! | `MICROTRIS_GHOST`          | `0`/`false` hides the drop shadow      | on               |

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub level: u32,
    pub key_release_ms: u64,
    pub ghost: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            level: 0,
            key_release_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            ghost: true,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), clock_seed())
    }

    /// Build from an arbitrary variable lookup. Unset or blank variables keep
    /// their defaults; malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, default_seed: u32) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self {
            seed: default_seed,
            ..Self::default()
        };

        if let Some(v) = var("MICROTRIS_SEED") {
            config.seed = v
                .parse()
                .with_context(|| format!("MICROTRIS_SEED must be a u32, got {v:?}"))?;
        }
        if let Some(v) = var("MICROTRIS_LEVEL") {
            config.level = v
                .parse()
                .with_context(|| format!("MICROTRIS_LEVEL must be a u32, got {v:?}"))?;
        }
        if let Some(v) = var("MICROTRIS_KEY_RELEASE_MS") {
            config.key_release_ms = v
                .parse()
                .with_context(|| format!("MICROTRIS_KEY_RELEASE_MS must be milliseconds, got {v:?}"))?;
        }
        if let Some(v) = var("MICROTRIS_GHOST") {
            config.ghost = !(v == "0" || v.eq_ignore_ascii_case("false"));
        }

        Ok(config)
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

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = RunConfig::from_lookup(lookup(&[]), 42).unwrap();
        assert_eq!(
            config,
            RunConfig {
                seed: 42,
                ..RunConfig::default()
            }
        );
    }

    #[test]
    fn reads_every_variable() {
        let config = RunConfig::from_lookup(
            lookup(&[
                ("MICROTRIS_SEED", "7"),
                ("MICROTRIS_LEVEL", " 3 "),
                ("MICROTRIS_KEY_RELEASE_MS", "90"),
                ("MICROTRIS_GHOST", "false"),
            ]),
            42,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.level, 3);
        assert_eq!(config.key_release_ms, 90);
        assert!(!config.ghost);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = RunConfig::from_lookup(lookup(&[("MICROTRIS_LEVEL", "  ")]), 1).unwrap();
        assert_eq!(config.level, 0);
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = RunConfig::from_lookup(lookup(&[("MICROTRIS_LEVEL", "fast")]), 1).unwrap_err();
        assert!(err.to_string().contains("MICROTRIS_LEVEL"));
    }
}
