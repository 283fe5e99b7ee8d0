//! Configuration loader - YAML system definitions + .env settings

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Error;
use crate::grammar::Grammar;
use crate::lsystem::LSystem;
use crate::presets;

/// Main configuration loaded from systems.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub systems: Vec<SystemDef>,
}

/// A user-defined L-system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemDef {
    pub name: String,
    pub axiom: String,
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
    pub angle_degrees: f64,
}

/// Runtime settings loaded from .env
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_dir: String,
    pub output_dir: String,
    pub max_symbols: usize,
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Get a system definition by name
    pub fn get_system(&self, name: &str) -> Option<&SystemDef> {
        self.systems.iter().find(|s| s.name == name)
    }

    /// Resolve a name to an L-system. Config entries shadow presets.
    pub fn resolve(&self, name: &str) -> std::result::Result<LSystem, Error> {
        if let Some(def) = self.get_system(name) {
            return def.to_lsystem();
        }
        presets::preset(name)
            .map(|p| p.lsystem())
            .ok_or_else(|| Error::UnknownSystem(name.to_string()))
    }
}

impl SystemDef {
    /// Build the L-system, rejecting rule keys that aren't a single char
    pub fn to_lsystem(&self) -> std::result::Result<LSystem, Error> {
        let mut grammar = Grammar::new();
        for (key, replacement) in &self.rules {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(Error::InvalidRuleKey {
                        system: self.name.clone(),
                        key: key.clone(),
                    })
                }
            };
            grammar = grammar.with_rule(symbol, replacement.as_str());
        }

        Ok(LSystem::new(
            self.axiom.as_str(),
            grammar,
            self.angle_degrees.to_radians(),
        ))
    }
}

impl Settings {
    /// Load settings from .env file
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Settings {
            log_dir: std::env::var("LSYSTEM_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            output_dir: std::env::var("LSYSTEM_OUTPUT_DIR").unwrap_or_else(|_| "out".to_string()),
            max_symbols: std::env::var("LSYSTEM_MAX_SYMBOLS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5_000_000),
        }
    }
}
