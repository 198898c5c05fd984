//! Plugin configuration: one immutable document, loaded at enable time.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for the grappling hook. Every key is optional in the document;
/// absent keys take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GrappleConfig {
    /// Log rejected pulls at debug level.
    #[serde(default)]
    pub debug: bool,
    /// Permission node required to use a hook. Blank = everyone.
    #[serde(default)]
    pub use_permission: String,
    /// Permission node required for `grappling give`. Blank = everyone.
    #[serde(default = "default_give_permission")]
    pub give_permission: String,
    /// Display name stamped on constructed hooks.
    #[serde(default = "default_name")]
    pub name: String,
    /// Lore lines stamped on constructed hooks.
    #[serde(default = "default_lore")]
    pub lore: Vec<String>,
    /// Pull strength per riptide level, in blocks per tick.
    #[serde(default = "default_force")]
    pub force: f32,
    /// Full-strength uses before a hook breaks.
    #[serde(default = "default_durability")]
    pub durability: i32,
    /// Fall damage becomes fall_distance divided by this.
    #[serde(default = "default_fall_damage_reduction")]
    pub fall_damage_reduction: f32,
}

fn default_give_permission() -> String {
    "grappling.give".into()
}

fn default_name() -> String {
    "Grappling Hook".into()
}

fn default_lore() -> Vec<String> {
    vec!["Cast at the ground, then hold on.".into()]
}

fn default_force() -> f32 {
    2.0
}

fn default_durability() -> i32 {
    50
}

fn default_fall_damage_reduction() -> f32 {
    3.0
}

impl Default for GrappleConfig {
    fn default() -> Self {
        Self {
            debug: false,
            use_permission: String::new(),
            give_permission: default_give_permission(),
            name: default_name(),
            lore: default_lore(),
            force: default_force(),
            durability: default_durability(),
            fall_damage_reduction: default_fall_damage_reduction(),
        }
    }
}

impl GrappleConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load the config file, writing the default document first if the
    /// file does not exist yet.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let config = Self::default();
            std::fs::write(path, serde_json::to_string_pretty(&config)?)?;
            info!("Wrote default grappling config to {}", path.display());
            return Ok(config);
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let json_str = r#"
            {
                "debug": true,
                "use-permission": "grappling.use",
                "give-permission": "grappling.admin",
                "name": "Hookshot",
                "lore": ["Line one", "Line two"],
                "force": 1.5,
                "durability": 10,
                "fall-damage-reduction": 4.0
            }
        "#;
        let config: GrappleConfig = serde_json::from_str(json_str).unwrap();
        assert!(config.debug);
        assert_eq!(config.use_permission, "grappling.use");
        assert_eq!(config.give_permission, "grappling.admin");
        assert_eq!(config.name, "Hookshot");
        assert_eq!(config.lore, vec!["Line one", "Line two"]);
        assert_eq!(config.force, 1.5);
        assert_eq!(config.durability, 10);
        assert_eq!(config.fall_damage_reduction, 4.0);
    }

    #[test]
    fn empty_document_takes_defaults() {
        let config: GrappleConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.debug);
        assert!(config.use_permission.is_empty()); // blank = everyone
        assert_eq!(config.give_permission, "grappling.give");
        assert_eq!(config.name, "Grappling Hook");
        assert_eq!(config.lore.len(), 1);
        assert_eq!(config.force, 2.0);
        assert_eq!(config.durability, 50);
        assert_eq!(config.fall_damage_reduction, 3.0);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: GrappleConfig =
            serde_json::from_str(r#"{ "force": 3.0, "durability": 5 }"#).unwrap();
        assert_eq!(config.force, 3.0);
        assert_eq!(config.durability, 5);
        assert_eq!(config.fall_damage_reduction, 3.0); // default
        assert_eq!(config.name, "Grappling Hook"); // default
    }

    #[test]
    fn keys_are_kebab_case() {
        let value = serde_json::to_value(GrappleConfig::default()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"use-permission"));
        assert!(keys.contains(&"give-permission"));
        assert!(keys.contains(&"fall-damage-reduction"));
        assert!(!keys.contains(&"use_permission"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = GrappleConfig::load("/definitely/not/here/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_or_init_writes_then_reads_back() {
        let path = std::env::temp_dir().join(format!(
            "grapple-config-test-{}/config.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let written = GrappleConfig::load_or_init(&path).unwrap();
        assert_eq!(written.durability, 50);
        assert!(path.exists());

        // Second call reads the file it just wrote.
        let reread = GrappleConfig::load_or_init(&path).unwrap();
        assert_eq!(reread.give_permission, written.give_permission);
        assert_eq!(reread.lore, written.lore);

        let _ = std::fs::remove_file(&path);
    }
}
