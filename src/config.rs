use eyre::{Result, WrapErr, ensure};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::insights::DEFAULT_INSIGHTS;

/// Presentation settings. Every field is optional in the file; a missing
/// file means the built-in defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub animation: bool,
    pub insights: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            animation: true,
            insights: DEFAULT_INSIGHTS.map(String::from).to_vec(),
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let text = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Config::parse(&text)
    }

    fn parse(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text).wrap_err("cannot parse configuration file")?;
        ensure!(
            !config.display.insights.is_empty(),
            "configuration must provide at least one insight"
        );
        Ok(config)
    }
}

#[test]
fn test_defaults() {
    let config = Config::parse("").unwrap();
    assert!(config.display.animation);
    assert_eq!(config.display.insights.len(), DEFAULT_INSIGHTS.len());
}

#[test]
fn test_overrides() {
    let config = Config::parse(
        r#"
[display]
animation = false
insights = ["Check the roadmap."]
"#,
    )
    .unwrap();
    assert!(!config.display.animation);
    assert_eq!(config.display.insights, ["Check the roadmap."]);
}

#[test]
fn test_empty_insight_pool_is_rejected() {
    assert!(Config::parse("[display]\ninsights = []\n").is_err());
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(Config::parse("[solver]\nalgorithm = \"hungarian\"\n").is_err());
}
