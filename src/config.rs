use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub assets: AssetsConfig,
    pub draw: DrawConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Path to the newline-delimited word list
    pub dictionary_path: String,
    /// Path to the comma-separated letter distribution.
    /// `None` means the built-in English table is used.
    pub distribution_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawConfig {
    /// How many letters the demo binary draws per `draw` invocation
    pub default_draw_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let assets = AssetsConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./resources/text/en/words.txt".to_string()),
            distribution_path: env::var("DISTRIBUTION_PATH").ok(),
        };

        let draw = DrawConfig {
            default_draw_count: env::var("DRAW_COUNT")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .context("DRAW_COUNT must be a number")?,
        };

        Ok(Config { assets, draw })
    }

    pub fn dictionary_path(&self) -> &str {
        &self.assets.dictionary_path
    }

    pub fn distribution_path(&self) -> Option<&str> {
        self.assets.distribution_path.as_deref()
    }
}
