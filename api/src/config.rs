use std::env;

use anyhow::{bail, Context};

use crate::app::CompletionAttribution;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Who a completion record is credited to
    pub completion_attribution: CompletionAttribution,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            Err(_) => 9090,
        };

        let completion_attribution = match env::var("COMPLETION_ATTRIBUTION") {
            Ok(raw) => parse_attribution(&raw)?,
            Err(_) => CompletionAttribution::default(),
        };

        Ok(Self {
            database_url,
            port,
            completion_attribution,
        })
    }
}

fn parse_attribution(raw: &str) -> anyhow::Result<CompletionAttribution> {
    match raw.parse() {
        Ok(attribution) => Ok(attribution),
        Err(e) => bail!("COMPLETION_ATTRIBUTION: {}", e),
    }
}
