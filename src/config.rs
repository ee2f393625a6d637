use serde::Deserialize;
use std::env;

use crate::roller::{Roller, SeededRoller, ThreadRngRoller};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RollerConfig {
    /// Fixed seed for reproducible rolls. Unset means an OS-seeded generator.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roller: RollerConfig,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = env::var("RUN_ENV").unwrap_or_else(|_| "local".into());

        let builder = ::config::Config::builder()
            .add_source(config::File::with_name("config/default.toml").required(false))
            .add_source(
                config::File::with_name(&format!("config/{}", env))
                    .required(false),
            )
            .add_source(config::File::with_name("config/local.toml").required(false))
            .add_source(
                config::Environment::with_prefix("DICE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Builds the roller this configuration asks for.
    pub fn roller(&self) -> Box<dyn Roller> {
        match self.roller.seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded roller");
                Box::new(SeededRoller::new(seed))
            }
            None => {
                tracing::info!("Using thread rng roller");
                Box::new(ThreadRngRoller::new())
            }
        }
    }
}
