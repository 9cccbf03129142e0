// Queue Configuration
// Layered: defaults < optional TOML file < IDQUEUE_* environment

use std::path::Path;
use std::sync::Arc;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::identified_queue::IdentifiedQueue;
use crate::error::Result;
use crate::port::{IdProvider, SequentialIdProvider, UuidProvider};

/// Environment variable prefix (e.g. `IDQUEUE_ID_STRATEGY`)
pub const ENV_PREFIX: &str = "IDQUEUE";

pub const DEFAULT_ID_PREFIX: &str = "q";

/// How queue ids are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// UUID v4 strings
    #[default]
    Uuid,
    /// `{id_prefix}-{n}`, counting from 1 per queue
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub id_strategy: IdStrategy,
    pub id_prefix: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Uuid,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl QueueConfig {
    /// Load from defaults, then `path` (if given, must exist), then the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("id_strategy", "uuid")?
            .set_default("id_prefix", DEFAULT_ID_PREFIX)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: QueueConfig = builder.add_source(env).build()?.try_deserialize()?;
        tracing::debug!(?config, "Queue configuration loaded");
        Ok(config)
    }

    pub fn id_provider(&self) -> Arc<dyn IdProvider> {
        match self.id_strategy {
            IdStrategy::Uuid => Arc::new(UuidProvider),
            IdStrategy::Sequential => Arc::new(SequentialIdProvider::new(self.id_prefix.clone())),
        }
    }
}

impl IdentifiedQueue {
    pub fn from_config(config: &QueueConfig) -> Self {
        Self::with_id_provider(config.id_provider())
    }
}
