//! Store configuration
//!
//! Configuration is plain serde data so a host can ship it as JSON next to the
//! app. Every field has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

/// Default capacity of the change event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration text could not be parsed
    #[error("Failed to parse store config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid store config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How new item ids are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum IdStrategy {
    /// Counter starting at 1 that never hands out the same id twice
    #[default]
    Monotonic,

    /// Current list length plus one
    ///
    /// Reproduces the legacy numbering. Ids collide once an item other than
    /// the last one has been deleted.
    CollectionSize,
}

/// Shopping list store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Id assignment rule
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Buffered change events per subscriber before the slowest one lags
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_event_capacity() -> usize {
    DEFAULT_EVENT_CAPACITY
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id assignment rule
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Set the event channel capacity
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Parse and validate a JSON configuration
    ///
    /// # Example
    ///
    /// ```
    /// use app_state::config::{IdStrategy, StoreConfig};
    ///
    /// let config = StoreConfig::from_json(r#"{ "idStrategy": "collectionSize" }"#).unwrap();
    /// assert_eq!(config.id_strategy, IdStrategy::CollectionSize);
    /// assert_eq!(config.event_capacity, 16);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        // broadcast::channel panics on zero capacity
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid(
                "eventCapacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
