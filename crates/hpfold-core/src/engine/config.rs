use crate::core::scoring::ContactPolicy;
use thiserror::Error;

/// Longest sequence length accepted for exhaustive enumeration (2^24 searches).
pub const MAX_ENUMERATION_LENGTH: usize = 24;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub contact_policy: ContactPolicy,
    /// Discard partial walks whose optimistic bound cannot beat the best score so far.
    pub bound_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            contact_policy: ContactPolicy::NonConsecutive,
            bound_pruning: true,
        }
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    contact_policy: Option<ContactPolicy>,
    bound_pruning: Option<bool>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact_policy(mut self, policy: ContactPolicy) -> Self {
        self.contact_policy = Some(policy);
        self
    }
    pub fn bound_pruning(mut self, enabled: bool) -> Self {
        self.bound_pruning = Some(enabled);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        Ok(SearchConfig {
            contact_policy: self
                .contact_policy
                .ok_or(ConfigError::MissingParameter("contact_policy"))?,
            bound_pruning: self
                .bound_pruning
                .ok_or(ConfigError::MissingParameter("bound_pruning"))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerateConfig {
    pub search: SearchConfig,
    pub sequence_length: usize,
    /// How many of the best-scoring sequences to fold again and return with their walks.
    pub keep_best: usize,
}

#[derive(Default)]
pub struct EnumerateConfigBuilder {
    search: Option<SearchConfig>,
    sequence_length: Option<usize>,
    keep_best: Option<usize>,
}

impl EnumerateConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, config: SearchConfig) -> Self {
        self.search = Some(config);
        self
    }
    pub fn sequence_length(mut self, length: usize) -> Self {
        self.sequence_length = Some(length);
        self
    }
    pub fn keep_best(mut self, n: usize) -> Self {
        self.keep_best = Some(n);
        self
    }

    pub fn build(self) -> Result<EnumerateConfig, ConfigError> {
        let sequence_length = self
            .sequence_length
            .ok_or(ConfigError::MissingParameter("sequence_length"))?;
        if sequence_length > MAX_ENUMERATION_LENGTH {
            return Err(ConfigError::InvalidParameter {
                name: "sequence_length",
                reason: format!(
                    "{} exceeds the enumeration limit of {}",
                    sequence_length, MAX_ENUMERATION_LENGTH
                ),
            });
        }
        Ok(EnumerateConfig {
            search: self
                .search
                .ok_or(ConfigError::MissingParameter("search"))?,
            sequence_length,
            keep_best: self.keep_best.unwrap_or(0),
        })
    }
}
