use thiserror::Error;

pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;
pub const DEFAULT_WORKERS: usize = 1;
pub const DEFAULT_BALANCE_TOLERANCE: usize = 3;
pub const DEFAULT_BALANCE_ROUNDS: usize = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// Limits for spreading letters evenly over the two axes before each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceConfig {
    /// Largest accepted difference between horizontal and vertical letter totals.
    pub tolerance: usize,
    /// Rebalancing rounds tried before settling for the current split.
    pub max_rounds: usize,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_BALANCE_TOLERANCE,
            max_rounds: DEFAULT_BALANCE_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub seed: u64,
    pub max_attempts: usize,
    /// Independent workers the attempt budget is split across. The result depends on this
    /// value, not on how many threads actually run them.
    pub workers: usize,
    pub balance: BalanceConfig,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_attempts",
                reason: "at least one attempt is required".to_string(),
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "workers",
                reason: "at least one worker is required".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    seed: Option<u64>,
    max_attempts: Option<usize>,
    workers: Option<usize>,
    balance_tolerance: Option<usize>,
    balance_rounds: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
    pub fn balance_tolerance(mut self, tolerance: usize) -> Self {
        self.balance_tolerance = Some(tolerance);
        self
    }
    pub fn balance_rounds(mut self, rounds: usize) -> Self {
        self.balance_rounds = Some(rounds);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let config = SearchConfig {
            seed: self.seed.ok_or(ConfigError::MissingParameter("seed"))?,
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            workers: self.workers.unwrap_or(DEFAULT_WORKERS),
            balance: BalanceConfig {
                tolerance: self.balance_tolerance.unwrap_or(DEFAULT_BALANCE_TOLERANCE),
                max_rounds: self.balance_rounds.unwrap_or(DEFAULT_BALANCE_ROUNDS),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fills_in_defaults() {
        let config = SearchConfigBuilder::new().seed(11).build().unwrap();
        assert_eq!(config.seed, 11);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.workers, 1);
        assert_eq!(config.balance, BalanceConfig::default());
        assert_eq!(config.balance.tolerance, 3);
        assert_eq!(config.balance.max_rounds, 100);
    }

    #[test]
    fn build_without_seed_fails() {
        let result = SearchConfigBuilder::new().max_attempts(10).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("seed")));
    }

    #[test]
    fn zero_attempts_or_workers_are_rejected() {
        let result = SearchConfigBuilder::new().seed(1).max_attempts(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "max_attempts",
                ..
            })
        ));

        let result = SearchConfigBuilder::new().seed(1).workers(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "workers",
                ..
            })
        ));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = SearchConfigBuilder::new()
            .seed(3)
            .max_attempts(250)
            .workers(4)
            .balance_tolerance(1)
            .balance_rounds(7)
            .build()
            .unwrap();
        assert_eq!(config.max_attempts, 250);
        assert_eq!(config.workers, 4);
        assert_eq!(
            config.balance,
            BalanceConfig {
                tolerance: 1,
                max_rounds: 7
            }
        );
    }
}
