use crisscross::engine::config::{
    DEFAULT_BALANCE_ROUNDS, DEFAULT_BALANCE_TOLERANCE, DEFAULT_MAX_ATTEMPTS,
};

pub struct DefaultsConfig {
    pub max_attempts: usize,
    pub workers: usize,
    pub balance_tolerance: usize,
    pub balance_rounds: usize,
    pub min_length: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            workers: 8,
            balance_tolerance: DEFAULT_BALANCE_TOLERANCE,
            balance_rounds: DEFAULT_BALANCE_ROUNDS,
            min_length: 3,
        }
    }
}
