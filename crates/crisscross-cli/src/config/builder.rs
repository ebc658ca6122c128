use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use crate::utils::wordlist::WordListOptions;
use crisscross::engine::config::SearchConfigBuilder;
use rand::Rng;
use std::time::Duration;
use tracing::info;

pub fn build_config(args: &BuildArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let search_file = file_config.search.take().unwrap_or_default();
    let balance_file = file_config.balance.take().unwrap_or_default();
    let words_file = file_config.words.take().unwrap_or_default();

    let seed = match args.seed.or(search_file.seed) {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().r#gen();
            info!(
                seed,
                "No seed given; drew a random one. Pass --seed {} to reproduce.", seed
            );
            seed
        }
    };
    let max_attempts = args
        .attempts
        .or(search_file.max_attempts)
        .unwrap_or(defaults.max_attempts);
    let workers = args
        .workers
        .or(search_file.workers)
        .unwrap_or(defaults.workers);
    let time_limit = args
        .time_limit
        .or(search_file.time_limit_secs)
        .map(Duration::from_secs);

    let search = SearchConfigBuilder::new()
        .seed(seed)
        .max_attempts(max_attempts)
        .workers(workers)
        .balance_tolerance(balance_file.tolerance.unwrap_or(defaults.balance_tolerance))
        .balance_rounds(balance_file.max_rounds.unwrap_or(defaults.balance_rounds))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let words = WordListOptions {
        min_length: args
            .min_length
            .or(words_file.min_length)
            .unwrap_or(defaults.min_length),
        count: args.count.or(words_file.count),
    };

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        words,
        search,
        time_limit,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Argument(e.to_string()))?;
        let integer = |expected: &'static str| {
            parser::parse_value::<usize>(key, value, expected)
                .map_err(|e| CliError::Argument(e.to_string()))
        };

        match key {
            "search.seed" => {
                config.search.get_or_insert_with(Default::default).seed = Some(
                    parser::parse_value(key, value, "an unsigned 64-bit integer")
                        .map_err(|e| CliError::Argument(e.to_string()))?,
                );
            }
            "search.max-attempts" => {
                config.search.get_or_insert_with(Default::default).max_attempts =
                    Some(integer("an integer")?);
            }
            "search.workers" => {
                config.search.get_or_insert_with(Default::default).workers =
                    Some(integer("an integer")?);
            }
            "search.time-limit-secs" => {
                config.search.get_or_insert_with(Default::default).time_limit_secs = Some(
                    parser::parse_value(key, value, "a number of seconds")
                        .map_err(|e| CliError::Argument(e.to_string()))?,
                );
            }
            "balance.tolerance" => {
                config.balance.get_or_insert_with(Default::default).tolerance =
                    Some(integer("an integer")?);
            }
            "balance.max-rounds" => {
                config.balance.get_or_insert_with(Default::default).max_rounds =
                    Some(integer("an integer")?);
            }
            "words.min-length" => {
                config.words.get_or_insert_with(Default::default).min_length =
                    Some(integer("an integer")?);
            }
            "words.count" => {
                config.words.get_or_insert_with(Default::default).count =
                    Some(integer("an integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
