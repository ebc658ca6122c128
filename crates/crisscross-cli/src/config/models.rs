use crate::utils::wordlist::WordListOptions;
use crisscross::engine::config::SearchConfig;
use std::path::PathBuf;
use std::time::Duration;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub words: WordListOptions,
    pub search: SearchConfig,
    pub time_limit: Option<Duration>,
}
