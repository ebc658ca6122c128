use crate::error::{CliError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordListOptions {
    /// Words with fewer letters are dropped.
    pub min_length: usize,
    /// Keep at most this many words, chosen at random.
    pub count: Option<usize>,
}

pub fn load(path: &Path, options: &WordListOptions, seed: u64) -> Result<Vec<String>> {
    debug!("Reading word list from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    let words = prepare(&content, options, seed);
    info!(words = words.len(), "Word list loaded.");
    Ok(words)
}

/// Strips all whitespace from a line and upper-cases what is left.
pub fn normalize(line: &str) -> String {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Cleans, filters and deduplicates the lines of a word list, then shuffles the survivors
/// with `seed` and keeps the first `options.count` of them.
pub fn prepare(content: &str, options: &WordListOptions, seed: u64) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let word = normalize(line);
        if word.is_empty() {
            continue;
        }
        if !word.chars().all(char::is_alphabetic) {
            warn!(
                line = number + 1,
                "Skipping '{}': contains characters other than letters.", word
            );
            continue;
        }
        if word.chars().count() < options.min_length {
            warn!(
                line = number + 1,
                "Skipping '{}': shorter than {} letters.", word, options.min_length
            );
            continue;
        }
        if !seen.insert(word.clone()) {
            debug!(line = number + 1, "Skipping duplicate '{}'.", word);
            continue;
        }
        words.push(word);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    words.shuffle(&mut rng);
    if let Some(count) = options.count {
        words.truncate(count);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const OPTIONS: WordListOptions = WordListOptions {
        min_length: 3,
        count: None,
    };

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn normalize_strips_spaces_and_uppercases() {
        assert_eq!(normalize("  ice cream \t"), "ICECREAM");
        assert_eq!(normalize("straße"), "STRASSE");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn prepare_filters_short_invalid_and_duplicate_words() {
        let content = "cat\n\nox\nCat\nr2d2\n  dog \nbird\n";
        let words = prepare(content, &OPTIONS, 0);
        assert_eq!(sorted(words), vec!["BIRD", "CAT", "DOG"]);
    }

    #[test]
    fn prepare_is_deterministic_per_seed() {
        let content = "alpha\nbravo\ncharlie\ndelta\necho\nfoxtrot\ngolf\nhotel";
        assert_eq!(prepare(content, &OPTIONS, 4), prepare(content, &OPTIONS, 4));
    }

    #[test]
    fn count_keeps_a_random_subset() {
        let content = "alpha\nbravo\ncharlie\ndelta\necho";
        let options = WordListOptions {
            min_length: 3,
            count: Some(2),
        };
        let words = prepare(content, &options, 8);
        assert_eq!(words.len(), 2);
        let all = prepare(content, &OPTIONS, 8);
        assert!(words.iter().all(|w| all.contains(w)));
    }

    #[test]
    fn load_reads_from_disk_and_reports_missing_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "rust\ncrate\n").unwrap();
        assert_eq!(
            sorted(load(&path, &OPTIONS, 1).unwrap()),
            vec!["CRATE", "RUST"]
        );

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load(&missing, &OPTIONS, 1),
            Err(CliError::FileParsing { .. })
        ));
    }
}
