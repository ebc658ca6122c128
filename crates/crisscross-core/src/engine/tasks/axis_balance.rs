use crate::core::models::ids::WordId;
use crate::core::models::word::{Axis, WordMap};
use crate::engine::config::BalanceConfig;
use rand::Rng;
use tracing::trace;

/// Letter totals per axis after balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisTotals {
    pub horizontal: usize,
    pub vertical: usize,
}

impl AxisTotals {
    pub fn imbalance(&self) -> usize {
        self.horizontal.abs_diff(self.vertical)
    }
}

/// Assigns every word a random axis, then moves words from the heavier axis to the lighter
/// one until the letter totals differ by at most `config.tolerance` or `config.max_rounds`
/// rounds have run.
///
/// With two or more words, neither axis is left without a word.
pub fn balance<R: Rng + ?Sized>(
    words: &mut WordMap,
    config: &BalanceConfig,
    rng: &mut R,
) -> AxisTotals {
    let mut horizontal: Vec<WordId> = Vec::new();
    let mut vertical: Vec<WordId> = Vec::new();
    let mut totals = AxisTotals::default();

    for (id, word) in words.iter_mut() {
        if rng.gen_bool(0.5) {
            word.set_axis(Axis::Horizontal);
            totals.horizontal += word.len();
            horizontal.push(id);
        } else {
            word.set_axis(Axis::Vertical);
            totals.vertical += word.len();
            vertical.push(id);
        }
    }

    let mut rounds = 0;
    while totals.imbalance() > config.tolerance && rounds < config.max_rounds {
        rounds += 1;
        if totals.horizontal > totals.vertical {
            while totals.horizontal > totals.vertical {
                move_random(words, &mut horizontal, &mut vertical, &mut totals, rng);
            }
        } else {
            while totals.vertical > totals.horizontal {
                move_random(words, &mut vertical, &mut horizontal, &mut totals, rng);
            }
        }
    }

    if words.len() > 1 {
        if horizontal.is_empty() {
            move_random(words, &mut vertical, &mut horizontal, &mut totals, rng);
        } else if vertical.is_empty() {
            move_random(words, &mut horizontal, &mut vertical, &mut totals, rng);
        }
    }

    trace!(
        horizontal = totals.horizontal,
        vertical = totals.vertical,
        rounds,
        "Axes balanced."
    );
    totals
}

fn move_random<R: Rng + ?Sized>(
    words: &mut WordMap,
    from: &mut Vec<WordId>,
    to: &mut Vec<WordId>,
    totals: &mut AxisTotals,
    rng: &mut R,
) {
    if from.is_empty() {
        return;
    }
    let id = from.remove(rng.gen_range(0..from.len()));
    if let Some(word) = words.get_mut(id) {
        word.flip_axis();
        let len = word.len();
        match word.axis() {
            Axis::Horizontal => {
                totals.vertical -= len;
                totals.horizontal += len;
            }
            Axis::Vertical => {
                totals.horizontal -= len;
                totals.vertical += len;
            }
        }
    }
    to.push(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::word::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> WordMap {
        let mut map = WordMap::with_key();
        for text in texts {
            map.insert(Word::new(text));
        }
        map
    }

    fn recount(words: &WordMap) -> AxisTotals {
        let mut totals = AxisTotals::default();
        for word in words.values() {
            match word.axis() {
                Axis::Horizontal => totals.horizontal += word.len(),
                Axis::Vertical => totals.vertical += word.len(),
            }
        }
        totals
    }

    #[test]
    fn totals_match_assigned_axes() {
        let mut map = words(&["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT"]);
        let mut rng = StdRng::seed_from_u64(5);
        let totals = balance(&mut map, &BalanceConfig::default(), &mut rng);
        assert_eq!(totals, recount(&map));
    }

    #[test]
    fn equal_length_words_end_within_tolerance() {
        let config = BalanceConfig::default();
        for seed in 0..20 {
            let mut map = words(&["ONE", "TWO", "SIX", "TEN", "ASH", "OAK", "ELM", "FIG"]);
            let mut rng = StdRng::seed_from_u64(seed);
            let totals = balance(&mut map, &config, &mut rng);
            assert!(
                totals.imbalance() <= config.tolerance,
                "seed {seed}: {totals:?}"
            );
        }
    }

    #[test]
    fn both_axes_are_used_with_two_or_more_words() {
        let config = BalanceConfig {
            tolerance: 100,
            max_rounds: 0,
        };
        for seed in 0..20 {
            let mut map = words(&["ANT", "BEE"]);
            let mut rng = StdRng::seed_from_u64(seed);
            balance(&mut map, &config, &mut rng);
            let axes: Vec<Axis> = map.values().map(|w| w.axis()).collect();
            assert_ne!(axes[0], axes[1], "seed {seed}");
        }
    }

    #[test]
    fn single_word_keeps_its_random_axis() {
        let mut map = words(&["SOLO"]);
        let mut rng = StdRng::seed_from_u64(1);
        let totals = balance(&mut map, &BalanceConfig::default(), &mut rng);
        assert_eq!(totals.horizontal + totals.vertical, 4);
    }
}
