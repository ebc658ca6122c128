use std::cmp::Ordering;

/// Summary statistics of a numbered layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutStats {
    pub width: usize,
    pub height: usize,
    pub area: usize,
    /// Cells crossed by both a horizontal and a vertical word. Each such cell counts once
    /// here and once for each of its two words' own counts.
    pub intersections: usize,
    /// Every word crosses at least one other word. Never true for fewer than two words.
    pub all_intersecting: bool,
}

impl LayoutStats {
    pub fn score(&self) -> LayoutScore {
        LayoutScore {
            all_intersecting: self.all_intersecting,
            intersections: self.intersections,
            area: self.area,
        }
    }
}

/// The quantities layouts are ranked by.
///
/// Ordered lexicographically: a layout where every word intersects beats one where some
/// word stands alone; then more intersections win; then a smaller area wins. Greater is
/// better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutScore {
    pub all_intersecting: bool,
    pub intersections: usize,
    pub area: usize,
}

impl Ord for LayoutScore {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for LayoutScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare(a: &LayoutScore, b: &LayoutScore) -> Ordering {
    a.all_intersecting
        .cmp(&b.all_intersecting)
        .then(a.intersections.cmp(&b.intersections))
        .then(b.area.cmp(&a.area))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(all_intersecting: bool, intersections: usize, area: usize) -> LayoutScore {
        LayoutScore {
            all_intersecting,
            intersections,
            area,
        }
    }

    #[test]
    fn all_intersecting_outranks_everything_else() {
        let connected = score(true, 1, 100);
        let dense_but_split = score(false, 9, 4);
        assert_eq!(compare(&connected, &dense_but_split), Ordering::Greater);
    }

    #[test]
    fn more_intersections_outrank_smaller_area() {
        assert!(score(true, 4, 30) > score(true, 3, 9));
        assert!(score(false, 2, 50) > score(false, 1, 6));
    }

    #[test]
    fn smaller_area_breaks_remaining_ties() {
        assert!(score(true, 3, 12) > score(true, 3, 15));
        assert_eq!(
            compare(&score(true, 3, 12), &score(true, 3, 12)),
            Ordering::Equal
        );
    }

    #[test]
    fn best_of_a_list_follows_the_priority_order() {
        let candidates = [
            score(false, 5, 20),
            score(true, 2, 30),
            score(true, 2, 25),
            score(true, 1, 6),
        ];
        assert_eq!(candidates.iter().max(), Some(&score(true, 2, 25)));
    }

    #[test]
    fn stats_project_onto_their_score() {
        let stats = LayoutStats {
            width: 4,
            height: 3,
            area: 12,
            intersections: 2,
            all_intersecting: true,
        };
        assert_eq!(stats.score(), score(true, 2, 12));
    }
}
