//! Prize item strips

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use rd_core::{RdError, RdResult};

/// One reel's ordered prize items
///
/// The item set is fixed for the lifetime of the strip; only the order
/// changes, via [`ReelStrip::shuffle`] at the start of each session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelStrip {
    /// Reel index (position in the machine, 0-based)
    pub reel_index: u8,
    items: Vec<String>,
}

impl ReelStrip {
    /// Create a new strip. Items must be non-empty and pairwise distinct
    /// within one reel; the same identifier may appear on other reels.
    pub fn new<I>(reel_index: u8, items: Vec<I>) -> RdResult<Self>
    where
        I: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();

        if items.is_empty() {
            return Err(RdError::Reel(format!("reel {reel_index} has no items")));
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.as_str()) {
                return Err(RdError::Reel(format!(
                    "reel {reel_index} has duplicate item '{item}'"
                )));
            }
        }

        Ok(Self { reel_index, items })
    }

    /// Get the item at a position (wraps around)
    pub fn item_at(&self, position: usize) -> &str {
        &self.items[position % self.items.len()]
    }

    /// All items in current order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items on the strip
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty (never true for a constructed strip)
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fisher-Yates reshuffle. Permutes positions only; the item set is
    /// invariant.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.items.shuffle(rng);
        log::trace!("reel {} order: {}", self.reel_index, self.items.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rejects_empty_strip() {
        let items: Vec<String> = Vec::new();
        assert!(ReelStrip::new(0, items).is_err());
    }

    #[test]
    fn test_rejects_duplicate_items() {
        assert!(ReelStrip::new(0, vec!["A", "B", "A"]).is_err());
    }

    #[test]
    fn test_item_at_wraps() {
        let strip = ReelStrip::new(0, vec!["A", "B", "C"]).unwrap();
        assert_eq!(strip.item_at(0), "A");
        assert_eq!(strip.item_at(3), "A");
        assert_eq!(strip.item_at(5), "C");
    }

    #[test]
    fn test_shuffle_preserves_item_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut strip = ReelStrip::new(1, vec!["A", "B", "C", "D", "E"]).unwrap();

        let mut before: Vec<String> = strip.items().to_vec();
        before.sort();

        for _ in 0..50 {
            strip.shuffle(&mut rng);
            let mut after: Vec<String> = strip.items().to_vec();
            after.sort();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_shuffle_visits_all_orderings_roughly_uniformly() {
        // Coarse uniformity check on a 3-item strip: all 6 permutations
        // show up with roughly equal frequency. Seeded, generous
        // tolerance (±25% of the expected bucket).
        let mut rng = StdRng::seed_from_u64(42);
        let mut strip = ReelStrip::new(0, vec!["A", "B", "C"]).unwrap();

        const TRIALS: usize = 6000;
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        for _ in 0..TRIALS {
            strip.shuffle(&mut rng);
            *counts.entry(strip.items().to_vec()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = TRIALS / 6;
        for (order, count) in &counts {
            assert!(
                (*count as i64 - expected as i64).unsigned_abs() as usize <= expected / 4,
                "ordering {order:?} seen {count} times, expected ~{expected}"
            );
        }
    }
}
