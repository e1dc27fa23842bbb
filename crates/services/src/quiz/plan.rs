use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use spell_core::model::{QuizSession, StatsBook, WordBank, WordEntry};

/// Uniformly random permutation of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// The answers offered for `entry` (misspellings plus the correct spelling) in random order.
pub fn candidate_set<R: Rng + ?Sized>(entry: &WordEntry, rng: &mut R) -> Vec<String> {
    let mut candidates = entry.candidates();
    candidates.shuffle(rng);
    candidates
}

/// Builds fresh sessions: question order and per-question answer order.
///
/// All randomness flows through the planner's own generator so a seeded
/// planner produces the same sessions every time.
pub struct QuizPlanner {
    rng: StdRng,
}

impl QuizPlanner {
    /// A planner seeded from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A deterministic planner.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A session over the whole bank in a new random order.
    pub fn full_session(&mut self, bank: &WordBank, stats: StatsBook) -> QuizSession {
        let order = shuffled(bank.entries(), &mut self.rng);
        self.session_over(order, stats)
    }

    /// A session over `order` as given, with freshly shuffled answers.
    pub fn session_over(&mut self, order: Vec<WordEntry>, stats: StatsBook) -> QuizSession {
        let rng = &mut self.rng;
        QuizSession::start(order, stats, |candidates| candidates.shuffle(rng))
    }
}

impl std::fmt::Debug for QuizPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizPlanner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn bank() -> WordBank {
        WordBank::new(vec![
            WordEntry::new("cat", ["kat", "catt"]).unwrap(),
            WordEntry::new("dog", ["dogg", "dawg"]).unwrap(),
            WordEntry::new("bird", ["brid", "burd"]).unwrap(),
            WordEntry::new("fish", ["fisch", "phish"]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn candidate_set_contains_exactly_the_answers() {
        let entry = WordEntry::new("necessary", ["neccessary", "necessery"]).unwrap();
        let expected: HashSet<&str> = ["necessary", "neccessary", "necessery"].into();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let set = candidate_set(&entry, &mut rng);
            assert_eq!(set.len(), 3);
            let distinct: HashSet<&str> = set.iter().map(String::as_str).collect();
            assert_eq!(distinct, expected);
        }
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: Vec<u32> = (0..20).collect();
        let mut out = shuffled(&items, &mut rng);
        out.sort_unstable();
        assert_eq!(out, items);
    }

    #[test]
    fn full_session_covers_the_bank() {
        let bank = bank();
        let mut planner = QuizPlanner::seeded(42);
        let session = planner.full_session(&bank, StatsBook::new());

        assert_eq!(session.total(), bank.len());
        assert_eq!(session.current_index(), 0);
        assert!(session.validate().is_ok());
        let words: HashSet<&str> = session
            .question_order()
            .iter()
            .map(WordEntry::spelling)
            .collect();
        assert_eq!(words.len(), bank.len());
    }

    #[test]
    fn seeded_planners_agree() {
        let bank = bank();
        let a = QuizPlanner::seeded(9).full_session(&bank, StatsBook::new());
        let b = QuizPlanner::seeded(9).full_session(&bank, StatsBook::new());
        assert_eq!(a, b);
    }

    #[test]
    fn session_over_keeps_given_order() {
        let bank = bank();
        let order = vec![bank.entries()[2].clone(), bank.entries()[0].clone()];
        let session = QuizPlanner::seeded(3).session_over(order, StatsBook::new());
        let words: Vec<&str> = session
            .question_order()
            .iter()
            .map(WordEntry::spelling)
            .collect();
        assert_eq!(words, vec!["bird", "cat"]);
        assert!(session.validate().is_ok());
    }
}
