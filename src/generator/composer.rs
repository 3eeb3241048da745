use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::engine::record::RecordSet;
use crate::error::{QuizError, Result};
use crate::generator::{Direction, DirectionMode, SelectionCriteria, TestItem};

/// Draw `criteria.question_count` distinct records from `eligible` in random
/// order and number them from 1.
///
/// The pool size is checked here even when the caller already asked for
/// availability, since the pool may have been replaced in between.
pub fn compose<R: Rng + ?Sized>(
    eligible: &RecordSet,
    criteria: &SelectionCriteria,
    rng: &mut R,
) -> Result<Vec<TestItem>> {
    let requested = criteria.question_count;
    if eligible.len() < requested {
        return Err(QuizError::InsufficientData {
            available: eligible.len(),
            requested,
        });
    }

    let mut pool = eligible.as_slice().to_vec();
    pool.shuffle(rng);
    pool.truncate(requested);

    let items: Vec<TestItem> = pool
        .into_iter()
        .enumerate()
        .map(|(i, record)| TestItem {
            ordinal: i + 1,
            record,
            direction: pick_direction(criteria.direction_mode, rng),
        })
        .collect();

    debug!(
        items = items.len(),
        pool = eligible.len(),
        mode = criteria.direction_mode.as_str(),
        "composed test"
    );
    Ok(items)
}

fn pick_direction<R: Rng + ?Sized>(mode: DirectionMode, rng: &mut R) -> Direction {
    match mode {
        DirectionMode::FrontToBack => Direction::FrontToBack,
        DirectionMode::BackToFront => Direction::BackToFront,
        DirectionMode::Mixed => {
            if rng.gen_bool(0.5) {
                Direction::FrontToBack
            } else {
                Direction::BackToFront
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::engine::record::VocabularyRecord;

    fn pool(n: i64) -> RecordSet {
        RecordSet::from_unsorted(
            (1..=n)
                .map(|i| VocabularyRecord::new(i, format!("front{i}"), format!("back{i}")))
                .collect(),
        )
    }

    fn criteria(count: usize, mode: DirectionMode) -> SelectionCriteria {
        SelectionCriteria {
            start_num: 1,
            end_num: 1000,
            question_count: count,
            direction_mode: mode,
        }
    }

    #[test]
    fn test_insufficient_pool_fails() {
        let mut rng = SmallRng::seed_from_u64(42);
        let err = compose(&pool(3), &criteria(4, DirectionMode::Mixed), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientData {
                available: 3,
                requested: 4
            }
        ));
    }

    #[test]
    fn test_exact_pool_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let records = pool(10);
        let items = compose(&records, &criteria(10, DirectionMode::FrontToBack), &mut rng).unwrap();
        let mut numbers: Vec<i64> = items.iter().map(|i| i.record.number).collect();
        numbers.sort();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_ordinals_contiguous_and_no_repeats() {
        let mut rng = SmallRng::seed_from_u64(99);
        let items = compose(&pool(50), &criteria(20, DirectionMode::Mixed), &mut rng).unwrap();
        let ordinals: Vec<usize> = items.iter().map(|i| i.ordinal).collect();
        assert_eq!(ordinals, (1..=20).collect::<Vec<_>>());
        let unique: HashSet<i64> = items.iter().map(|i| i.record.number).collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_fixed_modes_apply_to_every_item() {
        let mut rng = SmallRng::seed_from_u64(1);
        let records = pool(30);
        let forward = compose(&records, &criteria(30, DirectionMode::FrontToBack), &mut rng).unwrap();
        assert!(forward.iter().all(|i| i.direction == Direction::FrontToBack));
        let backward = compose(&records, &criteria(30, DirectionMode::BackToFront), &mut rng).unwrap();
        assert!(backward.iter().all(|i| i.direction == Direction::BackToFront));
        assert_eq!(backward[0].prompt(), backward[0].record.back);
    }

    #[test]
    fn test_mixed_mode_uses_both_directions() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let items = compose(&pool(200), &criteria(200, DirectionMode::Mixed), &mut rng).unwrap();
        let forward = items
            .iter()
            .filter(|i| i.direction == Direction::FrontToBack)
            .count();
        assert!(forward > 0 && forward < items.len());
    }

    #[test]
    fn test_same_seed_same_test() {
        let records = pool(40);
        let c = criteria(15, DirectionMode::Mixed);
        let a = compose(&records, &c, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = compose(&records, &c, &mut SmallRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_not_biased_to_first_position() {
        // Every record should lead the test at least once over many draws.
        let records = pool(5);
        let c = criteria(5, DirectionMode::FrontToBack);
        let mut rng = SmallRng::seed_from_u64(11);
        let mut leaders = HashSet::new();
        for _ in 0..500 {
            let items = compose(&records, &c, &mut rng).unwrap();
            leaders.insert(items[0].record.number);
        }
        assert_eq!(leaders.len(), 5);
    }
}
