//! Number sampling, with or without replacement.
//!
//! Unique draws use a partial Fisher–Yates shuffle over a virtual pool: slot
//! `i` of the output picks uniformly among the pool offsets not yet taken, and
//! only the slots that were swapped are stored. Memory is O(count) regardless
//! of how wide the range is, and every subset of the requested size is equally
//! likely.

use std::collections::HashMap;

use rand::Rng;

use crate::error::DrawError;
use crate::types::{DrawRequest, DrawResult, Range};

/// Draw numbers for an already validated request.
///
/// The result keeps draw order; it is not sorted.
pub fn draw<R: Rng + ?Sized>(request: &DrawRequest, rng: &mut R) -> DrawResult {
    let range = request.range();
    let numbers = if request.allow_repeats() {
        draw_with_repeats(range, request.count(), rng)
    } else {
        draw_unique(range, request.count(), rng)
    };

    tracing::debug!(
        start = range.start(),
        end = range.end(),
        count = request.count(),
        allow_repeats = request.allow_repeats(),
        "numbers drawn"
    );

    DrawResult::new(numbers)
}

/// Validate the parameters, then draw.
///
/// Nothing is taken from `rng` when validation fails.
pub fn draw_numbers<R: Rng + ?Sized>(
    start: i64,
    end: i64,
    count: i64,
    allow_repeats: bool,
    rng: &mut R,
) -> Result<DrawResult, DrawError> {
    let request = DrawRequest::new(start, end, count, allow_repeats).inspect_err(|e| {
        tracing::debug!(code = e.code(), error = %e, "draw request rejected");
    })?;
    Ok(draw(&request, rng))
}

/// Independent uniform picks over `[start, end]`.
fn draw_with_repeats<R: Rng + ?Sized>(range: Range, count: usize, rng: &mut R) -> Vec<i64> {
    (0..count)
        .map(|_| rng.random_range(range.start()..=range.end()))
        .collect()
}

/// Distinct uniform picks over `[start, end]`.
///
/// Works on offsets `0..=span` from `start`. `swapped[k]` holds the offset
/// currently sitting in slot `k` when it differs from `k` itself.
fn draw_unique<R: Rng + ?Sized>(range: Range, count: usize, rng: &mut R) -> Vec<i64> {
    let span = range.span();
    let mut swapped: HashMap<u64, u64> = HashMap::with_capacity(count);
    let mut numbers = Vec::with_capacity(count);

    for slot in 0..count as u64 {
        let pick = rng.random_range(slot..=span);
        let picked = swapped.get(&pick).copied().unwrap_or(pick);
        let displaced = swapped.get(&slot).copied().unwrap_or(slot);

        // Offset never exceeds span, so the sum stays inside [start, end]
        numbers.push(range.start().wrapping_add_unsigned(picked));
        swapped.insert(pick, displaced);
    }

    numbers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DrawRng;
    use rand::RngCore;
    use std::collections::HashSet;

    fn is_unique(numbers: &[i64]) -> bool {
        let set: HashSet<_> = numbers.iter().collect();
        set.len() == numbers.len()
    }

    #[test]
    fn test_unique_draw_in_range() {
        let mut rng = DrawRng::from_seed(42);
        let result = draw_numbers(1, 10, 5, false, &mut rng).unwrap();
        assert_eq!(result.len(), 5);
        assert!(result.numbers().iter().all(|n| (1..=10).contains(n)));
        assert!(is_unique(result.numbers()));
    }

    #[test]
    fn test_full_pool_is_permutation() {
        let mut rng = DrawRng::from_seed(7);
        for _ in 0..50 {
            let mut numbers = draw_numbers(1, 5, 5, false, &mut rng).unwrap().into_vec();
            numbers.sort_unstable();
            assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_full_pool_negative_range() {
        let mut rng = DrawRng::from_seed(3);
        let mut numbers = draw_numbers(-3, 3, 7, false, &mut rng).unwrap().into_vec();
        numbers.sort_unstable();
        assert_eq!(numbers, (-3..=3).collect::<Vec<_>>());
    }

    #[test]
    fn test_repeats_in_range() {
        let mut rng = DrawRng::from_seed(99);
        let result = draw_numbers(1, 100, 10, true, &mut rng).unwrap();
        assert_eq!(result.len(), 10);
        assert!(result.numbers().iter().all(|n| (1..=100).contains(n)));
    }

    #[test]
    fn test_repeats_can_exceed_pool() {
        let mut rng = DrawRng::from_seed(5);
        let result = draw_numbers(0, 1, 20, true, &mut rng).unwrap();
        assert_eq!(result.len(), 20);
        // 20 picks from a pool of 2 must repeat
        assert!(!is_unique(result.numbers()));
    }

    #[test]
    fn test_unique_draw_extreme_range() {
        let mut rng = DrawRng::from_seed(11);
        let result = draw_numbers(i64::MIN, i64::MAX, 64, false, &mut rng).unwrap();
        assert_eq!(result.len(), 64);
        assert!(is_unique(result.numbers()));
    }

    #[test]
    fn test_range_end_is_reachable() {
        let mut rng = DrawRng::from_seed(1);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let result = draw_numbers(1, 3, 1, false, &mut rng).unwrap();
            seen.insert(result.numbers()[0]);
        }
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_unique_second_slot_is_roughly_uniform() {
        let mut rng = DrawRng::from_seed(2024);
        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            let result = draw_numbers(0, 3, 2, false, &mut rng).unwrap();
            counts[result.numbers()[1] as usize] += 1;
        }
        // Expected 2000 each
        for c in counts {
            assert!((1700..=2300).contains(&c), "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn test_validation_consumes_no_randomness() {
        let mut rng = DrawRng::from_seed(8);
        let untouched = DrawRng::from_seed(8);

        assert!(matches!(
            draw_numbers(5, 1, 3, true, &mut rng),
            Err(DrawError::InvalidRange { start: 5, end: 1 })
        ));
        assert!(matches!(draw_numbers(1, 5, 0, true, &mut rng), Err(DrawError::InvalidCount(0))));
        assert!(matches!(
            draw_numbers(1, 5, 6, false, &mut rng),
            Err(DrawError::UnsatisfiableUniqueCount { count: 6, pool: 5 })
        ));

        let mut untouched = untouched;
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let req = DrawRequest::new(1, 60, 6, false).unwrap();
        let a = draw(&req, &mut DrawRng::from_seed(77));
        let b = draw(&req, &mut DrawRng::from_seed(77));
        assert_eq!(a, b);
    }
}
