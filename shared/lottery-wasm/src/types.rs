//! Core data types for a draw: the range, the validated request and its result.
//!
//! A `DrawRequest` can only be obtained through `DrawRequest::new`, so every
//! request reaching the sampler is already known to be satisfiable.

use serde::Serialize;

use crate::error::DrawError;

/// Largest amount of numbers a single draw may request.
pub const MAX_COUNT: i64 = 100_000;

/// Inclusive integer range `[start, end]` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// Build a range, rejecting `start >= end`.
    pub fn new(start: i64, end: i64) -> Result<Self, DrawError> {
        if start >= end {
            return Err(DrawError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline(always)]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Distance from `start` to `end`, i.e. the largest pool offset.
    /// Fits in `u64` for any pair of `i64` values.
    #[inline(always)]
    pub fn span(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// Number of integers in the pool (`end - start + 1`).
    #[inline(always)]
    pub fn pool_size(&self) -> u128 {
        u128::from(self.span()) + 1
    }

    #[inline(always)]
    pub fn contains(&self, value: i64) -> bool {
        (self.start..=self.end).contains(&value)
    }
}

/// Parameters of one draw, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    #[serde(flatten)]
    range: Range,
    count: usize,
    allow_repeats: bool,
}

impl DrawRequest {
    /// Validate and build a request.
    ///
    /// Checks run in a fixed order: range, then count (`1..=MAX_COUNT`), then
    /// pool capacity for unique draws.
    pub fn new(start: i64, end: i64, count: i64, allow_repeats: bool) -> Result<Self, DrawError> {
        let range = Range::new(start, end)?;

        if !(1..=MAX_COUNT).contains(&count) {
            return Err(DrawError::InvalidCount(count));
        }

        // count is positive here; u128 holds both sides without overflow
        let pool = range.pool_size();
        if !allow_repeats && count as u128 > pool {
            return Err(DrawError::UnsatisfiableUniqueCount { count, pool });
        }

        Ok(Self {
            range,
            // MAX_COUNT fits in usize on every target
            count: count as usize,
            allow_repeats,
        })
    }

    #[inline(always)]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn allow_repeats(&self) -> bool {
        self.allow_repeats
    }
}

/// Numbers produced by one draw, in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawResult {
    numbers: Vec<i64>,
}

impl DrawResult {
    pub(crate) fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.numbers
    }
}
