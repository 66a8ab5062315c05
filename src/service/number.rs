//! Racing number allocation.

use std::collections::HashSet;

use rand::Rng;

use crate::error::validation::ValidationError;

/// Draws unused racing numbers from an inclusive range.
///
/// The allocator itself is stateless. Callers must serialize allocation per stage between
/// reading the used numbers and persisting the drawn one, see `RegistrationService`.
pub struct NumberAllocator;

impl NumberAllocator {
    /// Draws a number from `[start, end]` that is not in `used`.
    ///
    /// Fails as soon as `used` holds at least as many numbers as the range does, without
    /// checking which numbers those are. An empty range (`start > end`) is treated as
    /// exhausted.
    ///
    /// Numbers are drawn uniformly and redrawn while taken. When `used` covers at least half
    /// of the range the free numbers are listed instead, which keeps both paths bounded by
    /// the size of `used` rather than the width of the range.
    ///
    /// # Arguments
    /// - `used` - Numbers already taken in the scope
    /// - `start` - Lowest allowed number, inclusive
    /// - `end` - Highest allowed number, inclusive
    ///
    /// # Returns
    /// - `Ok(i32)` - A number in `[start, end]` not contained in `used`
    /// - `Err(ValidationError::RanOutOfNumbers)` - No number can be drawn
    pub fn generate(used: &HashSet<i32>, start: i32, end: i32) -> Result<i32, ValidationError> {
        let pool_size = (i64::from(end) - i64::from(start) + 1).max(0);
        let exhausted = ValidationError::RanOutOfNumbers { start, end };

        let taken = used.len() as i64;
        if taken >= pool_size {
            return Err(exhausted);
        }

        let mut rng = rand::rng();

        if taken * 2 >= pool_size {
            let free: Vec<i32> = (start..=end).filter(|n| !used.contains(n)).collect();
            if free.is_empty() {
                return Err(exhausted);
            }
            return Ok(free[rng.random_range(0..free.len())]);
        }

        // At least half of the range is free here, so each draw succeeds with p >= 1/2.
        loop {
            let number = rng.random_range(start..=end);
            if !used.contains(&number) {
                return Ok(number);
            }
        }
    }
}
