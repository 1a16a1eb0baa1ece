use rand::Rng;
use thiserror::Error;

pub const DEFAULT_MIN: i32 = 1;
pub const DEFAULT_MAX: i32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomError {
    #[error("min ({min}) must not be greater than max ({max})")]
    InvalidRange { min: i32, max: i32 },
}

/// Inclusive integer range to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomRange {
    pub min: i32,
    pub max: i32,
}

impl RandomRange {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Result<Self, RandomError> {
        let min = min.unwrap_or(DEFAULT_MIN);
        let max = max.unwrap_or(DEFAULT_MAX);
        if min > max {
            return Err(RandomError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min..=self.max)
    }
}
