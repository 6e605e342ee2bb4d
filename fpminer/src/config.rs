use crate::error::{MiningError, Result};

/// Minimum support threshold, absolute or relative to the total transaction
/// weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(u64),
    Fraction(f64),
}

/// Relative slack absorbed before rounding a fractional threshold up, so that
/// products like `0.07 * 100` land on the whole number they denote.
const FRACTION_ROUNDING_SLACK: f64 = 1e-9;

impl MinSupport {
    pub fn validate(self) -> Result<()> {
        match self {
            MinSupport::Count(0) => Err(MiningError::ZeroMinSupport),
            MinSupport::Count(_) => Ok(()),
            MinSupport::Fraction(fraction) if fraction > 0.0 && fraction <= 1.0 => Ok(()),
            MinSupport::Fraction(fraction) => Err(MiningError::InvalidSupportFraction(fraction)),
        }
    }

    /// Absolute threshold for a multiset of total weight `total`. A fraction
    /// rounds up and never resolves below 1.
    pub fn resolve(self, total: u64) -> Result<u64> {
        self.validate()?;
        match self {
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) => {
                let exact = fraction * total as f64;
                let threshold = (exact - exact * FRACTION_ROUNDING_SLACK).ceil();
                Ok((threshold as u64).max(1))
            }
        }
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Count(1)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    /// Longest itemset to emit; `None` for no limit.
    pub max_len: Option<usize>,
    /// Mine sibling items of each header table on the rayon pool.
    pub parallel: bool,
    /// Enumerate single-chain trees directly instead of recursing.
    pub single_path_shortcut: bool,
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_min_support(mut self, min_support: MinSupport) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    /// Checks the settings that do not depend on the input.
    pub fn validate(&self) -> Result<()> {
        if self.max_len == Some(0) {
            return Err(MiningError::ZeroMaxLen);
        }
        self.min_support.validate()
    }
}
