/// Input-validation failures raised before any tree is built.
///
/// An empty mining result is not an error: the builder returns `Ok(None)` and
/// the miner returns an empty collection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must be at least 1")]
    ZeroMinSupport,

    #[error("minimum support fraction must lie in (0, 1], got {0}")]
    InvalidSupportFraction(f64),

    #[error("transaction {transaction} has multiplicity 0")]
    ZeroMultiplicity { transaction: String },

    #[error("transaction multiset contains an empty transaction")]
    EmptyTransaction,

    #[error("total transaction multiplicity exceeds {}", u64::MAX)]
    SupportOverflow,

    #[error("maximum itemset length must be at least 1")]
    ZeroMaxLen,
}

pub type Result<T> = std::result::Result<T, MiningError>;
