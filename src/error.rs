use std::{error::Error as StdError, fmt};

/// Anything that could go wrong while building an
/// [`OsuRuleset`](crate::OsuRuleset).
#[derive(Debug)]
#[non_exhaustive]
pub enum RulesetError {
    /// No player was added.
    NoPlayers,
    /// The target sequence is empty.
    EmptySequence,
    /// The target at `index` starts before its predecessor.
    UnorderedSequence { index: usize },
    /// The target at `index` has non-finite times, ends before it starts, or
    /// activates after it starts.
    InvalidTiming { index: usize },
    /// The skill estimator failed for a mod combination.
    Estimator { mods: u32, source: EstimatorError },
    /// The skill estimator did not return one snapshot per target.
    EstimatorLength {
        mods: u32,
        expected: usize,
        actual: usize,
    },
    /// No skill estimator was specified.
    MissingEstimator,
    /// No health model factory was specified.
    MissingHealth,
}

impl fmt::Display for RulesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlayers => f.write_str("ruleset requires at least one player"),
            Self::EmptySequence => f.write_str("target sequence is empty"),
            Self::UnorderedSequence { index } => {
                write!(f, "target {index} starts before its predecessor")
            }
            Self::InvalidTiming { index } => write!(f, "target {index} has invalid timing"),
            Self::Estimator { mods, .. } => {
                write!(f, "failed to estimate skill for mods {mods}")
            }
            Self::EstimatorLength {
                mods,
                expected,
                actual,
            } => write!(
                f,
                "skill estimator returned {actual} snapshots for mods {mods}, expected {expected}"
            ),
            Self::MissingEstimator => f.write_str("no skill estimator specified"),
            Self::MissingHealth => f.write_str("no health model specified"),
        }
    }
}

impl StdError for RulesetError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Estimator { source, .. } => Some(source),
            Self::NoPlayers
            | Self::EmptySequence
            | Self::UnorderedSequence { .. }
            | Self::InvalidTiming { .. }
            | Self::EstimatorLength { .. }
            | Self::MissingEstimator
            | Self::MissingHealth => None,
        }
    }
}

/// Error type of a [`SkillEstimator`](crate::SkillEstimator).
#[derive(Debug)]
#[non_exhaustive]
pub enum EstimatorError {
    /// The estimator can't handle the given mods.
    UnsupportedMods(u32),
    /// Any other failure.
    Other(Box<dyn StdError + Send + Sync + 'static>),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedMods(mods) => write!(f, "unsupported mods {mods}"),
            Self::Other(_) => f.write_str("skill estimation failed"),
        }
    }
}

impl StdError for EstimatorError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::UnsupportedMods(_) => None,
            Self::Other(inner) => Some(inner.as_ref()),
        }
    }
}
