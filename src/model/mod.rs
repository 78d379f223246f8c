/// Difficulty settings and hit windows.
pub mod difficulty;

/// Letter grades.
pub mod grade;

/// Judgement related types.
pub mod hit_result;

/// The target contract and related types.
pub mod target;
