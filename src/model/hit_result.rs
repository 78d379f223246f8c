use std::fmt::{Display, Formatter, Result as FmtResult};

/// The outcome of a single interaction with a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitResult {
    /// Discarded without any effect.
    Ignore,
    /// A click that landed nowhere near the target. Only reported to the hit
    /// listener, never scored.
    PositionalMiss,
    /// A missed slider tick, repeat, or end.
    SliderMiss,
    Miss,
    Hit50,
    Hit100,
    Hit300,
    SliderStart,
    SliderPoint,
    SliderRepeat,
    SliderEnd,
    SpinnerSpin,
    SpinnerBonus,
}

impl HitResult {
    /// The fixed score contribution of this result.
    pub const fn score_value(self) -> u32 {
        match self {
            Self::Ignore | Self::PositionalMiss | Self::SliderMiss | Self::Miss => 0,
            Self::Hit50 => 50,
            Self::Hit100 => 100,
            Self::Hit300 => 300,
            Self::SliderPoint => 10,
            Self::SliderStart | Self::SliderRepeat | Self::SliderEnd => 30,
            Self::SpinnerSpin => 100,
            Self::SpinnerBonus => 1000,
        }
    }

    /// Whether this is a 300, 100, or 50.
    pub const fn is_base_hit(self) -> bool {
        matches!(self, Self::Hit300 | Self::Hit100 | Self::Hit50)
    }

    /// Whether this result counts towards accuracy, i.e. a 300, 100, 50, or
    /// miss.
    pub const fn is_counting(self) -> bool {
        matches!(self, Self::Hit300 | Self::Hit100 | Self::Hit50 | Self::Miss)
    }

    /// Whether the engine drops this result before scoring it.
    pub const fn is_discarded(self) -> bool {
        matches!(self, Self::Ignore | Self::PositionalMiss)
    }
}

impl Display for HitResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            Self::Ignore => "ignore",
            Self::PositionalMiss => "positional miss",
            Self::SliderMiss => "slider miss",
            Self::Miss => "miss",
            Self::Hit50 => "50",
            Self::Hit100 => "100",
            Self::Hit300 => "300",
            Self::SliderStart => "slider start",
            Self::SliderPoint => "slider point",
            Self::SliderRepeat => "slider repeat",
            Self::SliderEnd => "slider end",
            Self::SpinnerSpin => "spinner spin",
            Self::SpinnerBonus => "spinner bonus",
        };

        f.write_str(s)
    }
}

/// Quality tier of a completed combo run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComboBonus {
    /// Only 300s and every object was judged.
    Geki,
    /// No 50s or misses and every object was judged.
    Katu,
    /// Anything else.
    Mu,
}

/// A [`HitResult`] together with the bonus tag of the combo run it closed,
/// if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Judgement {
    pub result: HitResult,
    pub bonus: Option<ComboBonus>,
}

impl Judgement {
    /// A judgement without bonus tag.
    pub const fn new(result: HitResult) -> Self {
        Self {
            result,
            bonus: None,
        }
    }
}

impl From<HitResult> for Judgement {
    fn from(result: HitResult) -> Self {
        Self::new(result)
    }
}

/// How a judgement affects the combo.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComboResult {
    Reset,
    #[default]
    Hold,
    Increase,
}
