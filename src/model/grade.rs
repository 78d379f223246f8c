use std::fmt::{Display, Formatter, Result as FmtResult};

/// Letter grade of a score.
///
/// Variants are ordered from worst to best, with the silver variants ranking
/// right above their regular counterpart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    D,
    C,
    B,
    A,
    S,
    SH,
    SS,
    SSH,
    /// Nothing has been judged yet.
    #[default]
    None,
}

impl Grade {
    /// Calculate the grade for the given hit counts.
    ///
    /// `total` is the amount of judged objects, i.e. the sum of 300s, 100s,
    /// 50s, and misses. `reduced_visibility` should be `true` if Hidden or
    /// Flashlight is enabled.
    pub fn calculate(
        n300: u32,
        n50: u32,
        misses: u32,
        total: u32,
        reduced_visibility: bool,
    ) -> Self {
        let silver = |regular, hidden| if reduced_visibility { hidden } else { regular };

        if n300 == total {
            return silver(Self::SS, Self::SSH);
        }

        let total = f64::from(total);
        let ratio = f64::from(n300) / total;
        let ratio50 = f64::from(n50) / total;

        if ratio > 0.9 && ratio50 < 0.01 && misses == 0 {
            silver(Self::S, Self::SH)
        } else if (ratio > 0.8 && misses == 0) || ratio > 0.9 {
            Self::A
        } else if (ratio > 0.7 && misses == 0) || ratio > 0.8 {
            Self::B
        } else if ratio > 0.6 {
            Self::C
        } else {
            Self::D
        }
    }

    /// The tier of the grade where silver and regular variants are equal.
    ///
    /// Returns `None` for [`Grade::None`].
    pub const fn tier(self) -> Option<u8> {
        match self {
            Self::D => Some(0),
            Self::C => Some(1),
            Self::B => Some(2),
            Self::A => Some(3),
            Self::S | Self::SH => Some(4),
            Self::SS | Self::SSH => Some(5),
            Self::None => None,
        }
    }

    /// Whether this is one of the silver grades.
    pub const fn is_silver(self) -> bool {
        matches!(self, Self::SH | Self::SSH)
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
            Self::SH => "SH",
            Self::SS => "SS",
            Self::SSH => "SSH",
            Self::None => "None",
        };

        f.pad(s)
    }
}
