use crate::{model::hit_result::HitResult, util::mods::Mods};

/// Difficulty settings of one player.
///
/// Holds the map's base attributes together with the player's mods. All
/// derived values such as [`HitWindows`] are expressed in map time, i.e.
/// they do not scale with the clock rate.
///
/// # Example
///
/// ```
/// use rosu_ruleset::Difficulty;
///
/// let difficulty = Difficulty::new()
///     .ar(9.0)
///     .od(8.0)
///     .mods(16); // HR
///
/// assert!((difficulty.get_od() - 10.0).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    ar: f32,
    cs: f32,
    od: f32,
    hp: f32,
    mods: u32,
    clock_rate: Option<f64>,
}

impl Difficulty {
    /// Create new difficulty settings.
    ///
    /// All attributes are set to `5.0` and no mods are enabled.
    pub const fn new() -> Self {
        Self {
            ar: 5.0,
            cs: 5.0,
            od: 5.0,
            hp: 5.0,
            mods: 0,
            clock_rate: None,
        }
    }

    /// Specify the base approach rate.
    pub const fn ar(self, ar: f32) -> Self {
        Self { ar, ..self }
    }

    /// Specify the base circle size.
    pub const fn cs(self, cs: f32) -> Self {
        Self { cs, ..self }
    }

    /// Specify the base overall difficulty.
    pub const fn od(self, od: f32) -> Self {
        Self { od, ..self }
    }

    /// Specify the base drain rate.
    pub const fn hp(self, hp: f32) -> Self {
        Self { hp, ..self }
    }

    /// Specify mods through their bit values.
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    pub const fn mods(self, mods: u32) -> Self {
        Self { mods, ..self }
    }

    /// Adjust the clock rate.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Return the specified mods.
    pub const fn get_mods(&self) -> u32 {
        self.mods
    }

    /// Return the clock rate, either the custom one or the one of the mods.
    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    /// Overall difficulty as specified, without mods.
    pub fn get_base_od(&self) -> f64 {
        f64::from(self.od)
    }

    /// Drain rate as specified, without mods.
    pub fn get_base_hp(&self) -> f64 {
        f64::from(self.hp)
    }

    /// Circle size as specified, without mods.
    pub fn get_base_cs(&self) -> f64 {
        f64::from(self.cs)
    }

    /// Approach rate after applying mods.
    pub fn get_ar(&self) -> f64 {
        self.adjusted(self.ar)
    }

    /// Overall difficulty after applying mods.
    pub fn get_od(&self) -> f64 {
        self.adjusted(self.od)
    }

    /// Drain rate after applying mods.
    pub fn get_hp(&self) -> f64 {
        self.adjusted(self.hp)
    }

    /// Circle size after applying mods.
    ///
    /// Note that HardRock scales circle size by `1.3` instead of `1.4`.
    pub fn get_cs(&self) -> f64 {
        let cs = f64::from(self.cs);

        if self.mods.hr() {
            (cs * 1.3).min(10.0)
        } else if self.mods.ez() {
            cs * 0.5
        } else {
            cs
        }
    }

    /// Calculate the hit windows based on approach rate and overall
    /// difficulty.
    pub fn hit_windows(&self) -> HitWindows {
        let ar = self.get_ar();
        let od = self.get_od();

        let preempt = if ar < 5.0 {
            1200.0 + 600.0 * (5.0 - ar) / 5.0
        } else {
            1200.0 - 750.0 * (ar - 5.0) / 5.0
        };

        HitWindows {
            preempt,
            great: 80.0 - 6.0 * od,
            ok: 140.0 - 8.0 * od,
            meh: 200.0 - 10.0 * od,
        }
    }

    fn adjusted(&self, value: f32) -> f64 {
        (f64::from(value) * self.mods.od_ar_hp_multiplier()).min(10.0)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing windows in milliseconds.
///
/// `great`, `ok`, and `meh` are the maximum absolute offsets from an
/// object's start time for a 300, 100, and 50 respectively.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Time between an object fading in and its start time.
    pub preempt: f64,
    /// Window for a 300.
    pub great: f64,
    /// Window for a 100.
    pub ok: f64,
    /// Window for a 50.
    pub meh: f64,
}

impl HitWindows {
    /// The [`HitResult`] for a click that is `offset` milliseconds away from
    /// the start time, or `None` if it's outside of every window.
    pub fn judge(&self, offset: f64) -> Option<HitResult> {
        let offset = offset.abs();

        if offset < self.great {
            Some(HitResult::Hit300)
        } else if offset < self.ok {
            Some(HitResult::Hit100)
        } else if offset < self.meh {
            Some(HitResult::Hit50)
        } else {
            None
        }
    }
}
