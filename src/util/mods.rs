/// Mods that change any value the skill estimator depends on.
///
/// Players whose mods only differ outside of this mask share one estimator
/// table.
pub(crate) const DIFFICULTY_ADJUST_MASK: u32 =
    EZ | TD | HD | HR | DT | RX | HT | NC | FL | SO | AP;

const NF: u32 = 1 << 0;
const EZ: u32 = 1 << 1;
const TD: u32 = 1 << 2;
const HD: u32 = 1 << 3;
const HR: u32 = 1 << 4;
const DT: u32 = 1 << 6;
const RX: u32 = 1 << 7;
const HT: u32 = 1 << 8;
const NC: u32 = 1 << 9;
const FL: u32 = 1 << 10;
const SO: u32 = 1 << 12;
const AP: u32 = 1 << 13;
pub(crate) const V2: u32 = 1 << 29;

pub trait Mods: Copy {
    fn nf(self) -> bool;
    fn ez(self) -> bool;
    fn hd(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn rx(self) -> bool;
    fn ht(self) -> bool;
    fn nc(self) -> bool;
    fn fl(self) -> bool;
    fn so(self) -> bool;
    fn ap(self) -> bool;
    fn v2(self) -> bool;

    /// The bits that key the estimator cache.
    fn difficulty_key(self) -> u32;

    fn clock_rate(self) -> f64 {
        if self.dt() || self.nc() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }

    fn od_ar_hp_multiplier(self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    /// Failing is impossible for this player.
    fn fail_immune(self) -> bool {
        self.nf() || self.rx() || self.ap()
    }

    /// Qualifies for the silver grades.
    fn reduced_visibility(self) -> bool {
        self.hd() || self.fl()
    }

    /// Extra lives before a fail becomes terminal.
    fn recoveries(self) -> u32 {
        if self.ez() {
            2
        } else {
            0
        }
    }

    fn score_multiplier(self) -> f64 {
        let v2 = self.v2();
        let mut multiplier = 1.0;

        if self.nf() || self.ez() {
            multiplier *= 0.5;
        }

        if self.ht() {
            multiplier *= 0.3;
        }

        if self.hd() {
            multiplier *= 1.06;
        }

        if self.hr() {
            multiplier *= if v2 { 1.1 } else { 1.06 };
        }

        if self.dt() || self.nc() {
            multiplier *= if v2 { 1.2 } else { 1.12 };
        }

        if self.fl() {
            multiplier *= 1.12;
        }

        if self.so() {
            multiplier *= 0.9;
        }

        if self.rx() || self.ap() {
            multiplier = 0.0;
        }

        multiplier
    }
}

macro_rules! impl_mods_fn {
    ( $fn_name:ident, $bits:expr ) => {
        fn $fn_name(self) -> bool {
            self & ($bits) != 0
        }
    };
}

impl Mods for u32 {
    impl_mods_fn!(nf, NF);
    impl_mods_fn!(ez, EZ);
    impl_mods_fn!(hd, HD);
    impl_mods_fn!(hr, HR);
    impl_mods_fn!(dt, DT);
    impl_mods_fn!(rx, RX);
    impl_mods_fn!(ht, HT);
    impl_mods_fn!(nc, NC);
    impl_mods_fn!(fl, FL);
    impl_mods_fn!(so, SO);
    impl_mods_fn!(ap, AP);
    impl_mods_fn!(v2, V2);

    fn difficulty_key(self) -> u32 {
        self & DIFFICULTY_ADJUST_MASK
    }
}
