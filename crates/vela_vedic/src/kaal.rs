//! Kaal window slot tables and muhurta constants.
//!
//! Rahu Kaal, Yamaganda, and Gulika Kaal each occupy one eighth of the
//! daylight span. The starting slot depends only on the weekday, through
//! three distinct hand-fixed tables indexed with `weekday_number - 1`
//! (Sunday = 1). The window is `[sunrise + slot*d/8, sunrise +
//! (slot+1)*d/8)` for day duration `d`; slots range 1..=7, so every
//! window lies inside [sunrise, sunset).

/// Number of equal daylight slices used for kaal windows.
pub const DAY_SLICES: u8 = 8;

/// Brahma Muhurta starts this many minutes before sunrise.
pub const BRAHMA_MUHURTA_BEFORE_SUNRISE_MIN: f64 = 96.0;

/// Abhijit Muhurta spans this many minutes either side of solar noon.
pub const ABHIJIT_HALF_SPAN_MIN: f64 = 24.0;

/// Rahu Kaal start slot by weekday (Sun..Sat).
const RAHU_SLOTS: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Yamaganda start slot by weekday (Sun..Sat).
const YAMAGANDA_SLOTS: [u8; 7] = [6, 5, 4, 3, 2, 1, 7];

/// Gulika Kaal start slot by weekday (Sun..Sat).
const GULIKA_SLOTS: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// The three weekday-keyed inauspicious kaal windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KaalKind {
    RahuKaal,
    Yamaganda,
    GulikaKaal,
}

/// All three kaal kinds, in output order.
pub const ALL_KAALS: [KaalKind; 3] = [KaalKind::RahuKaal, KaalKind::Yamaganda, KaalKind::GulikaKaal];

impl KaalKind {
    /// Display name of the window.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamaganda => "Yamaganda",
            Self::GulikaKaal => "Gulika Kaal",
        }
    }

    /// Fixed descriptive sentence attached to the window in output.
    pub const fn description(self) -> &'static str {
        match self {
            Self::RahuKaal => "Inauspicious time, avoid starting new activities",
            Self::Yamaganda => "Inauspicious time, avoid journeys and new ventures",
            Self::GulikaKaal => "Inauspicious period ruled by Gulika, avoid important work",
        }
    }

    /// Starting slot (1..=7) for a 1-based weekday number (Sunday = 1).
    /// Out-of-range numbers wrap modulo 7 (0 behaves as 7, Saturday).
    pub fn start_slot(self, weekday_number: u8) -> u8 {
        let i = (weekday_number as usize + 6) % 7;
        match self {
            Self::RahuKaal => RAHU_SLOTS[i],
            Self::Yamaganda => YAMAGANDA_SLOTS[i],
            Self::GulikaKaal => GULIKA_SLOTS[i],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rahu_sunday_slot_7() {
        assert_eq!(KaalKind::RahuKaal.start_slot(1), 7);
    }

    #[test]
    fn out_of_range_weekday_wraps() {
        for kind in ALL_KAALS {
            assert_eq!(kind.start_slot(0), kind.start_slot(7));
            assert_eq!(kind.start_slot(8), kind.start_slot(1));
        }
    }

    #[test]
    fn rahu_table_descends() {
        for wd in 1..=7u8 {
            assert_eq!(KaalKind::RahuKaal.start_slot(wd), 8 - wd);
        }
    }

    #[test]
    fn yamaganda_table() {
        let expected = [6, 5, 4, 3, 2, 1, 7];
        for wd in 1..=7u8 {
            assert_eq!(KaalKind::Yamaganda.start_slot(wd), expected[(wd - 1) as usize]);
        }
    }

    #[test]
    fn gulika_table() {
        let expected = [5, 4, 3, 2, 1, 7, 6];
        for wd in 1..=7u8 {
            assert_eq!(KaalKind::GulikaKaal.start_slot(wd), expected[(wd - 1) as usize]);
        }
    }

    #[test]
    fn slots_stay_inside_daylight() {
        // slot + 1 <= DAY_SLICES guarantees end <= sunset
        for kaal in ALL_KAALS {
            for wd in 1..=7u8 {
                let slot = kaal.start_slot(wd);
                assert!((1..=7).contains(&slot), "{kaal:?} weekday {wd}");
            }
        }
    }

    #[test]
    fn descriptions_nonempty() {
        for kaal in ALL_KAALS {
            assert!(!kaal.description().is_empty());
            assert!(!kaal.name().is_empty());
        }
    }
}
