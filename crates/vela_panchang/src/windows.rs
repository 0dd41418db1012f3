//! Muhurta and kaal window derivation.
//!
//! All five named windows derive from the day's sun cycle alone. The
//! three kaal windows slice daylight into eight equal parts and pick a
//! starting slot by weekday; Brahma Muhurta and Abhijit Muhurta are
//! fixed offsets from sunrise and solar noon.

use vela_vedic::{
    ABHIJIT_HALF_SPAN_MIN, ALL_KAALS, BRAHMA_MUHURTA_BEFORE_SUNRISE_MIN, DAY_SLICES, KaalKind,
};

use crate::resolve::SolarLunarPosition;

/// Auspicious or inauspicious, for the summary lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KaalCategory {
    Auspicious,
    Inauspicious,
}

/// A half-open local time window `[start_h, end_h)` in decimal hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub name: &'static str,
    pub start_h: f64,
    pub end_h: f64,
    pub category: KaalCategory,
    pub description: &'static str,
}

impl Window {
    /// Whether a local decimal-hour instant falls inside the window.
    pub fn contains(&self, hour: f64) -> bool {
        hour >= self.start_h && hour < self.end_h
    }
}

/// The five named windows of one vedic day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayWindows {
    pub brahma_muhurta: Window,
    pub abhijit_muhurta: Window,
    pub rahu_kaal: Window,
    pub yamaganda: Window,
    pub gulika_kaal: Window,
}

impl DayWindows {
    /// The two auspicious windows, in output order.
    pub fn auspicious(&self) -> [&Window; 2] {
        [&self.brahma_muhurta, &self.abhijit_muhurta]
    }

    /// The three inauspicious windows, in output order.
    pub fn inauspicious(&self) -> [&Window; 3] {
        [&self.rahu_kaal, &self.yamaganda, &self.gulika_kaal]
    }
}

fn kaal_window(kind: KaalKind, sunrise_h: f64, slice_h: f64, weekday_number: u8) -> Window {
    let slot = kind.start_slot(weekday_number) as f64;
    Window {
        name: kind.name(),
        start_h: sunrise_h + slot * slice_h,
        end_h: sunrise_h + (slot + 1.0) * slice_h,
        category: KaalCategory::Inauspicious,
        description: kind.description(),
    }
}

/// Derive all five windows for a resolved day.
///
/// `weekday_number` is 1-based with Sunday = 1. On polar days the clamped
/// sun cycle flows through unchanged: polar night collapses every kaal
/// window to the zero-width instant of solar noon.
pub fn derive_windows(pos: &SolarLunarPosition, weekday_number: u8) -> DayWindows {
    let cycle = &pos.cycle;
    let slice_h = cycle.day_duration_h() / DAY_SLICES as f64;

    let abhijit_half = ABHIJIT_HALF_SPAN_MIN / 60.0;

    let [rahu_kaal, yamaganda, gulika_kaal] =
        ALL_KAALS.map(|kind| kaal_window(kind, cycle.sunrise_h, slice_h, weekday_number));

    DayWindows {
        brahma_muhurta: Window {
            name: "Brahma Muhurta",
            start_h: cycle.sunrise_h - BRAHMA_MUHURTA_BEFORE_SUNRISE_MIN / 60.0,
            end_h: cycle.sunrise_h,
            category: KaalCategory::Auspicious,
            description: "Auspicious time for meditation and spiritual practice",
        },
        abhijit_muhurta: Window {
            name: "Abhijit Muhurta",
            start_h: cycle.solar_noon_h - abhijit_half,
            end_h: cycle.solar_noon_h + abhijit_half,
            category: KaalCategory::Auspicious,
            description: "Auspicious time for starting new ventures",
        },
        rahu_kaal,
        yamaganda,
        gulika_kaal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PanchangRequest;
    use crate::resolve::resolve;

    fn sunday_position() -> SolarLunarPosition {
        // 2024-04-14 was a Sunday.
        let req = PanchangRequest::new(2024, 4, 14, 6, 30, 0.0, 17.385, 78.4867, 5.5).unwrap();
        resolve(&req)
    }

    #[test]
    fn sunday_rahu_kaal_is_last_daylight_eighth() {
        let pos = sunday_position();
        let w = derive_windows(&pos, 1);
        let slice = pos.cycle.day_duration_h() / 8.0;
        assert!((w.rahu_kaal.start_h - (pos.cycle.sunset_h - slice)).abs() < 1e-9);
        assert!((w.rahu_kaal.end_h - pos.cycle.sunset_h).abs() < 1e-9);
    }

    #[test]
    fn kaal_windows_inside_daylight() {
        let pos = sunday_position();
        for weekday in 1..=7 {
            let w = derive_windows(&pos, weekday);
            for kaal in w.inauspicious() {
                assert_eq!(kaal.category, KaalCategory::Inauspicious);
                assert!(kaal.start_h >= pos.cycle.sunrise_h - 1e-9);
                assert!(kaal.end_h <= pos.cycle.sunset_h + 1e-9);
                let span_h = kaal.end_h - kaal.start_h;
                assert!((span_h - pos.cycle.day_duration_h() / 8.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn kaal_windows_disjoint_per_day() {
        let pos = sunday_position();
        for weekday in 1..=7 {
            let w = derive_windows(&pos, weekday);
            let mut slots: Vec<f64> = w.inauspicious().iter().map(|k| k.start_h).collect();
            slots.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for pair in slots.windows(2) {
                assert!(pair[1] - pair[0] > 1e-9);
            }
        }
    }

    #[test]
    fn brahma_muhurta_ends_at_sunrise() {
        let pos = sunday_position();
        let w = derive_windows(&pos, 1);
        assert!((pos.cycle.sunrise_h - w.brahma_muhurta.start_h - 1.6).abs() < 1e-9);
        assert!((w.brahma_muhurta.end_h - pos.cycle.sunrise_h).abs() < 1e-9);
    }

    #[test]
    fn abhijit_centered_on_solar_noon() {
        let pos = sunday_position();
        let w = derive_windows(&pos, 1);
        let mid = (w.abhijit_muhurta.start_h + w.abhijit_muhurta.end_h) / 2.0;
        assert!((mid - pos.cycle.solar_noon_h).abs() < 1e-9);
        assert!((w.abhijit_muhurta.end_h - w.abhijit_muhurta.start_h - 0.8).abs() < 1e-9);
    }

    #[test]
    fn polar_night_collapses_kaals() {
        // Svalbard in January: the sun never rises.
        let req = PanchangRequest::new(2024, 1, 10, 12, 0, 0.0, 78.22, 15.65, 1.0).unwrap();
        let pos = resolve(&req);
        let w = derive_windows(&pos, 4);
        for kaal in w.inauspicious() {
            assert!((kaal.end_h - kaal.start_h).abs() < 1e-9);
        }
    }

    #[test]
    fn window_contains_half_open() {
        let w = Window {
            name: "x",
            start_h: 10.0,
            end_h: 11.0,
            category: KaalCategory::Auspicious,
            description: "",
        };
        assert!(w.contains(10.0));
        assert!(w.contains(10.999));
        assert!(!w.contains(11.0));
    }
}
