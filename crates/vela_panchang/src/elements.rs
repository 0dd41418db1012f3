//! Lunisolar day elements with boundary times.
//!
//! Tithi and nakshatra are reported for the observation instant with the
//! boundary crossings around it. Yoga and karana are reported as the
//! sequence of segments covering one vedic day, sunrise to next sunrise.

use vela_vedic::{
    KARANA_SEGMENT_DEG, NAKSHATRA_SPAN_DEG, TITHI_SEGMENT_DEG, YOGA_SEGMENT_DEG,
    karana_from_elongation, nakshatra_from_longitude, normalize_to_pm180, tithi_from_elongation,
    tithi_name, yoga_from_sum,
};

use crate::error::PanchangError;
use crate::resolve::{SolarLunarPosition, elongation_at, moon_sidereal_at, sidereal_sum_at};
use crate::search_util::find_ascending_zero;

/// Scan granularity in days. The fastest-moving searched angle (the
/// sidereal sum, ~14.2 deg/day) moves well under half a segment per step.
const SCAN_STEP_DAYS: f64 = 0.05;
/// Longest bracket distance: a slow tithi can stretch past 1.2 days.
const MAX_SCAN_STEPS: usize = 40;
const BISECT_ITERS: usize = 60;
/// Boundary tolerance, about 0.1 s.
const TOL_DAYS: f64 = 1e-6;

/// Tithi at the observation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 1-based tithi number in the lunar month, 1..=30.
    pub number: u8,
    pub name: &'static str,
    /// Paksha display name, "Shukla" or "Krishna".
    pub paksha: &'static str,
    /// Julian Date (UT) when this tithi completes.
    pub completes_at_jd: f64,
    /// Percentage of the tithi still remaining at the observation instant.
    pub left_percentage: f64,
}

/// Nakshatra at the observation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// 1-based nakshatra number, 1..=27.
    pub number: u8,
    pub name: &'static str,
    /// Julian Date (UT) when the Moon entered this nakshatra.
    pub starts_at_jd: f64,
    /// Julian Date (UT) when the Moon leaves this nakshatra.
    pub ends_at_jd: f64,
    /// Percentage of the nakshatra still remaining at the observation instant.
    pub left_percentage: f64,
}

/// One yoga segment touching the vedic day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaEntry {
    /// 1-based yoga number, 1..=27.
    pub number: u8,
    pub name: &'static str,
    /// Julian Date (UT) when this yoga completes.
    pub completes_at_jd: f64,
    /// Remaining percentage at the observation instant: 100 before the
    /// segment starts, 0 after it completes.
    pub left_percentage: f64,
}

/// One karana segment touching the vedic day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaEntry {
    /// Position in the 60-karana month cycle, 1..=60.
    pub number: u8,
    pub name: &'static str,
    /// Julian Date (UT) when this karana completes.
    pub completes_at_jd: f64,
    /// Remaining percentage at the observation instant: 100 before the
    /// segment starts, 0 after it completes.
    pub left_percentage: f64,
}

fn boundary(
    f: &dyn Fn(f64) -> f64,
    target_deg: f64,
    jd_start: f64,
    step: f64,
    context: &'static str,
) -> Result<f64, PanchangError> {
    let g = move |t: f64| normalize_to_pm180(f(t) - target_deg);
    find_ascending_zero(&g, jd_start, step, MAX_SCAN_STEPS, BISECT_ITERS, TOL_DAYS)
        .ok_or(PanchangError::NoConvergence(context))
}

/// Tithi at the observation instant, with its completion time.
pub fn tithi_at(pos: &SolarLunarPosition) -> Result<TithiInfo, PanchangError> {
    let t = tithi_from_elongation(pos.elongation_deg());
    let end_deg = t.number as f64 * TITHI_SEGMENT_DEG;
    let completes_at_jd = boundary(
        &elongation_at,
        end_deg,
        pos.jd_ut,
        SCAN_STEP_DAYS,
        "tithi completion",
    )?;
    Ok(TithiInfo {
        number: t.number,
        name: tithi_name(t.number),
        paksha: t.paksha.name(),
        completes_at_jd,
        left_percentage: (1.0 - t.fraction) * 100.0,
    })
}

/// Nakshatra at the observation instant, with its entry and exit times.
pub fn nakshatra_at(pos: &SolarLunarPosition) -> Result<NakshatraInfo, PanchangError> {
    let n = nakshatra_from_longitude(pos.moon_sidereal_deg());
    let start_deg = (n.number - 1) as f64 * NAKSHATRA_SPAN_DEG;
    let end_deg = n.number as f64 * NAKSHATRA_SPAN_DEG;
    let starts_at_jd = boundary(
        &moon_sidereal_at,
        start_deg,
        pos.jd_ut,
        -SCAN_STEP_DAYS,
        "nakshatra start",
    )?;
    let ends_at_jd = boundary(
        &moon_sidereal_at,
        end_deg,
        pos.jd_ut,
        SCAN_STEP_DAYS,
        "nakshatra end",
    )?;
    Ok(NakshatraInfo {
        number: n.number,
        name: n.nakshatra.name(),
        starts_at_jd,
        ends_at_jd,
        left_percentage: (1.0 - n.fraction) * 100.0,
    })
}

fn segment_left_percentage(jd_obs: f64, start_jd: f64, fraction_at_obs: f64, end_jd: f64) -> f64 {
    if jd_obs < start_jd {
        100.0
    } else if jd_obs >= end_jd {
        0.0
    } else {
        (1.0 - fraction_at_obs) * 100.0
    }
}

/// All yoga segments in effect between sunrise and the next sunrise.
///
/// The first entry is the yoga at sunrise; segments follow until one
/// completes at or after the next sunrise (that closing segment is
/// included).
pub fn yogas_for_day(pos: &SolarLunarPosition) -> Result<Vec<YogaEntry>, PanchangError> {
    let day_start = pos.sunrise_jd_ut();
    let day_end = day_start + 1.0;
    let mut entries = Vec::new();
    let mut t = day_start;
    let mut segment_start = f64::NEG_INFINITY;

    loop {
        let y = yoga_from_sum(sidereal_sum_at(t));
        let end_deg = y.number as f64 * YOGA_SEGMENT_DEG;
        let completes_at_jd =
            boundary(&sidereal_sum_at, end_deg, t, SCAN_STEP_DAYS, "yoga completion")?;
        let fraction_at_obs = yoga_from_sum(sidereal_sum_at(pos.jd_ut.max(t))).fraction;
        entries.push(YogaEntry {
            number: y.number,
            name: y.yoga.name(),
            completes_at_jd,
            left_percentage: segment_left_percentage(
                pos.jd_ut,
                segment_start,
                fraction_at_obs,
                completes_at_jd,
            ),
        });
        if completes_at_jd >= day_end || entries.len() >= 4 {
            break;
        }
        segment_start = completes_at_jd;
        t = completes_at_jd + TOL_DAYS * 10.0;
    }
    Ok(entries)
}

/// All karana segments in effect between sunrise and the next sunrise.
pub fn karanas_for_day(pos: &SolarLunarPosition) -> Result<Vec<KaranaEntry>, PanchangError> {
    let day_start = pos.sunrise_jd_ut();
    let day_end = day_start + 1.0;
    let mut entries = Vec::new();
    let mut t = day_start;
    let mut segment_start = f64::NEG_INFINITY;

    loop {
        let k = karana_from_elongation(elongation_at(t));
        let end_deg = (k.sequence_index + 1) as f64 * KARANA_SEGMENT_DEG;
        let completes_at_jd =
            boundary(&elongation_at, end_deg, t, SCAN_STEP_DAYS, "karana completion")?;
        let fraction_at_obs = karana_from_elongation(elongation_at(pos.jd_ut.max(t))).fraction;
        entries.push(KaranaEntry {
            number: k.number,
            name: k.name(),
            completes_at_jd,
            left_percentage: segment_left_percentage(
                pos.jd_ut,
                segment_start,
                fraction_at_obs,
                completes_at_jd,
            ),
        });
        if completes_at_jd >= day_end || entries.len() >= 6 {
            break;
        }
        segment_start = completes_at_jd;
        t = completes_at_jd + TOL_DAYS * 10.0;
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PanchangRequest;
    use crate::resolve::resolve;

    fn hyderabad_position() -> SolarLunarPosition {
        let req = PanchangRequest::new(2024, 4, 14, 6, 30, 0.0, 17.385, 78.4867, 5.5).unwrap();
        resolve(&req)
    }

    #[test]
    fn tithi_completes_in_future() {
        let pos = hyderabad_position();
        let tithi = tithi_at(&pos).unwrap();
        assert!((1..=30).contains(&tithi.number));
        assert!(tithi.completes_at_jd > pos.jd_ut);
        assert!(tithi.completes_at_jd < pos.jd_ut + 2.0);
        assert!((0.0..=100.0).contains(&tithi.left_percentage));
        // 2024-04-08 was a new moon; six days on, Shukla paksha.
        assert_eq!(tithi.paksha, "Shukla");
    }

    #[test]
    fn tithi_boundary_hits_segment_edge() {
        let pos = hyderabad_position();
        let tithi = tithi_at(&pos).unwrap();
        let end_deg = tithi.number as f64 * TITHI_SEGMENT_DEG;
        let err = normalize_to_pm180(elongation_at(tithi.completes_at_jd) - end_deg);
        assert!(err.abs() < 1e-3, "residual {err} deg");
    }

    #[test]
    fn nakshatra_brackets_observation() {
        let pos = hyderabad_position();
        let nak = nakshatra_at(&pos).unwrap();
        assert!((1..=27).contains(&nak.number));
        assert!(nak.starts_at_jd < pos.jd_ut);
        assert!(nak.ends_at_jd > pos.jd_ut);
        // One nakshatra lasts roughly a day.
        let span = nak.ends_at_jd - nak.starts_at_jd;
        assert!((0.8..1.4).contains(&span), "span {span} days");
    }

    #[test]
    fn yogas_cover_day() {
        let pos = hyderabad_position();
        let yogas = yogas_for_day(&pos).unwrap();
        assert!(!yogas.is_empty() && yogas.len() <= 3);
        // First yoga is the one in effect at sunrise.
        let at_sunrise = yoga_from_sum(sidereal_sum_at(pos.sunrise_jd_ut()));
        assert_eq!(yogas[0].number, at_sunrise.number);
        // Completion times strictly increase and close the day window.
        for pair in yogas.windows(2) {
            assert!(pair[0].completes_at_jd < pair[1].completes_at_jd);
        }
        assert!(yogas.last().unwrap().completes_at_jd >= pos.sunrise_jd_ut() + 1.0);
    }

    #[test]
    fn karanas_cover_day() {
        let pos = hyderabad_position();
        let karanas = karanas_for_day(&pos).unwrap();
        // Half-tithi segments: two to three per civil day.
        assert!(karanas.len() >= 2 && karanas.len() <= 4);
        for k in &karanas {
            assert!((1..=60).contains(&k.number));
            assert!((0.0..=100.0).contains(&k.left_percentage));
        }
        for pair in karanas.windows(2) {
            assert!(pair[0].completes_at_jd < pair[1].completes_at_jd);
        }
    }

    #[test]
    fn first_segment_left_percentage_is_partial() {
        // Observation is shortly after sunrise, inside the first segment,
        // so its remaining share is neither untouched nor exhausted.
        let pos = hyderabad_position();
        let yogas = yogas_for_day(&pos).unwrap();
        assert!(yogas[0].left_percentage > 0.0 && yogas[0].left_percentage < 100.0);
        // Later segments have not started yet.
        for y in &yogas[1..] {
            assert_eq!(y.left_percentage, 100.0);
        }
    }
}
