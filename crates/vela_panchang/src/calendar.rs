//! Amanta lunar month and vedic year reckoning.
//!
//! A month runs new moon to new moon and takes its name from the Sun's
//! sidereal rashi at the closing new moon. The year anchor is Chaitra
//! Pratipada: the new moon immediately preceding Mesha sankranti.

use vela_time::{LocalMoment, calendar_to_jd};
use vela_vedic::{
    Masa, masa_from_rashi_index, normalize_to_pm180, rashi_index_from_longitude,
    samvatsara_for_year,
};

use crate::error::PanchangError;
use crate::resolve::{elongation_at, sun_sidereal_at};
use crate::search_util::find_ascending_zero;

/// Saka era offset: Chaitra Pratipada of CE year Y begins Saka year Y - 78.
const SAKA_OFFSET: i32 = 78;
/// Vikram samvat (chaitradi) runs 135 years ahead of Saka.
const VIKRAM_OFFSET: i32 = 135;

const BISECT_ITERS: usize = 60;
const TOL_DAYS: f64 = 1e-6;

/// The amanta lunar month containing an observation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    pub masa: Masa,
    /// Intercalary month: no sankranti falls between its bracketing
    /// new moons.
    pub adhika: bool,
    /// Julian Date (UT) of the opening new moon.
    pub start_jd: f64,
    /// Julian Date (UT) of the closing new moon.
    pub end_jd: f64,
}

/// Vedic year identification for an observation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VedicYearInfo {
    pub saka_year: i32,
    pub vikram_year: i32,
    pub samvatsara_name: &'static str,
    /// 1-based position in the 60-name cycle.
    pub samvatsara_number: u8,
    /// Julian Date (UT) of Chaitra Pratipada of the governing year.
    pub chaitra_pratipada_jd: f64,
}

/// Next new moon at or after `jd_ut`.
pub(crate) fn next_new_moon(jd_ut: f64) -> Result<f64, PanchangError> {
    let g = |t: f64| normalize_to_pm180(elongation_at(t));
    // One synodic month is 29.5 days; a 1-day scan moves the elongation
    // about 12 degrees per step.
    find_ascending_zero(&g, jd_ut, 1.0, 35, BISECT_ITERS, TOL_DAYS)
        .ok_or(PanchangError::NoConvergence("next new moon"))
}

/// Most recent new moon at or before `jd_ut`.
pub(crate) fn prev_new_moon(jd_ut: f64) -> Result<f64, PanchangError> {
    let g = |t: f64| normalize_to_pm180(elongation_at(t));
    find_ascending_zero(&g, jd_ut, -1.0, 35, BISECT_ITERS, TOL_DAYS)
        .ok_or(PanchangError::NoConvergence("previous new moon"))
}

/// Mesha sankranti (sidereal Aries ingress) of a CE year.
pub(crate) fn mesha_sankranti(year: i32) -> Result<f64, PanchangError> {
    // The ingress falls in mid-April; start the scan a week early.
    let estimate = calendar_to_jd(year, 4, 7.0);
    let g = |t: f64| normalize_to_pm180(sun_sidereal_at(t));
    find_ascending_zero(&g, estimate, 0.5, 40, BISECT_ITERS, TOL_DAYS)
        .ok_or(PanchangError::NoConvergence("mesha sankranti"))
}

/// Identify the amanta masa containing a local civil moment.
pub fn masa_for_moment(moment: &LocalMoment) -> Result<MasaInfo, PanchangError> {
    let jd = moment.to_jd_ut();
    let start_jd = prev_new_moon(jd)?;
    let end_jd = next_new_moon(start_jd + 1.0)?;

    let rashi_at_start = rashi_index_from_longitude(sun_sidereal_at(start_jd));
    let rashi_at_end = rashi_index_from_longitude(sun_sidereal_at(end_jd));

    Ok(MasaInfo {
        masa: masa_from_rashi_index(rashi_at_end),
        adhika: rashi_at_start == rashi_at_end,
        start_jd,
        end_jd,
    })
}

/// Identify the vedic year containing a local civil moment.
///
/// The year boundary is Chaitra Pratipada of the moment's CE year; a
/// moment earlier in the civil year belongs to the previous vedic year.
pub fn vedic_year_for_moment(moment: &LocalMoment) -> Result<VedicYearInfo, PanchangError> {
    let jd = moment.to_jd_ut();
    let ingress = mesha_sankranti(moment.year)?;
    let mut chaitra_pratipada_jd = prev_new_moon(ingress)?;
    let mut anchor_year = moment.year;
    if jd < chaitra_pratipada_jd {
        anchor_year -= 1;
        let prior_ingress = mesha_sankranti(anchor_year)?;
        chaitra_pratipada_jd = prev_new_moon(prior_ingress)?;
    }

    let (samvatsara_name, samvatsara_number) = samvatsara_for_year(anchor_year);
    let saka_year = anchor_year - SAKA_OFFSET;
    Ok(VedicYearInfo {
        saka_year,
        vikram_year: saka_year + VIKRAM_OFFSET,
        samvatsara_name,
        samvatsara_number,
        chaitra_pratipada_jd,
    })
}
