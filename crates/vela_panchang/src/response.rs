//! Response formatter.
//!
//! Assembles the computed elements into the externally documented JSON
//! shape. Field names here are frozen by the published API, including
//! the `left_precentage` spelling on the tithi block.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use vela_time::{LocalMoment, calendar_to_jd, hours_to_hms};
use vela_vedic::{ayana_from_sidereal_longitude, ritu_from_masa_number, vaar_from_jd};

use crate::calendar::{masa_for_moment, vedic_year_for_moment};
use crate::elements::{karanas_for_day, nakshatra_at, tithi_at, yogas_for_day};
use crate::error::PanchangError;
use crate::request::PanchangRequest;
use crate::resolve::{SolarLunarPosition, resolve};
use crate::windows::{DayWindows, Window, derive_windows};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayBlock {
    pub weekday_number: u8,
    pub weekday_name: &'static str,
    pub vedic_weekday_number: u8,
    pub vedic_weekday_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarMonthBlock {
    pub lunar_month_number: u8,
    pub lunar_month_name: &'static str,
    pub lunar_month_full_name: String,
    pub adhika: bool,
    pub nija: bool,
    pub kshaya: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RituBlock {
    pub number: u8,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiBlock {
    pub number: u8,
    pub name: &'static str,
    pub paksha: &'static str,
    /// Local `YYYY-MM-DD HH:MM:SS` of tithi completion.
    pub completes_at: String,
    /// Misspelling preserved from the published shape.
    #[serde(rename = "left_precentage")]
    pub left_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraBlock {
    pub number: u8,
    pub name: &'static str,
    pub starts_at: String,
    pub ends_at: String,
    pub left_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaBlockEntry {
    pub number: u8,
    pub name: &'static str,
    pub completion: String,
    pub yoga_left_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KaranaBlockEntry {
    pub number: u8,
    pub name: &'static str,
    pub completion: String,
    pub karana_left_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearBlock {
    pub status: &'static str,
    pub timestamp: String,
    pub saka_salivahana_number: i32,
    pub saka_salivahana_year_name: &'static str,
    pub vikram_chaitradi_number: i32,
    pub vikram_chaitradi_year_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowBlock {
    /// Local `HH:MM:SS`.
    pub start: String,
    pub end: String,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayDurationBlock {
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationsBlock {
    pub brahma_muhurta: WindowBlock,
    pub abhijit_muhurta: WindowBlock,
    pub rahu_kaal: WindowBlock,
    pub yamaganda: WindowBlock,
    pub gulika_kaal: WindowBlock,
    pub day_duration: DayDurationBlock,
    pub auspicious_times: Vec<&'static str>,
    pub inauspicious_times: Vec<&'static str>,
}

/// The complete externally documented response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangResponse {
    pub sun_rise: String,
    pub sun_set: String,
    pub weekday: WeekdayBlock,
    pub lunar_month: LunarMonthBlock,
    pub ritu: RituBlock,
    pub aayanam: &'static str,
    pub tithi: TithiBlock,
    pub nakshatra: NakshatraBlock,
    pub yoga: BTreeMap<String, YogaBlockEntry>,
    pub karana: BTreeMap<String, KaranaBlockEntry>,
    pub year: YearBlock,
    pub calculations: CalculationsBlock,
}

fn local_timestamp(jd_ut: f64, utc_offset_hours: f64) -> String {
    LocalMoment::from_jd_ut(jd_ut, utc_offset_hours).to_string()
}

fn window_block(w: &Window) -> WindowBlock {
    WindowBlock {
        start: hours_to_hms(w.start_h),
        end: hours_to_hms(w.end_h),
        description: w.description,
    }
}

fn day_duration_block(duration_h: f64) -> DayDurationBlock {
    let total_min = (duration_h * 60.0).round() as u32;
    DayDurationBlock {
        hours: total_min / 60,
        minutes: total_min % 60,
    }
}

fn calculations_block(windows: &DayWindows, duration_h: f64) -> CalculationsBlock {
    CalculationsBlock {
        brahma_muhurta: window_block(&windows.brahma_muhurta),
        abhijit_muhurta: window_block(&windows.abhijit_muhurta),
        rahu_kaal: window_block(&windows.rahu_kaal),
        yamaganda: window_block(&windows.yamaganda),
        gulika_kaal: window_block(&windows.gulika_kaal),
        day_duration: day_duration_block(duration_h),
        auspicious_times: windows.auspicious().map(|w| w.name).to_vec(),
        inauspicious_times: windows.inauspicious().map(|w| w.name).to_vec(),
    }
}

/// Run the full pipeline for one request.
pub fn compute_panchang(request: &PanchangRequest) -> Result<PanchangResponse, PanchangError> {
    let pos: SolarLunarPosition = resolve(request);
    debug!(
        sunrise_h = pos.cycle.sunrise_h,
        sunset_h = pos.cycle.sunset_h,
        day_kind = ?pos.cycle.day_kind,
        "resolved sun cycle"
    );

    // Civil weekday of the local calendar date. The date is taken as-is,
    // without the UTC-offset shift: local noon at an offset beyond +-12
    // falls in a neighboring UT day, but the civil weekday does not move.
    let moment = &request.moment;
    let vaar = vaar_from_jd(calendar_to_jd(
        moment.year,
        moment.month,
        moment.day as f64 + 0.5,
    ));
    // The vedic day begins at sunrise; before it, yesterday's vaar rules.
    let vedic_vaar = if pos.jd_ut < pos.sunrise_jd_ut() {
        vaar.previous()
    } else {
        vaar
    };

    let tithi = tithi_at(&pos)?;
    let nakshatra = nakshatra_at(&pos)?;
    let yogas = yogas_for_day(&pos)?;
    let karanas = karanas_for_day(&pos)?;
    debug!(
        tithi = tithi.number,
        nakshatra = nakshatra.number,
        yogas = yogas.len(),
        karanas = karanas.len(),
        "classified day elements"
    );

    let masa = masa_for_moment(&request.moment)?;
    let year = vedic_year_for_moment(&request.moment)?;
    let ritu = ritu_from_masa_number(masa.masa.number());
    let ayana = ayana_from_sidereal_longitude(pos.sun_sidereal_deg());
    let windows = derive_windows(&pos, vaar.number());

    let tz = request.moment.utc_offset_hours;
    let masa_name = masa.masa.name();
    let full_name = if masa.adhika {
        format!("Adhika {masa_name}")
    } else {
        masa_name.to_string()
    };

    Ok(PanchangResponse {
        sun_rise: hours_to_hms(pos.cycle.sunrise_h),
        sun_set: hours_to_hms(pos.cycle.sunset_h),
        weekday: WeekdayBlock {
            weekday_number: vaar.number(),
            weekday_name: vaar.english_name(),
            vedic_weekday_number: vedic_vaar.number(),
            vedic_weekday_name: vedic_vaar.vedic_name(),
        },
        lunar_month: LunarMonthBlock {
            lunar_month_number: masa.masa.number(),
            lunar_month_name: masa_name,
            lunar_month_full_name: full_name,
            adhika: masa.adhika,
            nija: !masa.adhika,
            kshaya: false,
        },
        ritu: RituBlock {
            number: ritu.number(),
            name: ritu.name(),
        },
        aayanam: ayana.name(),
        tithi: TithiBlock {
            number: tithi.number,
            name: tithi.name,
            paksha: tithi.paksha,
            completes_at: local_timestamp(tithi.completes_at_jd, tz),
            left_percentage: tithi.left_percentage,
        },
        nakshatra: NakshatraBlock {
            number: nakshatra.number,
            name: nakshatra.name,
            starts_at: local_timestamp(nakshatra.starts_at_jd, tz),
            ends_at: local_timestamp(nakshatra.ends_at_jd, tz),
            left_percentage: nakshatra.left_percentage,
        },
        yoga: yogas
            .iter()
            .enumerate()
            .map(|(i, y)| {
                let entry = YogaBlockEntry {
                    number: y.number,
                    name: y.name,
                    completion: local_timestamp(y.completes_at_jd, tz),
                    yoga_left_percentage: y.left_percentage,
                };
                ((i + 1).to_string(), entry)
            })
            .collect(),
        karana: karanas
            .iter()
            .enumerate()
            .map(|(i, k)| {
                let entry = KaranaBlockEntry {
                    number: k.number,
                    name: k.name,
                    completion: local_timestamp(k.completes_at_jd, tz),
                    karana_left_percentage: k.left_percentage,
                };
                ((i + 1).to_string(), entry)
            })
            .collect(),
        year: YearBlock {
            status: "success",
            timestamp: request.moment.to_string(),
            saka_salivahana_number: year.saka_year,
            saka_salivahana_year_name: year.samvatsara_name,
            vikram_chaitradi_number: year.vikram_year,
            vikram_chaitradi_year_name: year.samvatsara_name,
        },
        calculations: calculations_block(&windows, pos.cycle.day_duration_h()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hyderabad_response() -> PanchangResponse {
        let req = PanchangRequest::new(2024, 4, 14, 6, 30, 0.0, 17.385, 78.4867, 5.5).unwrap();
        compute_panchang(&req).unwrap()
    }

    #[test]
    fn sunday_weekday_block() {
        let r = hyderabad_response();
        assert_eq!(r.weekday.weekday_number, 1);
        assert_eq!(r.weekday.weekday_name, "Sunday");
        // 06:30 is after sunrise, so the vedic day has already turned.
        assert_eq!(r.weekday.vedic_weekday_number, 1);
        assert_eq!(r.weekday.vedic_weekday_name, "Ravivara");
    }

    #[test]
    fn weekday_follows_civil_date_beyond_east_twelve() {
        // Tonga runs at +13; local noon there is still the previous UT
        // day, but 2024-04-14 is a Sunday in every civil calendar.
        let req = PanchangRequest::new(2024, 4, 14, 12, 0, 0.0, -21.14, 180.0, 13.0).unwrap();
        let r = compute_panchang(&req).unwrap();
        assert_eq!(r.weekday.weekday_number, 1);
        assert_eq!(r.weekday.weekday_name, "Sunday");
    }

    #[test]
    fn weekday_follows_civil_date_at_west_twelve() {
        // Baker Island, -12: local noon lands in the next UT day.
        let req = PanchangRequest::new(2024, 4, 14, 12, 0, 0.0, 0.19, -176.5, -12.0).unwrap();
        let r = compute_panchang(&req).unwrap();
        assert_eq!(r.weekday.weekday_number, 1);
        assert_eq!(r.weekday.weekday_name, "Sunday");
    }

    #[test]
    fn before_sunrise_keeps_previous_vedic_day() {
        let req = PanchangRequest::new(2024, 4, 14, 4, 0, 0.0, 17.385, 78.4867, 5.5).unwrap();
        let r = compute_panchang(&req).unwrap();
        assert_eq!(r.weekday.weekday_number, 1);
        assert_eq!(r.weekday.vedic_weekday_number, 7);
        assert_eq!(r.weekday.vedic_weekday_name, "Shanivara");
    }

    #[test]
    fn chaitra_month_block() {
        let r = hyderabad_response();
        assert_eq!(r.lunar_month.lunar_month_number, 1);
        assert_eq!(r.lunar_month.lunar_month_name, "Chaitra");
        assert_eq!(r.lunar_month.lunar_month_full_name, "Chaitra");
        assert!(r.lunar_month.nija);
        assert!(!r.lunar_month.adhika);
        assert!(!r.lunar_month.kshaya);
        assert_eq!(r.ritu.number, 1);
    }

    #[test]
    fn year_block_anchors() {
        let r = hyderabad_response();
        assert_eq!(r.year.status, "success");
        assert_eq!(r.year.saka_salivahana_number, 1946);
        assert_eq!(r.year.vikram_chaitradi_number, 2081);
        assert_eq!(r.year.saka_salivahana_year_name, "Krodhi");
        assert_eq!(r.year.timestamp, "2024-04-14 06:30:00");
    }

    #[test]
    fn collections_keyed_from_one() {
        let r = hyderabad_response();
        assert!(r.yoga.contains_key("1"));
        assert!(r.karana.contains_key("1"));
        assert!(!r.yoga.contains_key("0"));
        for key in r.karana.keys() {
            let _: u32 = key.parse().unwrap();
        }
    }

    #[test]
    fn serialized_field_names() {
        let r = hyderabad_response();
        let json = serde_json::to_value(&r).unwrap();
        // Typo frozen on the tithi block only.
        assert!(json["tithi"].get("left_precentage").is_some());
        assert!(json["tithi"].get("left_percentage").is_none());
        assert!(json["nakshatra"].get("left_percentage").is_some());
        assert!(json["yoga"]["1"].get("yoga_left_percentage").is_some());
        assert!(json["karana"]["1"].get("karana_left_percentage").is_some());
        assert_eq!(json["aayanam"], "Uttarayanam");
        assert!(json["calculations"]["rahu_kaal"].get("description").is_some());
    }

    #[test]
    fn sun_rise_before_sun_set() {
        let r = hyderabad_response();
        assert!(r.sun_rise < r.sun_set, "{} vs {}", r.sun_rise, r.sun_set);
        assert_eq!(r.sun_rise.len(), 8);
    }

    #[test]
    fn rahu_kaal_sunday_before_sunset() {
        // Sunday slot 7: the last daylight eighth, ending at sunset.
        let r = hyderabad_response();
        assert_eq!(r.calculations.rahu_kaal.end, r.sun_set);
        assert!(r.calculations.rahu_kaal.start < r.calculations.rahu_kaal.end);
    }

    #[test]
    fn day_duration_sums_to_daylight() {
        let r = hyderabad_response();
        let d = &r.calculations.day_duration;
        // Mid-April Hyderabad daylight is a bit over 12 hours.
        assert_eq!(d.hours, 12);
        assert!(d.minutes < 60);
    }

    #[test]
    fn category_lists() {
        let r = hyderabad_response();
        assert_eq!(
            r.calculations.auspicious_times,
            vec!["Brahma Muhurta", "Abhijit Muhurta"]
        );
        assert_eq!(
            r.calculations.inauspicious_times,
            vec!["Rahu Kaal", "Yamaganda", "Gulika Kaal"]
        );
    }

    #[test]
    fn idempotent() {
        let a = hyderabad_response();
        let b = hyderabad_response();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
