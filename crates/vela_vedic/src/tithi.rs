//! Tithi (lunar day) classification.
//!
//! The synodic month divides into 30 tithis of 12 deg Moon-Sun elongation
//! each: 15 in the waxing Shukla paksha (ending at Purnima) and 15 in the
//! waning Krishna paksha (ending at Amavasya).

use crate::util::normalize_360;

/// Elongation span of one tithi: 12 degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight: waxing or waning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing fortnight (tithi 1-15, new moon to full moon).
    Shukla,
    /// Waning fortnight (tithi 16-30, full moon to new moon).
    Krishna,
}

impl Paksha {
    /// Name used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names within a paksha. The 15th is Purnima (Shukla) or
/// Amavasya (Krishna); the first 14 repeat in both pakshas.
const TITHI_NAMES_IN_PAKSHA: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Name of a tithi by its 1-based number (1-30).
pub fn tithi_name(number: u8) -> &'static str {
    debug_assert!((1..=30).contains(&number));
    match number {
        15 => "Purnima",
        30 => "Amavasya",
        n => TITHI_NAMES_IN_PAKSHA[((n - 1) % 15) as usize],
    }
}

/// Result of tithi classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPos {
    /// 1-based tithi number (1-30).
    pub number: u8,
    /// Paksha (Shukla for 1-15, Krishna for 16-30).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub number_in_paksha: u8,
    /// Fraction of this tithi already elapsed, [0, 1).
    pub fraction: f64,
}

/// Classify the tithi from Moon-Sun elongation in degrees.
///
/// `number = floor(elongation / 12) + 1`.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPos {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let number = idx + 1;
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let fraction = (elong - idx as f64 * TITHI_SEGMENT_DEG) / TITHI_SEGMENT_DEG;
    TithiPos {
        number,
        paksha,
        number_in_paksha: ((number - 1) % 15) + 1,
        fraction,
    }
}
