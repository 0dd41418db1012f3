//! Karana (half-tithi) classification.
//!
//! The synodic month divides into 60 karanas of 6 deg elongation each.
//! Four are fixed, appearing once per month: Kimstughna opens the month
//! (first half of Shukla Pratipada), Shakuni, Chatushpada, and Naga close
//! it. The seven movable karanas Bava..Vishti cycle through the remaining
//! 56 segments.

use crate::util::normalize_360;

/// Elongation span of one karana: 6 degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The seven movable karana names, in cycle order.
const MOVABLE_KARANAS: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti",
];

/// Name of a karana by its 0-based sequence index within the month (0-59).
pub fn karana_name(sequence_index: u8) -> &'static str {
    debug_assert!(sequence_index < 60);
    match sequence_index {
        0 => "Kimstughna",
        57 => "Shakuni",
        58 => "Chatushpada",
        59 => "Naga",
        i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
    }
}

/// Result of karana classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPos {
    /// 0-based sequence index within the synodic month (0-59).
    pub sequence_index: u8,
    /// 1-based number (sequence_index + 1).
    pub number: u8,
    /// Fraction of this karana already elapsed, [0, 1).
    pub fraction: f64,
}

impl KaranaPos {
    /// Traditional name of this karana.
    pub fn name(&self) -> &'static str {
        karana_name(self.sequence_index)
    }
}

/// Classify the karana from Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPos {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    let fraction = (elong - idx as f64 * KARANA_SEGMENT_DEG) / KARANA_SEGMENT_DEG;
    KaranaPos {
        sequence_index: idx,
        number: idx + 1,
        fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_opens_with_kimstughna() {
        let pos = karana_from_elongation(0.0);
        assert_eq!(pos.sequence_index, 0);
        assert_eq!(pos.name(), "Kimstughna");
    }

    #[test]
    fn second_half_of_pratipada_is_bava() {
        let pos = karana_from_elongation(6.5);
        assert_eq!(pos.sequence_index, 1);
        assert_eq!(pos.name(), "Bava");
    }

    #[test]
    fn movable_cycle_repeats() {
        // Index 8 = (8-1) % 7 = 0 -> Bava again
        assert_eq!(karana_name(8), "Bava");
        assert_eq!(karana_name(7), "Vishti");
        assert_eq!(karana_name(56), "Vishti");
    }

    #[test]
    fn month_closes_with_fixed_karanas() {
        assert_eq!(karana_name(57), "Shakuni");
        assert_eq!(karana_name(58), "Chatushpada");
        assert_eq!(karana_name(59), "Naga");
        let pos = karana_from_elongation(359.0);
        assert_eq!(pos.name(), "Naga");
    }

    #[test]
    fn sixty_segments() {
        let mut deg = 0.0;
        let mut last = None;
        let mut count = 0;
        while deg < 360.0 {
            let idx = karana_from_elongation(deg).sequence_index;
            if last != Some(idx) {
                count += 1;
                last = Some(idx);
            }
            deg += 0.5;
        }
        assert_eq!(count, 60);
    }
}
