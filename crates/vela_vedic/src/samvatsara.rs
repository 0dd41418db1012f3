//! Samvatsara (60-year cycle) names.
//!
//! The cycle runs continuously; the anchor here is CE 1987 = Prabhava
//! (order 1), applied to the calendar year in which the Vedic year began.

/// The 60 samvatsara names in cycle order (index 0 = Prabhava).
pub const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajothpatti",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhaatu",
    "Eeshvara",
    "Bahudhanya",
    "Pramaathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Taarana",
    "Paarthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Paraabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramaadhi",
    "Aananda",
    "Raakshasa",
    "Naala",
    "Pingala",
    "Kaalayukti",
    "Siddharthi",
    "Raudri",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgaari",
    "Raktaakshi",
    "Krodhana",
    "Akshaya",
];

/// Anchor: CE 1987 = Prabhava (order 1).
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// Samvatsara for the CE year in which the Vedic year began.
///
/// Returns `(name, order)` with order 1-based (1..=60).
pub fn samvatsara_for_year(ce_year: i32) -> (&'static str, u8) {
    let offset = (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as usize;
    (SAMVATSARA_NAMES[offset], offset as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_prabhava() {
        assert_eq!(samvatsara_for_year(1987), ("Prabhava", 1));
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(samvatsara_for_year(2047), ("Prabhava", 1));
        assert_eq!(samvatsara_for_year(1986), ("Akshaya", 60));
    }

    #[test]
    fn year_2024_is_krodhi() {
        let (name, order) = samvatsara_for_year(2024);
        assert_eq!(name, "Krodhi");
        assert_eq!(order, 38);
    }

    #[test]
    fn all_names_distinct() {
        for i in 0..60 {
            for j in (i + 1)..60 {
                assert_ne!(SAMVATSARA_NAMES[i], SAMVATSARA_NAMES[j]);
            }
        }
    }
}
