//! Masa (lunar month), Ritu (season), and Ayana (solstice half-year).
//!
//! Amanta convention: a masa runs new moon to new moon and is named after
//! the sidereal rashi the Sun occupies at the closing new moon (Mesha ->
//! Chaitra). Two masas make one ritu; the ayana follows the Sun's
//! sidereal longitude.

use crate::util::normalize_360;

/// The 12 amanta lunar months, Chaitra first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (index 0 = Chaitra).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Sanskrit name of the masa.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 1-based month number (Chaitra = 1).
    pub const fn number(self) -> u8 {
        match self {
            Self::Chaitra => 1,
            Self::Vaishakha => 2,
            Self::Jyeshtha => 3,
            Self::Ashadha => 4,
            Self::Shravana => 5,
            Self::Bhadrapada => 6,
            Self::Ashvina => 7,
            Self::Kartika => 8,
            Self::Margashirsha => 9,
            Self::Pausha => 10,
            Self::Magha => 11,
            Self::Phalguna => 12,
        }
    }
}

/// 0-based sidereal rashi index (Mesha = 0) from sidereal longitude.
pub fn rashi_index_from_longitude(sidereal_lon_deg: f64) -> u8 {
    ((normalize_360(sidereal_lon_deg) / 30.0).floor() as u8).min(11)
}

/// Masa named after the Sun's rashi at the closing new moon (Mesha -> Chaitra).
pub fn masa_from_rashi_index(rashi_index: u8) -> Masa {
    ALL_MASAS[(rashi_index % 12) as usize]
}

/// The six ritus (seasons), two masas each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ritu {
    Vasanta,
    Grishma,
    Varsha,
    Sharad,
    Hemanta,
    Shishira,
}

impl Ritu {
    /// Sanskrit name of the ritu.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemanta => "Hemanta",
            Self::Shishira => "Shishira",
        }
    }

    /// 1-based ritu number (Vasanta = 1).
    pub const fn number(self) -> u8 {
        match self {
            Self::Vasanta => 1,
            Self::Grishma => 2,
            Self::Varsha => 3,
            Self::Sharad => 4,
            Self::Hemanta => 5,
            Self::Shishira => 6,
        }
    }
}

/// Ritu from a 1-based masa number: Chaitra/Vaishakha -> Vasanta, etc.
pub fn ritu_from_masa_number(masa_number: u8) -> Ritu {
    const RITUS: [Ritu; 6] = [
        Ritu::Vasanta,
        Ritu::Grishma,
        Ritu::Varsha,
        Ritu::Sharad,
        Ritu::Hemanta,
        Ritu::Shishira,
    ];
    RITUS[(((masa_number.clamp(1, 12) - 1) / 2) % 6) as usize]
}

/// Solstice half-year, named as in the panchang output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ayana {
    /// Sun's northward run: sidereal longitude in [270, 360) U [0, 90).
    Uttarayanam,
    /// Sun's southward run: sidereal longitude in [90, 270).
    Dakshinayanam,
}

impl Ayana {
    /// Name used in panchang output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayanam => "Uttarayanam",
            Self::Dakshinayanam => "Dakshinayanam",
        }
    }
}

/// Ayana from the Sun's sidereal longitude in degrees.
pub fn ayana_from_sidereal_longitude(sidereal_lon_deg: f64) -> Ayana {
    let lon = normalize_360(sidereal_lon_deg);
    if (90.0..270.0).contains(&lon) {
        Ayana::Dakshinayanam
    } else {
        Ayana::Uttarayanam
    }
}
