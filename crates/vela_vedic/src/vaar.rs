//! Vaar (weekday) determination.
//!
//! The panchang uses a 1-based weekday with Sunday = 1; all three kaal
//! lookup tables in [`crate::kaal`] are indexed with `number - 1`.

/// The seven vaars, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All seven vaars in order (index 0 = Ravivara/Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    /// 1-based weekday number, Sunday = 1.
    pub const fn number(self) -> u8 {
        match self {
            Self::Ravivara => 1,
            Self::Somavara => 2,
            Self::Mangalavara => 3,
            Self::Budhavara => 4,
            Self::Guruvara => 5,
            Self::Shukravara => 6,
            Self::Shanivara => 7,
        }
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// Sanskrit vaar name.
    pub const fn vedic_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    /// Previous vaar in the week (Sunday wraps to Saturday).
    pub const fn previous(self) -> Vaar {
        match self {
            Self::Ravivara => Self::Shanivara,
            Self::Somavara => Self::Ravivara,
            Self::Mangalavara => Self::Somavara,
            Self::Budhavara => Self::Mangalavara,
            Self::Guruvara => Self::Budhavara,
            Self::Shukravara => Self::Guruvara,
            Self::Shanivara => Self::Shukravara,
        }
    }
}

/// Determine the vaar from any Julian Date within the civil day.
///
/// `floor(JD + 1.5) mod 7` with 0 = Sunday; the JD must already be
/// expressed in the local day's frame (e.g. local noon as a day fraction).
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let dow = ((jd + 1.5).floor() as i64).rem_euclid(7) as usize;
    ALL_VAARS[dow]
}
