//! Moon's geocentric ecliptic longitude, truncated series.
//!
//! Principal periodic terms of the lunar theory (Meeus, Astronomical
//! Algorithms ch. 47). The eleven largest longitude terms give ~0.05 deg
//! accuracy, i.e. a few minutes of time on tithi boundaries. Good enough
//! for panchang output; not for eclipse work.

use crate::solar::normalize_360;

/// Moon's geocentric tropical ecliptic longitude in degrees [0, 360).
pub fn moon_tropical_longitude_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - 2_451_545.0) / 36_525.0;

    // Mean elements, degrees
    let lp = 218.316_447_7 + 481_267.881_234_21 * t; // mean longitude
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians(); // mean elongation
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians(); // Sun mean anomaly
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians(); // Moon mean anomaly
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians(); // argument of latitude

    let correction = 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin();

    normalize_360(lp + correction)
}
