//! Regional refinement for numbering plans with sub-national series
//! structure. The only plan shipped is India (calling code 91), whose 4-digit
//! mobile series map onto administrative telecom circles. The table is fixed,
//! versioned with the crate, and read-only after startup.

use log::trace;

/// Calling code of the only plan with a shipped series table.
const INDIA_CALLING_CODE: u16 = 91;

/// Label returned when no finer region can be derived.
pub const ENTIRE_COUNTRY: &str = "Entire Country";

/// Series prefixes are fixed-width (4 digits) and disjoint by construction,
/// so the first match is the only match. Anyone extending this table must
/// keep the keys disjoint.
static INDIAN_SERIES: &[(&str, &str)] = &[
    // Rajasthan
    ("8949", "Rajasthan"),
    ("9001", "Rajasthan"),
    ("9413", "Rajasthan"),
    ("9414", "Rajasthan"),
    ("9460", "Rajasthan"),
    ("9461", "Rajasthan"),
    ("9462", "Rajasthan"),
    ("9660", "Rajasthan"),
    ("9772", "Rajasthan"),
    ("9828", "Rajasthan"),
    ("9829", "Rajasthan"),
    // Delhi
    ("9810", "Delhi"),
    ("9811", "Delhi"),
    ("9818", "Delhi"),
    ("9871", "Delhi"),
    ("9873", "Delhi"),
    ("9899", "Delhi"),
    // Mumbai
    ("9820", "Mumbai"),
    ("9821", "Mumbai"),
    ("9833", "Mumbai"),
    ("9867", "Mumbai"),
    // Maharashtra
    ("9422", "Maharashtra"),
    ("9423", "Maharashtra"),
    ("9822", "Maharashtra"),
    ("9850", "Maharashtra"),
    ("9890", "Maharashtra"),
    // UP East
    ("9415", "UP East"),
    ("9450", "UP East"),
    ("9451", "UP East"),
    ("9452", "UP East"),
    ("9453", "UP East"),
    ("9454", "UP East"),
    ("9455", "UP East"),
    // UP West
    ("9411", "UP West"),
    ("9412", "UP West"),
    ("9837", "UP West"),
    ("9897", "UP West"),
    // Andhra Pradesh / Telangana
    ("9154", "Andhra Pradesh"),
    ("9440", "Andhra Pradesh"),
    ("9441", "Andhra Pradesh"),
    ("9490", "Andhra Pradesh"),
    ("9491", "Andhra Pradesh"),
    ("9492", "Andhra Pradesh"),
    ("9493", "Andhra Pradesh"),
    ("9494", "Andhra Pradesh"),
    // Tamil Nadu
    ("9442", "Tamil Nadu"),
    ("9443", "Tamil Nadu"),
    ("9486", "Tamil Nadu"),
    ("9487", "Tamil Nadu"),
    ("9488", "Tamil Nadu"),
    ("9489", "Tamil Nadu"),
    // Karnataka
    ("9448", "Karnataka"),
    ("9449", "Karnataka"),
    ("9480", "Karnataka"),
    ("9481", "Karnataka"),
    ("9482", "Karnataka"),
    ("9483", "Karnataka"),
    // Gujarat
    ("9426", "Gujarat"),
    ("9427", "Gujarat"),
    ("9428", "Gujarat"),
    ("9429", "Gujarat"),
    ("9824", "Gujarat"),
    ("9825", "Gujarat"),
    ("9879", "Gujarat"),
    // Punjab
    ("9417", "Punjab"),
    ("9463", "Punjab"),
    ("9464", "Punjab"),
    ("9465", "Punjab"),
    ("9814", "Punjab"),
    ("9815", "Punjab"),
    ("9872", "Punjab"),
    ("9876", "Punjab"),
    ("9878", "Punjab"),
];

/// Refines a coarse geographic label using the series table.
///
/// A label already finer than the bare country name is kept as is; the
/// geocoder got there first. Otherwise, for plans with a series table, the
/// fixed-width series prefix of the national number decides the region. A
/// miss, a too-short number, or a plan without a table falls back to
/// [`ENTIRE_COUNTRY`].
pub fn refine(calling_code: u16, national_number: &str, coarse_label: &str) -> String {
    let country_name = crate::i18n::country_for_calling_code(calling_code)
        .map(|c| c.name)
        .unwrap_or("");

    if !coarse_label.is_empty() && coarse_label != country_name {
        return coarse_label.to_string();
    }

    if calling_code == INDIA_CALLING_CODE {
        if let Some(circle) = circle_for_series(national_number) {
            trace!("refined {} to circle {}", national_number, circle);
            return circle.to_string();
        }
    }

    ENTIRE_COUNTRY.to_string()
}

/// Accepts a bare national number or one still carrying the `91` country
/// code (12 digits total).
fn circle_for_series(national_number: &str) -> Option<&'static str> {
    let digits = national_number.trim().trim_start_matches('+');
    let local = if digits.len() == 12 && digits.starts_with("91") {
        &digits[2..]
    } else {
        digits
    };
    if local.len() < 4 {
        return None;
    }
    let series = &local[..4];
    INDIAN_SERIES
        .iter()
        .find(|(prefix, _)| *prefix == series)
        .map(|(_, circle)| *circle)
}
