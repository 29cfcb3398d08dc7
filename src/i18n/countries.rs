//! Reference country dataset: ISO alpha-2 code, display name, country calling
//! code and common alternate names. Shared read-only by the validator (calling
//! code resolution) and the text matcher (name index); built into the binary.

/// A single entry of the reference country dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub calling_code: u16,
    pub aliases: &'static [&'static str],
}

impl Country {
    /// Regional-indicator flag emoji for the alpha-2 code.
    pub fn flag(&self) -> String {
        self.alpha2
            .chars()
            .filter_map(|c| char::from_u32(c as u32 + 0x1F1A5))
            .collect()
    }
}

/// Country calling codes form a prefix-free set, so for every code there is
/// exactly one entry here; regions sharing a calling code (NANPA, +7) list the
/// main country first and `country_for_calling_code` returns that one.
static COUNTRIES: &[Country] = &[
    Country { name: "United States", alpha2: "US", calling_code: 1, aliases: &["usa", "united states of america", "america"] },
    Country { name: "Canada", alpha2: "CA", calling_code: 1, aliases: &[] },
    Country { name: "Russia", alpha2: "RU", calling_code: 7, aliases: &["russian federation"] },
    Country { name: "Kazakhstan", alpha2: "KZ", calling_code: 7, aliases: &[] },
    Country { name: "Egypt", alpha2: "EG", calling_code: 20, aliases: &[] },
    Country { name: "South Africa", alpha2: "ZA", calling_code: 27, aliases: &[] },
    Country { name: "Greece", alpha2: "GR", calling_code: 30, aliases: &[] },
    Country { name: "Netherlands", alpha2: "NL", calling_code: 31, aliases: &["holland"] },
    Country { name: "Belgium", alpha2: "BE", calling_code: 32, aliases: &[] },
    Country { name: "France", alpha2: "FR", calling_code: 33, aliases: &[] },
    Country { name: "Spain", alpha2: "ES", calling_code: 34, aliases: &[] },
    Country { name: "Hungary", alpha2: "HU", calling_code: 36, aliases: &[] },
    Country { name: "Italy", alpha2: "IT", calling_code: 39, aliases: &[] },
    Country { name: "Romania", alpha2: "RO", calling_code: 40, aliases: &[] },
    Country { name: "Switzerland", alpha2: "CH", calling_code: 41, aliases: &[] },
    Country { name: "Austria", alpha2: "AT", calling_code: 43, aliases: &[] },
    Country { name: "United Kingdom", alpha2: "GB", calling_code: 44, aliases: &["uk", "great britain", "britain", "england"] },
    Country { name: "Denmark", alpha2: "DK", calling_code: 45, aliases: &[] },
    Country { name: "Sweden", alpha2: "SE", calling_code: 46, aliases: &[] },
    Country { name: "Norway", alpha2: "NO", calling_code: 47, aliases: &[] },
    Country { name: "Poland", alpha2: "PL", calling_code: 48, aliases: &[] },
    Country { name: "Germany", alpha2: "DE", calling_code: 49, aliases: &["deutschland"] },
    Country { name: "Peru", alpha2: "PE", calling_code: 51, aliases: &[] },
    Country { name: "Mexico", alpha2: "MX", calling_code: 52, aliases: &[] },
    Country { name: "Argentina", alpha2: "AR", calling_code: 54, aliases: &[] },
    Country { name: "Brazil", alpha2: "BR", calling_code: 55, aliases: &["brasil"] },
    Country { name: "Chile", alpha2: "CL", calling_code: 56, aliases: &[] },
    Country { name: "Colombia", alpha2: "CO", calling_code: 57, aliases: &[] },
    Country { name: "Venezuela", alpha2: "VE", calling_code: 58, aliases: &[] },
    Country { name: "Malaysia", alpha2: "MY", calling_code: 60, aliases: &[] },
    Country { name: "Australia", alpha2: "AU", calling_code: 61, aliases: &[] },
    Country { name: "Indonesia", alpha2: "ID", calling_code: 62, aliases: &[] },
    Country { name: "Philippines", alpha2: "PH", calling_code: 63, aliases: &[] },
    Country { name: "New Zealand", alpha2: "NZ", calling_code: 64, aliases: &[] },
    Country { name: "Singapore", alpha2: "SG", calling_code: 65, aliases: &[] },
    Country { name: "Thailand", alpha2: "TH", calling_code: 66, aliases: &[] },
    Country { name: "Japan", alpha2: "JP", calling_code: 81, aliases: &[] },
    Country { name: "South Korea", alpha2: "KR", calling_code: 82, aliases: &["korea", "republic of korea"] },
    Country { name: "Vietnam", alpha2: "VN", calling_code: 84, aliases: &["viet nam"] },
    Country { name: "China", alpha2: "CN", calling_code: 86, aliases: &[] },
    Country { name: "Turkey", alpha2: "TR", calling_code: 90, aliases: &["turkiye"] },
    Country { name: "India", alpha2: "IN", calling_code: 91, aliases: &["bharat"] },
    Country { name: "Pakistan", alpha2: "PK", calling_code: 92, aliases: &[] },
    Country { name: "Afghanistan", alpha2: "AF", calling_code: 93, aliases: &[] },
    Country { name: "Sri Lanka", alpha2: "LK", calling_code: 94, aliases: &[] },
    Country { name: "Myanmar", alpha2: "MM", calling_code: 95, aliases: &["burma"] },
    Country { name: "Iran", alpha2: "IR", calling_code: 98, aliases: &[] },
    Country { name: "Morocco", alpha2: "MA", calling_code: 212, aliases: &[] },
    Country { name: "Algeria", alpha2: "DZ", calling_code: 213, aliases: &[] },
    Country { name: "Tunisia", alpha2: "TN", calling_code: 216, aliases: &[] },
    Country { name: "Nigeria", alpha2: "NG", calling_code: 234, aliases: &[] },
    Country { name: "Kenya", alpha2: "KE", calling_code: 254, aliases: &[] },
    Country { name: "Tanzania", alpha2: "TZ", calling_code: 255, aliases: &[] },
    Country { name: "Uganda", alpha2: "UG", calling_code: 256, aliases: &[] },
    Country { name: "Portugal", alpha2: "PT", calling_code: 351, aliases: &[] },
    Country { name: "Luxembourg", alpha2: "LU", calling_code: 352, aliases: &[] },
    Country { name: "Ireland", alpha2: "IE", calling_code: 353, aliases: &[] },
    Country { name: "Finland", alpha2: "FI", calling_code: 358, aliases: &[] },
    Country { name: "Ukraine", alpha2: "UA", calling_code: 380, aliases: &[] },
    Country { name: "Czech Republic", alpha2: "CZ", calling_code: 420, aliases: &["czechia"] },
    Country { name: "Slovakia", alpha2: "SK", calling_code: 421, aliases: &[] },
    Country { name: "Bangladesh", alpha2: "BD", calling_code: 880, aliases: &[] },
    Country { name: "Taiwan", alpha2: "TW", calling_code: 886, aliases: &[] },
    Country { name: "Lebanon", alpha2: "LB", calling_code: 961, aliases: &[] },
    Country { name: "Jordan", alpha2: "JO", calling_code: 962, aliases: &[] },
    Country { name: "Iraq", alpha2: "IQ", calling_code: 964, aliases: &[] },
    Country { name: "Kuwait", alpha2: "KW", calling_code: 965, aliases: &[] },
    Country { name: "Saudi Arabia", alpha2: "SA", calling_code: 966, aliases: &["ksa"] },
    Country { name: "United Arab Emirates", alpha2: "AE", calling_code: 971, aliases: &["uae", "emirates"] },
    Country { name: "Israel", alpha2: "IL", calling_code: 972, aliases: &[] },
    Country { name: "Qatar", alpha2: "QA", calling_code: 974, aliases: &[] },
    Country { name: "Nepal", alpha2: "NP", calling_code: 977, aliases: &[] },
];

pub fn all_countries() -> &'static [Country] {
    COUNTRIES
}

/// Main country for a calling code (first dataset entry carrying it).
pub fn country_for_calling_code(calling_code: u16) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.calling_code == calling_code)
}

pub fn country_for_alpha2(alpha2: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.alpha2 == alpha2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_country_wins_shared_codes() {
        assert_eq!(country_for_calling_code(1).unwrap().name, "United States");
        assert_eq!(country_for_calling_code(7).unwrap().name, "Russia");
    }

    #[test]
    fn calling_codes_are_prefix_free() {
        for a in all_countries() {
            for b in all_countries() {
                if a.calling_code == b.calling_code {
                    continue;
                }
                let short = a.calling_code.min(b.calling_code).to_string();
                let long = a.calling_code.max(b.calling_code).to_string();
                assert!(
                    !long.starts_with(&short),
                    "{} is a prefix of {}",
                    short,
                    long
                );
            }
        }
    }

    #[test]
    fn flag_is_two_regional_indicators() {
        let india = country_for_alpha2("IN").unwrap();
        assert_eq!(india.flag(), "\u{1F1EE}\u{1F1F3}");
    }
}
