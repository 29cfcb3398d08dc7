//! Compiled-in numbering-plan metadata. Detailed plans carry pattern tables
//! for line-type classification and formatting; any calling code present in
//! the country dataset but absent here is validated by length bounds only.
//!
//! Patterns are written over the national significant number (NSN) and are
//! full-matched through the shared [`PatternCache`](crate::regexp_cache).
//! Geo and carrier series tables key on the full E.164 digit string
//! (calling code + NSN) and resolve by longest prefix; coverage is sample
//! data shipped with the crate, not an authoritative registry.

use super::enums::LineType;

/// Renders an NSN that full-matches `pattern` into display formats.
#[derive(Debug, Clone, Copy)]
pub struct NumberFormat {
    pub pattern: &'static str,
    /// Replacement for the part after `+<calling code> `.
    pub international: &'static str,
    /// Replacement for the in-country dialing format (national prefix baked in).
    pub national: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TypePattern {
    pub line_type: LineType,
    pub pattern: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NumberingPlan {
    pub calling_code: u16,
    pub alpha2: &'static str,
    pub min_nsn_len: usize,
    pub max_nsn_len: usize,
    /// Ordered; the first full match decides the line type.
    pub type_patterns: &'static [TypePattern],
    /// Ordered; the first pattern full-matching the NSN formats it.
    pub formats: &'static [NumberFormat],
    pub timezones: &'static [&'static str],
}

static PLANS: &[NumberingPlan] = &[
    // NANPA. Fixed and mobile ranges are not separable by prefix.
    NumberingPlan {
        calling_code: 1,
        alpha2: "US",
        min_nsn_len: 10,
        max_nsn_len: 10,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}" },
            TypePattern { line_type: LineType::PremiumRate, pattern: r"900[2-9]\d{6}" },
            TypePattern { line_type: LineType::FixedLineOrMobile, pattern: r"[2-9]\d{2}[2-9]\d{6}" },
        ],
        formats: &[NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            international: "$1 $2 $3",
            national: "($1) $2-$3",
        }],
        timezones: &[
            "America/New_York",
            "America/Chicago",
            "America/Denver",
            "America/Los_Angeles",
        ],
    },
    NumberingPlan {
        calling_code: 7,
        alpha2: "RU",
        min_nsn_len: 10,
        max_nsn_len: 10,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"800\d{7}" },
            TypePattern { line_type: LineType::Mobile, pattern: r"9\d{9}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[3-8]\d{9}" },
        ],
        formats: &[NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{2})(\d{2})",
            international: "$1 $2-$3-$4",
            national: "8 ($1) $2-$3-$4",
        }],
        timezones: &["Europe/Moscow", "Asia/Yekaterinburg", "Asia/Vladivostok"],
    },
    NumberingPlan {
        calling_code: 33,
        alpha2: "FR",
        min_nsn_len: 9,
        max_nsn_len: 9,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"80[0-5]\d{6}" },
            TypePattern { line_type: LineType::PremiumRate, pattern: r"89[1-9]\d{6}" },
            TypePattern { line_type: LineType::VoIP, pattern: r"9\d{8}" },
            TypePattern { line_type: LineType::Mobile, pattern: r"[67]\d{8}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[1-5]\d{8}" },
        ],
        formats: &[NumberFormat {
            pattern: r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})",
            international: "$1 $2 $3 $4 $5",
            national: "0$1 $2 $3 $4 $5",
        }],
        timezones: &["Europe/Paris"],
    },
    NumberingPlan {
        calling_code: 44,
        alpha2: "GB",
        min_nsn_len: 9,
        max_nsn_len: 10,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"80(?:0\d{6}|8\d{7})" },
            TypePattern { line_type: LineType::PremiumRate, pattern: r"9[018]\d{8}" },
            TypePattern { line_type: LineType::VoIP, pattern: r"56\d{8}" },
            TypePattern { line_type: LineType::Mobile, pattern: r"7[1-9]\d{8}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[12]\d{8,9}" },
        ],
        formats: &[
            // London and other 2x area codes.
            NumberFormat {
                pattern: r"(2\d)(\d{4})(\d{4})",
                international: "$1 $2 $3",
                national: "0$1 $2 $3",
            },
            NumberFormat {
                pattern: r"(\d{4})(\d{6})",
                international: "$1 $2",
                national: "0$1 $2",
            },
        ],
        timezones: &["Europe/London"],
    },
    NumberingPlan {
        calling_code: 49,
        alpha2: "DE",
        min_nsn_len: 7,
        max_nsn_len: 11,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"800\d{7,9}" },
            TypePattern { line_type: LineType::PremiumRate, pattern: r"900\d{7}" },
            TypePattern { line_type: LineType::Mobile, pattern: r"1(?:5\d{9}|6\d{7,8}|7\d{7,8})" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[2-9]\d{6,10}" },
        ],
        formats: &[],
        timezones: &["Europe/Berlin"],
    },
    NumberingPlan {
        calling_code: 55,
        alpha2: "BR",
        min_nsn_len: 10,
        max_nsn_len: 11,
        type_patterns: &[
            TypePattern { line_type: LineType::Mobile, pattern: r"[1-9]{2}9\d{8}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[1-9]{2}[2-5]\d{7}" },
        ],
        formats: &[
            NumberFormat {
                pattern: r"(\d{2})(\d{5})(\d{4})",
                international: "$1 $2 $3",
                national: "($1) $2-$3",
            },
            NumberFormat {
                pattern: r"(\d{2})(\d{4})(\d{4})",
                international: "$1 $2 $3",
                national: "($1) $2-$3",
            },
        ],
        timezones: &["America/Sao_Paulo", "America/Manaus"],
    },
    NumberingPlan {
        calling_code: 61,
        alpha2: "AU",
        min_nsn_len: 9,
        max_nsn_len: 10,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"180(?:0\d{6}|\d{4})" },
            TypePattern { line_type: LineType::Mobile, pattern: r"4\d{8}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[2378]\d{8}" },
        ],
        formats: &[NumberFormat {
            pattern: r"(\d)(\d{4})(\d{4})",
            international: "$1 $2 $3",
            national: "0$1 $2 $3",
        }],
        timezones: &["Australia/Sydney", "Australia/Perth"],
    },
    NumberingPlan {
        calling_code: 81,
        alpha2: "JP",
        min_nsn_len: 9,
        max_nsn_len: 10,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"120\d{6}" },
            TypePattern { line_type: LineType::VoIP, pattern: r"50\d{8}" },
            TypePattern { line_type: LineType::Mobile, pattern: r"[789]0\d{8}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[1-6]\d{8}" },
        ],
        formats: &[NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})",
            international: "$1 $2 $3",
            national: "0$1-$2-$3",
        }],
        timezones: &["Asia/Tokyo"],
    },
    NumberingPlan {
        calling_code: 86,
        alpha2: "CN",
        min_nsn_len: 9,
        max_nsn_len: 11,
        type_patterns: &[
            TypePattern { line_type: LineType::Mobile, pattern: r"1[3-9]\d{9}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[2-9]\d{8,10}" },
        ],
        formats: &[NumberFormat {
            pattern: r"(\d{3})(\d{4})(\d{4})",
            international: "$1 $2 $3",
            national: "$1 $2 $3",
        }],
        timezones: &["Asia/Shanghai"],
    },
    NumberingPlan {
        calling_code: 91,
        alpha2: "IN",
        min_nsn_len: 10,
        max_nsn_len: 11,
        type_patterns: &[
            TypePattern { line_type: LineType::TollFree, pattern: r"1[68]00\d{6,7}" },
            TypePattern { line_type: LineType::Mobile, pattern: r"[6-9]\d{9}" },
            TypePattern { line_type: LineType::FixedLine, pattern: r"[1-5]\d{9}" },
        ],
        formats: &[NumberFormat {
            pattern: r"(\d{5})(\d{5})",
            international: "$1 $2",
            national: "0$1 $2",
        }],
        timezones: &["Asia/Kolkata"],
    },
];

/// Coarse geographic labels finer than the country name, keyed by E.164
/// digit prefix (calling code included), resolved by longest prefix.
static GEO_PREFIXES: &[(&str, &str)] = &[
    ("1212", "New York, NY"),
    ("1305", "Miami, FL"),
    ("1312", "Chicago, IL"),
    ("1415", "San Francisco, CA"),
    ("1650", "Palo Alto, CA"),
    ("331", "Paris"),
    ("4420", "London"),
    ("612", "Sydney"),
    ("7495", "Moscow"),
    ("8610", "Beijing"),
    ("81345", "Tokyo"),
];

/// Carrier series ownership, keyed like [`GEO_PREFIXES`]. Mobile-heavy plans
/// map 4-digit series; NANPA entries are area-code level approximations.
static CARRIER_PREFIXES: &[(&str, &str)] = &[
    ("1212", "Verizon"),
    ("1415", "AT&T"),
    ("1650", "Verizon"),
    ("4477", "O2 UK"),
    ("4479", "Vodafone UK"),
    ("917012", "Jio"),
    ("919001", "Idea"),
    ("919154", "Airtel"),
    ("919414", "Vodafone Idea"),
    ("919810", "Airtel"),
    ("919811", "Airtel"),
    ("919818", "Airtel"),
    ("919820", "Vodafone Idea"),
    ("919821", "Vodafone Idea"),
    ("919871", "Airtel"),
    ("919899", "Vodafone Idea"),
];

pub fn plan_for_calling_code(calling_code: u16) -> Option<&'static NumberingPlan> {
    PLANS.iter().find(|p| p.calling_code == calling_code)
}

fn longest_prefix(table: &'static [(&str, &str)], e164_digits: &str) -> Option<&'static str> {
    table
        .iter()
        .filter(|(prefix, _)| e164_digits.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, value)| *value)
}

pub fn geo_label_for(e164_digits: &str) -> Option<&'static str> {
    longest_prefix(GEO_PREFIXES, e164_digits)
}

pub fn carrier_for(e164_digits: &str) -> Option<&'static str> {
    longest_prefix(CARRIER_PREFIXES, e164_digits)
}
