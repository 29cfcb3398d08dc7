pub mod enums;
pub(crate) mod metadata;

pub use enums::LineType;

use log::{debug, trace};

use crate::i18n;
use crate::regexp_cache::PatternCache;
use metadata::NumberingPlan;

/// Sentinel carrier label for numbers whose series has no known owner.
pub const UNKNOWN_CARRIER: &str = "Unknown Carrier";

/// NSN length bounds applied to calling codes without a detailed plan.
const GENERIC_MIN_NSN_LEN: usize = 6;
const GENERIC_MAX_NSN_LEN: usize = 12;

/// Everything the offline grammar knows about one number.
///
/// `valid == false` implies every other field holds its default; the two
/// constructors are the only way a `ParsedNumber` is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedNumber {
    pub valid: bool,
    pub calling_code: u16,
    pub national_number: String,
    pub country: String,
    /// Coarse geographic label: a geo-series entry when one matches,
    /// otherwise the bare country name.
    pub region_label: String,
    pub carrier: String,
    pub line_type: LineType,
    pub international_format: String,
    pub national_format: String,
    pub timezones: Vec<&'static str>,
}

impl ParsedNumber {
    /// The normal "not a number" outcome. Not an error.
    pub fn invalid() -> Self {
        Self::default()
    }
}

/// Pure, synchronous validator over the compiled-in numbering-plan grammar.
pub struct NumberValidator {
    patterns: PatternCache,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self {
            patterns: PatternCache::new(),
        }
    }

    /// Parses `raw` against the numbering-plan grammar. Tolerates a missing
    /// leading `+` and `00` international prefixes; when the first pass does
    /// not yield a clean candidate, strips every non-digit character and
    /// retries once with a synthesized `+`. Never fails: unparseable input is
    /// an invalid `ParsedNumber`.
    pub fn validate(&self, raw: &str) -> ParsedNumber {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ParsedNumber::invalid();
        }

        if let Some(candidate) = normalize_candidate(trimmed) {
            if let Some(parsed) = self.parse_candidate(&candidate) {
                return parsed;
            }
        }

        // Second pass: synthesize a candidate from bare digits.
        match synthesize_candidate(trimmed) {
            Some(candidate) => {
                trace!("retrying {:?} as synthesized candidate {:?}", raw, candidate);
                self.parse_candidate(&candidate)
                    .unwrap_or_else(ParsedNumber::invalid)
            }
            None => ParsedNumber::invalid(),
        }
    }

    /// `candidate` is `+` followed by digits only.
    fn parse_candidate(&self, candidate: &str) -> Option<ParsedNumber> {
        let digits = candidate.strip_prefix('+')?;
        let (calling_code, nsn) = extract_calling_code(digits)?;
        let country = i18n::country_for_calling_code(calling_code)?;

        let plan = metadata::plan_for_calling_code(calling_code);
        let line_type = match plan {
            Some(plan) => {
                if nsn.len() < plan.min_nsn_len || nsn.len() > plan.max_nsn_len {
                    trace!("nsn {:?} out of length bounds for +{}", nsn, calling_code);
                    return None;
                }
                self.classify(plan, nsn)?
            }
            None => {
                // Known calling code without detailed patterns: length check only.
                if nsn.len() < GENERIC_MIN_NSN_LEN || nsn.len() > GENERIC_MAX_NSN_LEN {
                    return None;
                }
                LineType::Unknown
            }
        };

        let region_label = metadata::geo_label_for(digits)
            .unwrap_or(country.name)
            .to_string();
        let carrier = metadata::carrier_for(digits)
            .unwrap_or(UNKNOWN_CARRIER)
            .to_string();
        let (international_format, national_format) =
            self.format_nsn(plan, calling_code, nsn);

        debug!(
            "validated +{} {} as {} ({})",
            calling_code, nsn, country.name, line_type
        );

        Some(ParsedNumber {
            valid: true,
            calling_code,
            national_number: nsn.to_string(),
            country: country.name.to_string(),
            region_label,
            carrier,
            line_type,
            international_format,
            national_format,
            timezones: plan.map(|p| p.timezones.to_vec()).unwrap_or_default(),
        })
    }

    /// First full match in the plan's ordered pattern table decides the type;
    /// no match means the number is not part of the plan.
    fn classify(&self, plan: &'static NumberingPlan, nsn: &str) -> Option<LineType> {
        plan.type_patterns
            .iter()
            .find(|tp| self.patterns.full_match(tp.pattern, nsn))
            .map(|tp| tp.line_type)
    }

    fn format_nsn(
        &self,
        plan: Option<&'static NumberingPlan>,
        calling_code: u16,
        nsn: &str,
    ) -> (String, String) {
        if let Some(plan) = plan {
            for number_format in plan.formats {
                if !self.patterns.full_match(number_format.pattern, nsn) {
                    continue;
                }
                let regex = match self.patterns.get_regex(number_format.pattern) {
                    Ok(regex) => regex,
                    Err(_) => break,
                };
                let international = regex.replace(nsn, number_format.international);
                let national = regex.replace(nsn, number_format.national).into_owned();
                return (format!("+{} {}", calling_code, international), national);
            }
        }
        (format!("+{} {}", calling_code, nsn), nsn.to_string())
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips visual separators, folds a `00` international prefix into `+` and
/// prepends `+` to bare digit strings. Returns `None` when anything but
/// digits remains.
fn normalize_candidate(raw: &str) -> Option<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();

    let candidate = if let Some(rest) = compact.strip_prefix('+') {
        format!("+{}", rest)
    } else if let Some(rest) = compact.strip_prefix("00") {
        format!("+{}", rest)
    } else {
        format!("+{}", compact)
    };

    let digits = &candidate[1..];
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(candidate)
    } else {
        None
    }
}

/// Last-resort candidate: every digit in the input, `+`-prefixed.
fn synthesize_candidate(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("+{}", digits))
    }
}

/// Country calling codes are a prefix-free set, so trying 1 to 3 leading
/// digits finds at most one known code.
fn extract_calling_code(digits: &str) -> Option<(u16, &str)> {
    for len in 1..=digits.len().min(3) {
        if let Ok(code) = digits[..len].parse::<u16>() {
            if i18n::country_for_calling_code(code).is_some() {
                return Some((code, &digits[len..]));
            }
        }
    }
    None
}
