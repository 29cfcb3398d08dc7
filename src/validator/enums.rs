use serde::Serialize;
use strum::Display;

/// Categorizes phone numbers based on their primary use.
///
/// Classification is a fixed mapping from the numbering-plan pattern tables;
/// a national number that matches none of a plan's patterns is `Unknown`.
#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineType {
    /// Wireless numbers assigned to mobile devices.
    #[strum(serialize = "Mobile")]
    Mobile,
    /// Traditional landline numbers tied to a geographic area.
    #[strum(serialize = "Fixed Line")]
    FixedLine,
    /// Used in plans (e.g. NANPA) where fixed-line and mobile numbers are
    /// indistinguishable by the number alone.
    #[strum(serialize = "Fixed Line or Mobile")]
    FixedLineOrMobile,
    /// Free for the caller; the recipient pays.
    #[strum(serialize = "Toll Free")]
    TollFree,
    /// Charged above normal rates.
    #[strum(serialize = "Premium Rate")]
    PremiumRate,
    /// Numbers routed over the internet rather than a carrier network.
    #[strum(serialize = "VoIP")]
    VoIP,
    /// Legacy paging services; no shipped plan currently assigns this.
    #[strum(serialize = "Pager")]
    Pager,
    /// No pattern of the plan matched, or the plan ships no patterns at all.
    #[default]
    #[strum(serialize = "Unknown")]
    Unknown,
}
