//! Multi-source phone number intelligence. An offline numbering-plan
//! validator (or, for free text, a fuzzy country matcher) always runs first;
//! optional, unreliable upstream lookups are merged in afterwards on request,
//! in a fixed precedence order, and the merged record carries a confidence
//! and risk score derived along the way.

pub mod i18n;
pub mod region;
pub mod resolver;
pub mod sources;
pub mod textmatch;
pub mod validator;
pub(crate) mod regexp_cache;

pub use resolver::{NumberQuery, ResolutionResult, ResolveError, Resolver};
pub use sources::{SourceError, SourceFragment, UpstreamSource};
pub use validator::{LineType, NumberValidator, ParsedNumber};

#[cfg(test)]
mod tests;
