//! Synthesis options resolved from the schema file.

use crate::generators::timestamp::parse_timestamp;
use chrono::{DateTime, Utc};
use mock_core::{SchemaError, SchemaOptions};

/// Default nested-model depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Unix timestamp of 2000-01-01T00:00:00Z.
const DEFAULT_DATE_BASE_SECS: i64 = 946_684_800;

/// Instant that `Date` fields are offset from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBase {
    /// A fixed instant; `Date` values are reproducible
    Fixed(DateTime<Utc>),
    /// The wall-clock time at synthesis; `Date` values change per run
    Now,
}

impl DateBase {
    /// Parse `now`, an RFC 3339 timestamp or a `YYYY-MM-DD` date.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("now") {
            return Some(Self::Now);
        }
        parse_timestamp(s).map(Self::Fixed)
    }

    /// The base instant to offset from.
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Self::Fixed(instant) => *instant,
            Self::Now => Utc::now(),
        }
    }
}

impl Default for DateBase {
    fn default() -> Self {
        Self::Fixed(DateTime::from_timestamp(DEFAULT_DATE_BASE_SECS, 0).unwrap_or_default())
    }
}

/// Options controlling default synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Base instant for `Date` fields
    pub date_base: DateBase,
    /// Nested models deeper than this degrade to default construction
    pub max_depth: usize,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            date_base: DateBase::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SynthesisOptions {
    /// Resolve options written in a schema file.
    pub fn from_schema(options: &SchemaOptions) -> Result<Self, SchemaError> {
        let date_base = match &options.date_base {
            Some(raw) => DateBase::parse(raw).ok_or_else(|| SchemaError::InvalidOption {
                option: "date_base".to_string(),
                reason: format!("expected 'now', RFC 3339 or YYYY-MM-DD, got '{raw}'"),
            })?,
            None => DateBase::default(),
        };

        Ok(Self {
            date_base,
            max_depth: options.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SynthesisOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(
            options.date_base.instant().to_rfc3339(),
            "2000-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_from_schema() {
        let options = SynthesisOptions::from_schema(&SchemaOptions {
            date_base: Some("now".to_string()),
            max_depth: Some(2),
        })
        .unwrap();
        assert_eq!(options.date_base, DateBase::Now);
        assert_eq!(options.max_depth, 2);

        let options = SynthesisOptions::from_schema(&SchemaOptions {
            date_base: Some("2021-05-01".to_string()),
            max_depth: None,
        })
        .unwrap();
        assert_eq!(
            options.date_base,
            DateBase::Fixed(parse_timestamp("2021-05-01T00:00:00Z").unwrap())
        );
    }

    #[test]
    fn test_invalid_date_base() {
        let result = SynthesisOptions::from_schema(&SchemaOptions {
            date_base: Some("last tuesday".to_string()),
            max_depth: None,
        });
        assert!(matches!(
            result,
            Err(SchemaError::InvalidOption { option, .. }) if option == "date_base"
        ));
    }
}
