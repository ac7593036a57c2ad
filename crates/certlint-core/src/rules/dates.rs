//! Effective dates of the requirement documents the catalog cites.
//!
//! A rule only binds certificates whose reference date (`not_before`)
//! is on or after the date of the document that introduced the
//! requirement.

use chrono::{DateTime, TimeZone, Utc};

/// Publication of RFC 2459 (January 1999).
pub fn rfc2459() -> DateTime<Utc> {
    midnight_utc(1999, 1, 1)
}

/// Publication of RFC 3280 (April 2002).
pub fn rfc3280() -> DateTime<Utc> {
    midnight_utc(2002, 4, 1)
}

/// Publication of RFC 5280 (May 2008).
pub fn rfc5280() -> DateTime<Utc> {
    midnight_utc(2008, 5, 1)
}

/// CA/Browser Forum Baseline Requirements effective date.
pub fn cabf_baseline_requirements() -> DateTime<Utc> {
    midnight_utc(2012, 7, 1)
}

// Inputs are fixed literals; `Utc` always has a single midnight for a
// valid calendar day.
fn midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_dates_are_chronological() {
        assert!(rfc2459() < rfc3280());
        assert!(rfc3280() < rfc5280());
        assert!(rfc5280() < cabf_baseline_requirements());
    }

    #[test]
    fn dates_are_utc_midnights() {
        let expected = Utc.with_ymd_and_hms(2012, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(cabf_baseline_requirements(), expected);
    }
}
