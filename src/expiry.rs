//! Expiry dates for generated cards.
//!
//! A card expires at the end of its expiry month. Generated dates land
//! between next month and roughly five years out, never on or before the
//! current month.

use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A month/year expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    /// Month (1-12)
    month: u8,
    /// Four-digit year (e.g., 2030)
    year: u16,
}

impl ExpiryDate {
    /// Creates a new expiry date. Returns `None` if the month is not 1-12.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the date is in the past (the card is expired).
    pub fn is_expired(&self) -> bool {
        let (current_year, current_month) = current_year_month();
        self.year < current_year || (self.year == current_year && self.month < current_month)
    }

    /// Formats as `MM/YY`.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as `MM/YYYY`.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

impl Serialize for ExpiryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_short())
    }
}

/// Generates a random future expiry date.
pub fn random_expiry() -> ExpiryDate {
    random_expiry_with_rng(&mut rand::thread_rng())
}

/// Generates a random future expiry date using the provided RNG.
///
/// Year is the current year plus 0-4; a same-year draw is pushed past the
/// current month (December rolls into January of the next year).
pub fn random_expiry_with_rng<R: Rng>(rng: &mut R) -> ExpiryDate {
    let (current_year, current_month) = current_year_month();

    let mut year = current_year + rng.gen_range(0..5);
    let mut month: u8 = rng.gen_range(1..=12);

    if year == current_year && month <= current_month {
        if current_month == 12 {
            year += 1;
            month = 1;
        } else {
            month = current_month + 1;
        }
    }

    ExpiryDate { month, year }
}

/// Gets the current year and month from the system clock.
///
/// Approximate calculation (365-day years, 30-day months) — good enough
/// for picking and checking synthetic expiry dates.
fn current_year_month() -> (u16, u8) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let days = secs / 86400;
    let years = days / 365;
    let year = 1970 + years as u16;

    let day_of_year = days % 365;
    let month = (day_of_year / 30).min(11) as u8 + 1;

    (year, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn expiry_date_new_bounds() {
        assert!(ExpiryDate::new(1, 2030).is_some());
        assert!(ExpiryDate::new(12, 2030).is_some());
        assert!(ExpiryDate::new(0, 2030).is_none());
        assert!(ExpiryDate::new(13, 2030).is_none());
    }

    #[test]
    fn past_dates_are_expired() {
        assert!(ExpiryDate::new(1, 2020).unwrap().is_expired());
        assert!(!ExpiryDate::new(12, 2099).unwrap().is_expired());
    }

    #[test]
    fn formatting() {
        let expiry = ExpiryDate::new(3, 2030).unwrap();
        assert_eq!(expiry.format_short(), "03/30");
        assert_eq!(expiry.format_long(), "03/2030");
        assert_eq!(expiry.to_string(), "03/30");
    }

    #[test]
    fn serializes_as_short_string() {
        let expiry = ExpiryDate::new(7, 2031).unwrap();
        assert_eq!(serde_json::to_string(&expiry).unwrap(), "\"07/31\"");
    }

    #[test]
    fn random_expiry_is_never_expired() {
        let mut rng = StdRng::seed_from_u64(3);
        let (current_year, current_month) = current_year_month();
        for _ in 0..500 {
            let expiry = random_expiry_with_rng(&mut rng);
            assert!(!expiry.is_expired(), "generated expired date: {}", expiry);
            assert!((1..=12).contains(&expiry.month()));
            assert!(expiry.year() <= current_year + 5);
            if expiry.year() == current_year {
                assert!(expiry.month() > current_month);
            }
        }
    }
}
