//! Passport with visit-stamp counters.
//!
//! Passport numbers come from a [`PassportNumberSequence`] passed in by the
//! caller rather than from global state, so two sequences never interfere
//! and tests get deterministic numbers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, NaiveDate};

use crate::common::{Error, Result};

/// Hands out passport numbers in increasing order.
///
/// # Example
/// ```
/// use pagesim::passport::PassportNumberSequence;
///
/// let numbers = PassportNumberSequence::new();
/// assert_eq!(numbers.next_number(), 0);
/// assert_eq!(numbers.next_number(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PassportNumberSequence {
    next: AtomicU64,
}

impl PassportNumberSequence {
    /// A sequence starting at zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next number.
    pub fn next_number(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| Error::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// A passport holder's details plus the countries they have been stamped into.
#[derive(Debug, Clone)]
pub struct Passport {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    /// Country of birth. Stamps for this country are not recorded.
    pub country: String,
    pub exp_date: NaiveDate,
    number: u64,
    /// Visit counts per country.
    visits: HashMap<String, u32>,
    /// Countries in first-stamp order.
    visit_order: Vec<String>,
}

impl Passport {
    /// Issue a passport, taking its number from `numbers`.
    ///
    /// Dates are ISO `YYYY-MM-DD` strings.
    pub fn new(
        numbers: &PassportNumberSequence,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dob: &str,
        country: impl Into<String>,
        exp_date: &str,
    ) -> Result<Self> {
        let dob = parse_iso_date(dob)?;
        let exp_date = parse_iso_date(exp_date)?;
        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            dob,
            country: country.into(),
            exp_date,
            number: numbers.next_number(),
            visits: HashMap::new(),
            visit_order: Vec::new(),
        })
    }

    /// Whether the passport is still valid on `today` (expiry day excluded).
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        today < self.exp_date
    }

    /// Whether the passport is valid today, by the local clock.
    pub fn is_valid(&self) -> bool {
        self.is_valid_on(Local::now().date_naive())
    }

    pub fn summary(&self) -> String {
        self.summary_on(Local::now().date_naive())
    }

    /// Human-readable summary, with validity judged on `today`.
    pub fn summary_on(&self, today: NaiveDate) -> String {
        let validity = if self.is_valid_on(today) {
            "valid"
        } else {
            "invalid"
        };
        format!(
            "This passport belongs to {} {}, born on {} in {}. It is {}.",
            self.first_name, self.last_name, self.dob, self.country, validity
        )
    }

    /// True if every field matches and the passport is currently valid.
    pub fn check_data(
        &self,
        first_name: &str,
        last_name: &str,
        dob: &str,
        country: &str,
    ) -> Result<bool> {
        self.check_data_on(first_name, last_name, dob, country, Local::now().date_naive())
    }

    pub fn check_data_on(
        &self,
        first_name: &str,
        last_name: &str,
        dob: &str,
        country: &str,
        today: NaiveDate,
    ) -> Result<bool> {
        let dob = parse_iso_date(dob)?;
        Ok(self.first_name == first_name
            && self.last_name == last_name
            && self.dob == dob
            && self.country == country
            && self.is_valid_on(today))
    }

    /// Record a visit. Visits to the home country are ignored.
    pub fn stamp(&mut self, country: &str) {
        if country == self.country {
            return;
        }
        match self.visits.get_mut(country) {
            Some(count) => *count += 1,
            None => {
                self.visits.insert(country.to_string(), 1);
                self.visit_order.push(country.to_string());
            }
        }
    }

    /// Stamped countries, in the order they were first stamped.
    pub fn countries_visited(&self) -> Vec<String> {
        self.visit_order.clone()
    }

    pub fn times_visited(&self, country: &str) -> u32 {
        self.visits.get(country).copied().unwrap_or(0)
    }

    /// Sum over countries of the squared visit count.
    pub fn sum_square_visits(&self) -> u64 {
        self.visits
            .values()
            .map(|&count| u64::from(count) * u64::from(count))
            .sum()
    }

    #[inline]
    pub fn passport_number(&self) -> u64 {
        self.number
    }
}
