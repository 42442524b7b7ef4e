//! Author model and related types

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full author row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub birth_place: String,
}

impl Author {
    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years on the given date.
    pub fn age_on(&self, on: NaiveDate) -> i32 {
        age_between(self.birth_date, on)
    }
}

/// Whole-year difference between `birth` and `on`, decremented by one when
/// the (month, day) of `on` precedes the (month, day) of the birth date.
pub fn age_between(birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Author with their junction-row tally, for the prolific report
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthorWithBookCount {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub book_count: i64,
}

impl AuthorWithBookCount {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// New author to insert
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub birth_place: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_decrements_before_birthday() {
        assert_eq!(age_between(date(2000, 6, 15), date(2024, 6, 14)), 23);
    }

    #[test]
    fn age_full_on_birthday() {
        assert_eq!(age_between(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn age_full_after_birthday() {
        assert_eq!(age_between(date(2000, 6, 15), date(2024, 12, 1)), 24);
    }

    #[test]
    fn age_compares_month_before_day() {
        // Same day-of-month but an earlier month still counts as "before".
        assert_eq!(age_between(date(2000, 6, 15), date(2024, 5, 15)), 23);
    }
}
