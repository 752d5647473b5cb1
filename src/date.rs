//! Calendar dates and Julian days.
//!
//! Every computation in this crate is a function of a single [`JulianDay`].
//! A [`Date`] is the usual way of producing one.

use core::fmt;

use hifitime::{Epoch, Unit};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// A continuous count of days, used as the time coordinate of every query.
///
/// # Example
/// ```
/// use orrery::{Date, JulianDay};
///
/// let date = Date::new(2000, 1, 1).unwrap();
/// assert_eq!(JulianDay::from(date), JulianDay(2451544.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JulianDay(pub f64);

impl JulianDay {
    /// The J2000.0 epoch, 2000-01-01 12:00 TT.
    ///
    /// Mean longitudes are given at this epoch.
    pub const J2000: JulianDay = JulianDay(2451545.0);

    /// Days elapsed since [J2000][Self::J2000]. Negative before the epoch.
    pub fn days_since_j2000(self) -> f64 {
        self.0 - Self::J2000.0
    }
}

impl From<f64> for JulianDay {
    fn from(jd: f64) -> Self {
        JulianDay(jd)
    }
}

impl From<Date> for JulianDay {
    fn from(date: Date) -> Self {
        JulianDay(date.julian_day())
    }
}

impl From<&Date> for JulianDay {
    fn from(date: &Date) -> Self {
        JulianDay(date.julian_day())
    }
}

/// A day in the Gregorian calendar, between years 1 and 9999.
///
/// Construct one with [`Date::new`], which rejects days that do not exist,
/// or from a [`hifitime::Epoch`] with [`Date::from_epoch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "DateParts", into = "DateParts")
)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct DateParts {
    year: i32,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<DateParts> for Date {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Date::new(parts.year, parts.month, parts.day)
    }
}

#[cfg(feature = "serde")]
impl From<Date> for DateParts {
    fn from(date: Date) -> Self {
        DateParts {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

/// The largest number of days a single step can move a date by and still
/// land between [`Date::MIN_YEAR`] and [`Date::MAX_YEAR`].
const MAX_DAY_STEP: u64 = (Date::MAX_YEAR - Date::MIN_YEAR + 1) as u64 * 366;

impl Date {
    /// The earliest supported year.
    pub const MIN_YEAR: i32 = 1;

    /// The latest supported year.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a date, checking that it exists in the Gregorian calendar.
    ///
    /// # Example
    /// ```
    /// use orrery::Date;
    ///
    /// assert!(Date::new(2024, 2, 29).is_ok());
    /// assert!(Date::new(2023, 2, 29).is_err());
    /// assert!(Date::new(2023, 13, 1).is_err());
    /// ```
    pub fn new(year: i32, month: u8, day: u8) -> Result<Date, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }

        Epoch::maybe_from_gregorian_utc(year, month, day, 12, 0, 0, 0)
            .map_err(|_| DateError::InvalidDay { year, month, day })?;

        Ok(Date { year, month, day })
    }

    /// Gets the UTC calendar date of an epoch.
    ///
    /// # Errors
    /// Returns [`DateError::YearOutOfRange`] for epochs before
    /// [`MIN_YEAR`][Self::MIN_YEAR] or after [`MAX_YEAR`][Self::MAX_YEAR].
    ///
    /// # Example
    /// ```
    /// use hifitime::Epoch;
    /// use orrery::Date;
    ///
    /// let epoch = Epoch::from_gregorian_utc_hms(2024, 7, 4, 23, 59, 59);
    /// assert_eq!(Date::from_epoch(epoch), Date::new(2024, 7, 4));
    /// ```
    pub fn from_epoch(epoch: Epoch) -> Result<Date, DateError> {
        let (year, month, day, ..) = epoch.to_gregorian_utc();
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }

        Ok(Date { year, month, day })
    }

    /// Noon UTC on this date.
    ///
    /// Noon keeps day steps on the same calendar day whatever leap seconds
    /// lie between two dates.
    pub fn epoch(&self) -> Epoch {
        Epoch::from_gregorian_utc_at_noon(self.year, self.month, self.day)
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month, from 1 to 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month, starting at 1.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Gets the Julian day at 00:00 of this date.
    ///
    /// Uses the closed-form approximation
    /// `367Y - ⌊7(Y + ⌊(M+9)/12⌋)/4⌋ + ⌊275M/9⌋ + D + 1721013.5`,
    /// which ignores the century leap-year rules and is therefore only exact
    /// from March 1900 to February 2100.
    pub fn julian_day(&self) -> f64 {
        let y = i64::from(self.year);
        let m = i64::from(self.month);
        let d = i64::from(self.day);

        let days = 367 * y - (7 * (y + (m + 9).div_euclid(12))).div_euclid(4)
            + (275 * m).div_euclid(9)
            + d;

        days as f64 + 1721013.5
    }

    /// The day of the year, 1 for January 1st.
    pub fn ordinal(&self) -> u16 {
        let new_year = Epoch::from_gregorian_utc_at_noon(self.year, 1, 1);
        let elapsed = (self.epoch() - new_year).to_unit(Unit::Day);

        elapsed.round() as u16 + 1
    }

    /// Moves the date by a number of days, which may be negative.
    ///
    /// Returns `None` if the result is outside
    /// [`MIN_YEAR`][Self::MIN_YEAR]`..=`[`MAX_YEAR`][Self::MAX_YEAR].
    pub fn checked_add_days(self, days: i64) -> Option<Date> {
        if days.unsigned_abs() > MAX_DAY_STEP {
            return None;
        }

        Date::from_epoch(self.epoch() + Unit::Day * days).ok()
    }

    /// The next day.
    pub fn succ(self) -> Option<Date> {
        self.checked_add_days(1)
    }

    /// Iterates over `count` consecutive days, starting with this one.
    ///
    /// # Example
    /// ```
    /// use orrery::Date;
    ///
    /// let start = Date::new(2023, 12, 30).unwrap();
    /// let days: Vec<_> = start.days(3).collect();
    ///
    /// assert_eq!(days[2], Date::new(2024, 1, 1).unwrap());
    /// ```
    pub fn days(self, count: usize) -> impl Iterator<Item = Date> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let current = next?;
            next = current.succ();
            Some(current)
        })
        .take(count)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
