use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

// Month lengths for a fixed non-leap reference year; February is always 28 days
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, stored as a 0-based index (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Month = Month(0);
    pub const JULY: Month = Month(6);
    pub const DECEMBER: Month = Month(11);

    /// Every month of the year in calendar order.
    pub const ALL: [Month; 12] = [
        Month(0),
        Month(1),
        Month(2),
        Month(3),
        Month(4),
        Month(5),
        Month(6),
        Month(7),
        Month(8),
        Month(9),
        Month(10),
        Month(11),
    ];

    pub fn new(index: usize) -> Result<Self> {
        if index < 12 {
            Ok(Month(index as u8))
        } else {
            Err(EngineError::MonthOutOfRange(index))
        }
    }

    /// Builds a month from its 1-based calendar number (January = 1).
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1..=12 => Ok(Month(number - 1)),
            _ => Err(EngineError::MonthOutOfRange(number as usize)),
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn number(self) -> u8 {
        self.0 + 1
    }

    pub fn days(self) -> u32 {
        DAYS_IN_MONTH[self.index()]
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    // True when the month falls inside [start, end], wrapping over the year end (e.g. Dec..Feb)
    pub(crate) fn within(self, start: Month, end: Month) -> bool {
        if start <= end {
            start <= self && self <= end
        } else {
            self >= start || self <= end
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self> {
        Month::new(index as usize)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_index() {
        assert!(Month::new(11).is_ok());
        assert!(matches!(Month::new(12), Err(EngineError::MonthOutOfRange(12))));
        assert!(Month::from_number(0).is_err());
        assert_eq!(Month::from_number(7).unwrap(), Month::JULY);
    }

    #[test]
    fn february_is_never_a_leap_month() {
        assert_eq!(Month::new(1).unwrap().days(), 28);
        assert_eq!(DAYS_IN_MONTH.iter().sum::<u32>(), 365);
    }

    #[test]
    fn wrapping_window() {
        let dec = Month::DECEMBER;
        let feb = Month::new(1).unwrap();
        assert!(Month::JANUARY.within(dec, feb));
        assert!(dec.within(dec, feb));
        assert!(!Month::JULY.within(dec, feb));
        assert!(Month::JULY.within(Month::new(5).unwrap(), Month::new(7).unwrap()));
    }
}
