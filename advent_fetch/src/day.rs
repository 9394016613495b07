use std::fmt;

use crate::{Error, Result};

/// Puzzle day, always within `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 25;

    pub fn new(day: u8) -> Result<Self> {
        if (Self::FIRST..=Self::LAST).contains(&day) {
            Ok(Self(day))
        } else {
            Err(Error::InvalidDay(day))
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Output file name: the zero-padded day with a `.txt` extension.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{:02}.txt", self.0)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::FIRST..=Self::LAST).map(Self)
    }
}

impl TryFrom<u8> for Day {
    type Error = Error;

    fn try_from(day: u8) -> Result<Self> {
        Self::new(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert_eq!(Day::all().count(), 25);
        assert!(Day::new(1).is_ok());
        assert!(Day::new(25).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(Day::new(0), Err(Error::InvalidDay(0))));
        assert!(matches!(Day::try_from(26), Err(Error::InvalidDay(26))));
    }

    #[test]
    fn file_name_is_zero_padded() {
        let day = Day::new(3).unwrap();
        assert_eq!(day.file_name(), "03.txt");
        assert_eq!(day.to_string(), "3");

        assert_eq!(Day::new(22).unwrap().file_name(), "22.txt");
    }

    #[test]
    fn every_file_name_has_two_digits() {
        for day in Day::all() {
            let name = day.file_name();
            assert_eq!(name.len(), "NN.txt".len(), "{name}");
            assert!(name[..2].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
