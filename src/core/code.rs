//! Mastermind code representation
//!
//! A Code is an ordered sequence of 4 digits (0-9). The same type is used for
//! guesses and for candidate secrets.

use std::fmt;
use std::str::FromStr;

/// Number of slots in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct symbols per slot
pub const ALPHABET_SIZE: u8 = 10;

/// Total number of possible codes (10^4)
pub const UNIVERSE_SIZE: usize = 10_000;

/// A 4-digit Mastermind code
///
/// Ordering follows the digits lexicographically, which matches the numeric
/// order of [`Code::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidDigit(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidDigit(ch) => write!(f, "Code contains invalid digit '{ch}'"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from raw digits
    ///
    /// # Errors
    /// Returns `CodeError::InvalidDigit` if any digit is 10 or larger.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new([1, 4, 6, 7]).unwrap();
    /// assert_eq!(code.to_string(), "1467");
    ///
    /// assert!(Code::new([1, 4, 6, 10]).is_err());
    /// ```
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some(&bad) = digits.iter().find(|&&d| d >= ALPHABET_SIZE) {
            // Report something printable for out-of-range bytes
            let ch = char::from_digit(u32::from(bad), 36).unwrap_or('?');
            return Err(CodeError::InvalidDigit(ch));
        }
        Ok(Self(digits))
    }

    /// Build the code whose decimal reading is `index` (0000-9999)
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        debug_assert!((index as usize) < UNIVERSE_SIZE, "Code index must be < 10000");
        Self([
            (index / 1000 % 10) as u8,
            (index / 100 % 10) as u8,
            (index / 10 % 10) as u8,
            (index % 10) as u8,
        ])
    }

    /// Position of this code in the universe (its decimal reading)
    #[must_use]
    pub const fn index(self) -> u16 {
        let [a, b, c, d] = self.0;
        a as u16 * 1000 + b as u16 * 100 + c as u16 * 10 + d as u16
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Check if the code contains a digit anywhere
    #[inline]
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// Number of slots holding `digit`
    #[inline]
    #[must_use]
    pub fn count_of(self, digit: u8) -> usize {
        self.0.iter().filter(|&&d| d == digit).count()
    }

    /// Count of each digit, indexed by digit value
    #[must_use]
    pub fn digit_counts(self) -> [u8; ALPHABET_SIZE as usize] {
        let mut counts = [0u8; ALPHABET_SIZE as usize];
        for &d in &self.0 {
            counts[d as usize] += 1;
        }
        counts
    }

    /// How many slots repeat a digit already seen earlier in the code
    ///
    /// `1467` has 0, `1147` has 1, `1111` has 3.
    #[must_use]
    pub fn repeated_digits(self) -> usize {
        let distinct = self.digit_counts().iter().filter(|&&c| c > 0).count();
        CODE_LENGTH - distinct
    }

    /// True if any digit appears more than once
    #[inline]
    #[must_use]
    pub fn has_repeats(self) -> bool {
        self.repeated_digits() > 0
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse `"1467"`; whitespace, commas and brackets are ignored so
    /// `"[1, 4, 6, 7]"` is accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '[' | ']'))
            .collect();

        if symbols.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(symbols.len()));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, &ch) in symbols.iter().enumerate() {
            let value = ch.to_digit(10).ok_or(CodeError::InvalidDigit(ch))?;
            digits[slot] = value as u8;
        }

        Ok(Self(digits))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
