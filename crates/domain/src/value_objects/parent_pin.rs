//! Parent PIN and the first-time setup challenge

use std::fmt;

use crate::error::DomainError;

/// Number of digits in a parent PIN.
pub const PIN_LENGTH: usize = 4;

/// A validated parent PIN: exactly four ASCII digits.
#[derive(Clone, PartialEq, Eq)]
pub struct ParentPin(String);

impl ParentPin {
    /// Create a new validated PIN.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless the input is exactly four digits.
    pub fn new(pin: impl Into<String>) -> Result<Self, DomainError> {
        let pin = pin.into();
        if pin.len() != PIN_LENGTH || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("PIN must be exactly 4 digits"));
        }
        Ok(Self(pin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against user input.
    pub fn matches(&self, input: &str) -> bool {
        self.0 == input
    }
}

// Never print the digits.
impl fmt::Debug for ParentPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParentPin(****)")
    }
}

/// Addition question shown before a parent may set a PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupChallenge {
    pub a: u8,
    pub b: u8,
}

impl SetupChallenge {
    /// Smallest and largest operand.
    pub const OPERAND_RANGE: (u8, u8) = (1, 9);

    /// Build a challenge from two operands, clamped into the operand range.
    pub fn new(a: u8, b: u8) -> Self {
        let (min, max) = Self::OPERAND_RANGE;
        Self {
            a: a.clamp(min, max),
            b: b.clamp(min, max),
        }
    }

    pub fn question(&self) -> String {
        format!("Vad är {} + {}?", self.a, self.b)
    }

    pub fn answer(&self) -> u16 {
        u16::from(self.a) + u16::from(self.b)
    }

    /// Check a typed answer; surrounding whitespace is ignored.
    pub fn check(&self, input: &str) -> bool {
        input
            .trim()
            .parse::<u16>()
            .is_ok_and(|value| value == self.answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digits() {
        let pin = ParentPin::new("0427").unwrap();
        assert_eq!(pin.as_str(), "0427");
        assert!(pin.matches("0427"));
        assert!(!pin.matches("0428"));
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["", "123", "12345", "12a4", " 1234", "１２３４"] {
            assert!(ParentPin::new(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn debug_hides_digits() {
        let pin = ParentPin::new("1234").unwrap();
        assert!(!format!("{:?}", pin).contains("1234"));
    }

    #[test]
    fn challenge_checks_trimmed_answer() {
        let challenge = SetupChallenge::new(4, 7);
        assert_eq!(challenge.question(), "Vad är 4 + 7?");
        assert!(challenge.check(" 11 "));
        assert!(!challenge.check("12"));
        assert!(!challenge.check("elva"));
    }

    #[test]
    fn challenge_operands_are_clamped() {
        let challenge = SetupChallenge::new(0, 42);
        assert_eq!((challenge.a, challenge.b), (1, 9));
    }
}
