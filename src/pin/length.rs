use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cells in a widget. Fixed for the widget's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PinLength {
    #[default]
    Four,
    Six,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("PIN length must be 4 or 6, got {0}")]
pub struct PinLengthError(pub usize);

impl PinLength {
    pub fn get(self) -> usize {
        match self {
            PinLength::Four => 4,
            PinLength::Six => 6,
        }
    }
}

impl TryFrom<usize> for PinLength {
    type Error = PinLengthError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(PinLength::Four),
            6 => Ok(PinLength::Six),
            other => Err(PinLengthError(other)),
        }
    }
}

impl From<PinLength> for usize {
    fn from(length: PinLength) -> Self {
        length.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_four_and_six_are_valid() {
        assert_eq!(PinLength::try_from(4), Ok(PinLength::Four));
        assert_eq!(PinLength::try_from(6), Ok(PinLength::Six));
        assert_eq!(PinLength::try_from(5), Err(PinLengthError(5)));
        assert_eq!(PinLength::try_from(0), Err(PinLengthError(0)));
    }
}
