use crate::utils::error::{Result, WeatherError};
use std::fmt;

const POSTAL_CODE_LEN: usize = 8;

/// A Brazilian CEP, normalized to its 8 bare digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// Accepts `"26140040"`, `"26140-040"` or `"26140 040"`.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(WeatherError::InvalidPostalCode);
        }

        let digits: String = raw.chars().filter(|c| *c != '-' && *c != ' ').collect();

        if digits.len() != POSTAL_CODE_LEN || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WeatherError::InvalidPostalCode);
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
