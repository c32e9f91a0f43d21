use crate::error::DomainError;
use crate::value_object::ValueObject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 客户地址（值对象）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl ValueObject for Address {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.street.is_empty() {
            return Err(DomainError::validation("Street is required"));
        }
        if self.number == 0 {
            return Err(DomainError::validation("Number is required"));
        }
        if self.zip.is_empty() {
            return Err(DomainError::validation("Zip is required"));
        }
        if self.city.is_empty() {
            return Err(DomainError::validation("City is required"));
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}
