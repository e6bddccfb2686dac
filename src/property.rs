use std::num::IntErrorKind;

use thiserror::Error;

use crate::error::{Error, check_property_name};
use crate::ordered::Named;
use crate::value::FromValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("value {value:?} is not an integer")]
    InvalidFormat { value: String },

    #[error("value {value} is outside the 32-bit signed integer range")]
    OutOfRange { value: String },
}

/// A name/value pair. The value is kept as text and coerced on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        check_property_name(&name)?;
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), Error> {
        let name = name.into();
        check_property_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Parse the value as a base-10 `i32`.
    pub fn as_int(&self) -> Result<i32, ValueError> {
        self.value.parse::<i32>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValueError::OutOfRange {
                value: self.value.clone(),
            },
            _ => ValueError::InvalidFormat {
                value: self.value.clone(),
            },
        })
    }

    /// Parse the value as `T`. Returns None if the text does not describe a `T`.
    pub fn parse<T: FromValue>(&self) -> Option<T> {
        T::from_value(&self.value)
    }
}

impl Named for Property {
    fn name(&self) -> &str {
        &self.name
    }
}
