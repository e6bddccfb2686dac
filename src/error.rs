use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("property name cannot be empty")]
    EmptyPropertyName,

    #[error("invalid range: min {min} is greater than max {max}")]
    InvertedRange { min: i32, max: i32 },
}

pub(crate) fn check_property_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyPropertyName);
    }
    Ok(())
}

pub(crate) fn check_range(min: i32, max: i32) -> Result<(), Error> {
    if min > max {
        return Err(Error::InvertedRange { min, max });
    }
    Ok(())
}
