pub mod comparison;
pub mod document;
pub mod error;
pub mod io;
mod ordered;
pub mod property;
pub mod section;
pub mod value;

pub use comparison::NameComparison;
pub use document::Document;
pub use error::Error;
pub use io::{LineEnding, Record, Records, WriteOptions, parse_records, write_document};
pub use property::{Property, ValueError};
pub use section::Section;
pub use value::{FromValue, ToValue};
