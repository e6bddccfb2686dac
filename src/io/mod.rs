mod reader;
mod writer;

pub use reader::{Record, Records, parse_records};
pub use writer::{LineEnding, WriteOptions, write_document};
