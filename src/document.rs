use std::convert::Infallible;
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::comparison::NameComparison;
use crate::error::{Error, check_property_name, check_range};
use crate::io::{LineEnding, Record, WriteOptions, parse_records, write_document};
use crate::ordered::OrderedList;
use crate::property::Property;
use crate::section::Section;
use crate::value::{FromValue, ToValue};

/// An ordered collection of uniquely named sections.
///
/// Section names are compared with the document's section comparison; every section the document
/// creates compares property names with the document's property comparison. The two are
/// independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sections: OrderedList<Section>,
    property_comparison: NameComparison,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Document with case-sensitive section and property names.
    pub fn new() -> Self {
        Self::with_comparison(NameComparison::CaseSensitive, NameComparison::CaseSensitive)
    }

    pub fn with_comparison(sections: NameComparison, properties: NameComparison) -> Self {
        Self {
            sections: OrderedList::new(sections),
            property_comparison: properties,
        }
    }

    pub fn section_comparison(&self) -> NameComparison {
        self.sections.comparison()
    }

    pub fn property_comparison(&self) -> NameComparison {
        self.property_comparison
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.len() == 0
    }

    pub fn sections(&self) -> &[Section] {
        self.sections.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.as_slice().iter()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub fn property(&self, section: &str, name: &str) -> Result<Option<&Property>, Error> {
        check_property_name(name)?;
        match self.section(section) {
            Some(s) => s.get(name),
            None => Ok(None),
        }
    }

    /// Value text of a property, or None if the section or property is absent.
    pub fn value(&self, section: &str, name: &str) -> Option<&str> {
        self.section(section)?.value(name)
    }

    pub fn get_or<T: FromValue>(&self, section: &str, name: &str, default: T) -> Result<T, Error> {
        Ok(self.try_get(section, name)?.unwrap_or(default))
    }

    pub fn get_int(
        &self,
        section: &str,
        name: &str,
        min: i32,
        max: i32,
        default: i32,
    ) -> Result<i32, Error> {
        Ok(self.try_get_int(section, name, min, max)?.unwrap_or(default))
    }

    pub fn try_get<T: FromValue>(&self, section: &str, name: &str) -> Result<Option<T>, Error> {
        Ok(self.property(section, name)?.and_then(|p| p.parse()))
    }

    pub fn try_get_int(
        &self,
        section: &str,
        name: &str,
        min: i32,
        max: i32,
    ) -> Result<Option<i32>, Error> {
        check_range(min, max)?;
        check_property_name(name)?;
        match self.section(section) {
            Some(s) => s.try_get_int(name, min, max),
            None => Ok(None),
        }
    }

    /// Set a property, appending the section first if it does not exist.
    pub fn set<V: ToValue>(&mut self, section: &str, name: &str, value: V) -> Result<(), Error> {
        self.set_text(section, name, value.to_value())
    }

    fn set_text(&mut self, section: &str, name: &str, value: String) -> Result<(), Error> {
        check_property_name(name)?;
        self.section_or_insert(section).set_text(name, value)
    }

    fn section_or_insert(&mut self, name: &str) -> &mut Section {
        let comparison = self.property_comparison;
        self.sections
            .get_or_insert_with(name, || Section::new(name, comparison))
    }

    /// Remove a section and all of its properties. Returns whether it existed.
    pub fn remove_section(&mut self, name: &str) -> bool {
        self.sections.remove(name).is_some()
    }

    /// Remove a property, leaving its section in place even if it becomes empty.
    pub fn remove(&mut self, section: &str, name: &str) -> Result<bool, Error> {
        check_property_name(name)?;
        match self.section_mut(section) {
            Some(s) => s.remove(name),
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Merge INI text into the document. Later definitions of a property replace earlier ones.
    pub fn load_str(&mut self, text: &str) {
        for record in parse_records(text) {
            match record {
                Record::Section { name } => {
                    self.section_or_insert(name);
                }
                Record::Property {
                    section,
                    name,
                    value,
                } => {
                    let result = self
                        .section_or_insert(section)
                        .set_text(name, value.to_string());
                    debug_assert!(result.is_ok(), "records never carry an empty name");
                }
            }
        }
        tracing::debug!(sections = self.len(), "loaded INI document");
    }

    /// Read INI text from `reader` and merge it into the document.
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<(), Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.load_str(&text);
        Ok(())
    }

    /// Write the document with the platform line ending.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), Error> {
        self.save_with(writer, &WriteOptions::default())
    }

    pub fn save_with<W: Write>(&self, mut writer: W, options: &WriteOptions) -> Result<(), Error> {
        let text = write_document(self, options);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        tracing::debug!(sections = self.len(), bytes = text.len(), "saved INI document");
        Ok(())
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut document = Document::new();
        document.load_str(s);
        Ok(document)
    }
}

/// Renders the document with `\n` line endings.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_document(
            self,
            &WriteOptions::with_line_ending(LineEnding::Lf),
        ))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
