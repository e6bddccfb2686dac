use crate::comparison::NameComparison;
use crate::error::{Error, check_property_name, check_range};
use crate::ordered::{Named, OrderedList};
use crate::property::Property;
use crate::value::{FromValue, ToValue};

/// A named, insertion-ordered collection of properties.
///
/// The empty name denotes the default section, whose properties precede any section header.
/// Property names are unique under the section's [`NameComparison`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    properties: OrderedList<Property>,
}

impl Section {
    pub fn new(name: impl Into<String>, comparison: NameComparison) -> Self {
        Self {
            name: name.into(),
            properties: OrderedList::new(comparison),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comparison(&self) -> NameComparison {
        self.properties.comparison()
    }

    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.len() == 0
    }

    pub fn properties(&self) -> &[Property] {
        self.properties.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.as_slice().iter()
    }

    pub fn get(&self, name: &str) -> Result<Option<&Property>, Error> {
        check_property_name(name)?;
        Ok(self.properties.get(name))
    }

    /// Value text of the property, or None if absent.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(Property::value)
    }

    /// Returns `default` if the property is absent or its value does not parse as `T`.
    pub fn get_or<T: FromValue>(&self, name: &str, default: T) -> Result<T, Error> {
        Ok(self.try_get(name)?.unwrap_or(default))
    }

    /// Returns `default` unless the property parses as an integer within `min..=max`.
    pub fn get_int(&self, name: &str, min: i32, max: i32, default: i32) -> Result<i32, Error> {
        Ok(self.try_get_int(name, min, max)?.unwrap_or(default))
    }

    pub fn try_get<T: FromValue>(&self, name: &str) -> Result<Option<T>, Error> {
        Ok(self.get(name)?.and_then(|p| p.parse()))
    }

    pub fn try_get_int(&self, name: &str, min: i32, max: i32) -> Result<Option<i32>, Error> {
        check_range(min, max)?;
        let value = self.get(name)?.and_then(|p| p.as_int().ok());
        Ok(value.filter(|v| (min..=max).contains(v)))
    }

    /// Replace the value of an existing property, or append a new one.
    pub fn set<V: ToValue>(&mut self, name: &str, value: V) -> Result<(), Error> {
        self.set_text(name, value.to_value())
    }

    pub(crate) fn set_text(&mut self, name: &str, value: String) -> Result<(), Error> {
        if let Some(property) = self.properties.get_mut(name) {
            property.set_value(value);
            return Ok(());
        }
        let property = Property::new(name, value)?;
        self.properties.get_or_insert_with(name, || property);
        Ok(())
    }

    /// Returns whether a property was removed.
    pub fn remove(&mut self, name: &str) -> Result<bool, Error> {
        check_property_name(name)?;
        Ok(self.properties.remove(name).is_some())
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }
}

impl Named for Section {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
