use std::sync::Arc;

use ahash::HashSet;
use tracing::debug;

use crate::error::Error;

/// An attribute: a name with a value.
///
/// Both strings are reference counted, so cloning an attribute never copies
/// text.
///
/// ```rust
/// use xmlfrag::Attribute;
///
/// let volume = Attribute::new("volume", "30db");
/// assert!(volume.has_name("volume"));
/// assert_eq!(volume.with_value("volume", "5ft").value(), "5ft");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    name: Arc<str>,
    value: Arc<str>,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The name of the attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the attribute.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Is this attribute called `name`? Comparison is exact.
    pub fn has_name(&self, name: &str) -> bool {
        &*self.name == name
    }

    /// Replace the value if this attribute is called `name`.
    ///
    /// An attribute with another name is returned as is.
    pub fn with_value(&self, name: &str, value: &str) -> Attribute {
        self.updated(name, &Arc::from(value))
            .unwrap_or_else(|| self.clone())
    }

    /// Do both attributes share the same underlying strings?
    pub fn ptr_eq(&self, other: &Attribute) -> bool {
        Arc::ptr_eq(&self.name, &other.name) && Arc::ptr_eq(&self.value, &other.value)
    }

    pub(crate) fn updated(&self, name: &str, value: &Arc<str>) -> Option<Attribute> {
        self.has_name(name).then(|| Attribute {
            name: self.name.clone(),
            value: value.clone(),
        })
    }
}

/// An ordered list of attributes, as carried by a [`Tag`](crate::Tag).
///
/// Attribute names don't have to be unique. Order is significant: two lists
/// with the same attributes in a different order are not equal. Use
/// [`Attributes::try_unique`] if you want duplicates rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(Arc<[Attribute]>);

impl Attributes {
    /// An empty attribute list.
    pub fn new() -> Self {
        Attributes(Arc::from(Vec::new()))
    }

    /// Create an attribute list, rejecting duplicate names.
    ///
    /// ```rust
    /// use xmlfrag::{Attribute, Attributes, Error};
    ///
    /// let attributes = Attributes::try_unique([
    ///     Attribute::new("volume", "30db"),
    ///     Attribute::new("volume", "5ft"),
    /// ]);
    /// assert_eq!(attributes, Err(Error::DuplicateAttribute("volume".to_string())));
    /// ```
    pub fn try_unique(attributes: impl IntoIterator<Item = Attribute>) -> Result<Self, Error> {
        let attributes = attributes.into_iter().collect::<Vec<_>>();
        let mut seen = HashSet::default();
        for attribute in &attributes {
            if !seen.insert(attribute.name()) {
                debug!(attribute = attribute.name(), "rejecting duplicate attribute");
                return Err(Error::DuplicateAttribute(attribute.name().to_string()));
            }
        }
        Ok(Attributes::from(attributes))
    }

    /// Iterate over the attributes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    /// The number of attributes, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value of the first attribute called `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|attribute| attribute.has_name(name))
            .map(Attribute::value)
    }

    /// Is there an attribute called `name` in the list?
    pub fn has_attribute(&self, name: &str) -> bool {
        self.iter().any(|attribute| attribute.has_name(name))
    }

    /// Set the value of every attribute called `name`.
    ///
    /// All duplicates get the new value. If no attribute matches, the same
    /// list is returned.
    pub fn update_attribute(&self, name: &str, value: &str) -> Attributes {
        self.updated(name, &Arc::from(value))
            .unwrap_or_else(|| self.clone())
    }

    /// Do both lists share the same allocation?
    pub fn ptr_eq(&self, other: &Attributes) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn updated(&self, name: &str, value: &Arc<str>) -> Option<Attributes> {
        if !self.has_attribute(name) {
            return None;
        }
        Some(
            self.iter()
                .map(|attribute| {
                    attribute
                        .updated(name, value)
                        .unwrap_or_else(|| attribute.clone())
                })
                .collect(),
        )
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes::new()
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(attributes: Vec<Attribute>) -> Self {
        Attributes(Arc::from(attributes))
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Attributes(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
