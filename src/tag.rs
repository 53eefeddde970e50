use std::sync::Arc;

use crate::attribute::{Attribute, Attributes};
use crate::error::Error;

/// The tag of an element: its name and its attributes.
///
/// ```rust
/// use xmlfrag::{Attribute, Attributes, Tag};
///
/// let yell = Tag::new("yell", Attributes::from(vec![Attribute::new("volume", "30db")]));
/// assert!(yell.has_attribute_in_tag_named("volume", "yell"));
/// assert!(!yell.has_attribute_in_tag_named("volume", "italic"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    name: Arc<str>,
    attributes: Attributes,
}

impl Tag {
    /// Create a new tag.
    pub fn new(name: impl Into<Arc<str>>, attributes: Attributes) -> Self {
        Tag {
            name: name.into(),
            attributes,
        }
    }

    /// Create a tag without attributes.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Tag::new(name, Attributes::new())
    }

    /// Create a tag, rejecting duplicate attribute names.
    ///
    /// See [`Attributes::try_unique`].
    pub fn try_new(
        name: impl Into<Arc<str>>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<Self, Error> {
        Ok(Tag::new(name, Attributes::try_unique(attributes)?))
    }

    /// The name of the tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes of the tag.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Is this tag called `name`? Comparison is exact.
    pub fn has_name(&self, name: &str) -> bool {
        &*self.name == name
    }

    /// Does this tag carry an attribute called `name`?
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has_attribute(name)
    }

    /// Is this tag called `tag_name`, and does it carry `attribute_name`?
    ///
    /// This looks at this tag only; it knows nothing about the element's
    /// children.
    pub fn has_attribute_in_tag_named(&self, attribute_name: &str, tag_name: &str) -> bool {
        self.has_name(tag_name) && self.has_attribute(attribute_name)
    }

    /// Set the value of every attribute called `name`.
    ///
    /// Returns the same tag if it has no such attribute.
    pub fn update_attribute(&self, name: &str, value: &str) -> Tag {
        self.updated(name, &Arc::from(value))
            .unwrap_or_else(|| self.clone())
    }

    /// Do both tags share the same name and attribute list?
    pub fn ptr_eq(&self, other: &Tag) -> bool {
        Arc::ptr_eq(&self.name, &other.name) && self.attributes.ptr_eq(&other.attributes)
    }

    pub(crate) fn updated(&self, name: &str, value: &Arc<str>) -> Option<Tag> {
        self.attributes
            .updated(name, value)
            .map(|attributes| Tag {
                name: self.name.clone(),
                attributes,
            })
    }
}
