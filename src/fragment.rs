use std::sync::Arc;

use crate::document::Document;
use crate::tag::Tag;

/// A single node in a document: either text or an element.
///
/// Cloning a fragment only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fragment {
    /// Literal text.
    Text(Arc<str>),
    /// An element with a tag and child content.
    Element(Arc<Element>),
}

/// An element: a tag wrapping a document of children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    tag: Tag,
    children: Document,
}

impl Element {
    /// Create a new element.
    pub fn new(tag: Tag, children: Document) -> Self {
        Element { tag, children }
    }

    /// The tag of the element.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The content of the element.
    pub fn children(&self) -> &Document {
        &self.children
    }

    /// The number of characters of text in the children.
    pub fn content_length(&self) -> usize {
        self.children.content_length()
    }

    /// Is this element, or one below it, called `name`?
    pub fn has_tag(&self, name: &str) -> bool {
        self.tag.has_name(name) || self.children.has_tag(name)
    }

    /// Does this tag, or a tag below it, carry an attribute called `name`?
    pub fn has_attribute(&self, name: &str) -> bool {
        self.tag.has_attribute(name) || self.children.has_attribute(name)
    }

    /// Is there a tag called `tag_name` carrying `attribute_name`, here or below?
    pub fn has_attribute_in_tag(&self, attribute_name: &str, tag_name: &str) -> bool {
        self.tag
            .has_attribute_in_tag_named(attribute_name, tag_name)
            || self.children.has_attribute_in_tag(attribute_name, tag_name)
    }

    /// The text of the children with all tags stripped.
    pub fn render(&self) -> String {
        self.children.render()
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        self.children.render_into(out)
    }

    // the tag and the children are shared independently when unchanged
    pub(crate) fn updated(&self, name: &str, value: &Arc<str>) -> Option<Element> {
        match (
            self.tag.updated(name, value),
            self.children.updated(name, value),
        ) {
            (None, None) => None,
            (tag, children) => Some(Element {
                tag: tag.unwrap_or_else(|| self.tag.clone()),
                children: children.unwrap_or_else(|| self.children.clone()),
            }),
        }
    }
}

impl Fragment {
    /// Create a text fragment.
    pub fn text(content: impl Into<Arc<str>>) -> Self {
        Fragment::Text(content.into())
    }

    /// Create an element fragment.
    ///
    /// ```rust
    /// use xmlfrag::{Document, Fragment, Tag};
    ///
    /// let italic = Fragment::element(
    ///     Tag::named("italic"),
    ///     Document::from(vec![Fragment::text("X")]),
    /// );
    /// assert_eq!(italic.render(), "X");
    /// assert!(italic.has_tag("italic"));
    /// ```
    pub fn element(tag: Tag, children: Document) -> Self {
        Fragment::Element(Arc::new(Element::new(tag, children)))
    }

    /// Create an element fragment without children.
    pub fn empty_element(tag: Tag) -> Self {
        Fragment::element(tag, Document::new())
    }

    /// If this fragment is text, return its content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(content) => Some(&**content),
            Fragment::Element(_) => None,
        }
    }

    /// If this fragment is an element, return it.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Fragment::Text(_) => None,
            Fragment::Element(element) => Some(&**element),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Fragment::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Fragment::Element(_))
    }

    /// The number of characters of text in this fragment.
    ///
    /// Tags and attributes don't count. Characters are Unicode scalar
    /// values, not bytes.
    pub fn content_length(&self) -> usize {
        match self {
            Fragment::Text(content) => content.chars().count(),
            Fragment::Element(element) => element.content_length(),
        }
    }

    /// Is there an element called `name` in this fragment?
    pub fn has_tag(&self, name: &str) -> bool {
        match self {
            Fragment::Text(_) => false,
            Fragment::Element(element) => element.has_tag(name),
        }
    }

    /// Is there an attribute called `name` on any tag in this fragment?
    pub fn has_attribute(&self, name: &str) -> bool {
        match self {
            Fragment::Text(_) => false,
            Fragment::Element(element) => element.has_attribute(name),
        }
    }

    /// Is there a tag called `tag_name` that carries `attribute_name`?
    pub fn has_attribute_in_tag(&self, attribute_name: &str, tag_name: &str) -> bool {
        match self {
            Fragment::Text(_) => false,
            Fragment::Element(element) => element.has_attribute_in_tag(attribute_name, tag_name),
        }
    }

    /// The text of this fragment with all tags stripped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Set the value of every attribute called `name` in this fragment.
    ///
    /// Returns the same fragment when no attribute matches.
    pub fn update_attribute(&self, name: &str, value: &str) -> Fragment {
        self.updated(name, &Arc::from(value))
            .unwrap_or_else(|| self.clone())
    }

    /// Are both fragments the same node?
    pub fn ptr_eq(&self, other: &Fragment) -> bool {
        match (self, other) {
            (Fragment::Text(a), Fragment::Text(b)) => Arc::ptr_eq(a, b),
            (Fragment::Element(a), Fragment::Element(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        match self {
            Fragment::Text(content) => out.push_str(content),
            Fragment::Element(element) => element.render_into(out),
        }
    }

    pub(crate) fn updated(&self, name: &str, value: &Arc<str>) -> Option<Fragment> {
        match self {
            Fragment::Text(_) => None,
            Fragment::Element(element) => element
                .updated(name, value)
                .map(|element| Fragment::Element(Arc::new(element))),
        }
    }
}

impl From<&str> for Fragment {
    fn from(content: &str) -> Self {
        Fragment::text(content)
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(Arc::new(element))
    }
}
