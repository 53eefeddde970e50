use std::sync::Arc;

use tracing::trace;

use crate::fragment::Fragment;

/// An ordered sequence of fragments.
///
/// This is both a whole document and the content of an element. A document
/// is immutable: [`Document::update_attribute`] produces a new document
/// that shares every unchanged subtree with the original.
///
/// ```rust
/// use xmlfrag::{Attribute, Attributes, Document, Fragment, Tag};
///
/// // I am <yell volume="30db">X</yell>!
/// let doc = Document::from(vec![
///     Fragment::text("I "),
///     Fragment::text("am "),
///     Fragment::element(
///         Tag::new("yell", Attributes::from(vec![Attribute::new("volume", "30db")])),
///         Document::from(vec![Fragment::text("X")]),
///     ),
///     Fragment::text("!"),
/// ]);
///
/// assert_eq!(doc.content_length(), 7);
/// assert_eq!(doc.render(), "I am X!");
/// assert!(doc.has_attribute_in_tag("volume", "yell"));
///
/// let updated = doc.update_attribute("volume", "5ft");
/// assert!(updated.get(0).unwrap().ptr_eq(doc.get(0).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document(Arc<[Fragment]>);

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Document(Arc::from(Vec::new()))
    }

    /// Iterate over the top-level fragments.
    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.0.iter()
    }

    /// The number of top-level fragments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The top-level fragment at `index`.
    pub fn get(&self, index: usize) -> Option<&Fragment> {
        self.0.get(index)
    }

    /// A document with the fragments of `self` followed by those of `other`.
    ///
    /// Concatenating with an empty document returns the other one as is.
    pub fn concat(&self, other: &Document) -> Document {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// The number of characters of text in the document.
    ///
    /// Tags and attributes contribute nothing.
    pub fn content_length(&self) -> usize {
        self.iter().map(Fragment::content_length).sum()
    }

    /// Is there an element called `name` anywhere in the document?
    ///
    /// Names are compared exactly, so `yell` and `Yell` are different.
    pub fn has_tag(&self, name: &str) -> bool {
        self.iter().any(|fragment| fragment.has_tag(name))
    }

    /// Is there an attribute called `name` on any tag, at any depth?
    pub fn has_attribute(&self, name: &str) -> bool {
        self.iter().any(|fragment| fragment.has_attribute(name))
    }

    /// Is there a tag called `tag_name` that itself carries an attribute
    /// called `attribute_name`?
    ///
    /// The attribute has to be on that very tag: an attribute on a nested
    /// or sibling element with another name does not count.
    pub fn has_attribute_in_tag(&self, attribute_name: &str, tag_name: &str) -> bool {
        self.iter()
            .any(|fragment| fragment.has_attribute_in_tag(attribute_name, tag_name))
    }

    /// The text of the document in document order, with all tags and
    /// attributes stripped.
    ///
    /// This is not a serializer: no markup is produced.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Set the value of every attribute called `name`, anywhere in the
    /// document.
    ///
    /// If no attribute matches, the same document is returned (see
    /// [`Document::ptr_eq`]). Otherwise only the nodes on the path to a
    /// changed attribute are new; everything else is shared.
    pub fn update_attribute(&self, name: &str, value: &str) -> Document {
        let updated = self.updated(name, &Arc::from(value));
        trace!(
            attribute = name,
            changed = updated.is_some(),
            "update attribute"
        );
        updated.unwrap_or_else(|| self.clone())
    }

    /// Are both documents the same sequence in memory?
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        for fragment in self.iter() {
            fragment.render_into(out);
        }
    }

    pub(crate) fn updated(&self, name: &str, value: &Arc<str>) -> Option<Document> {
        // stays None until the first fragment changes
        let mut rebuilt: Option<Vec<Fragment>> = None;
        for (index, fragment) in self.iter().enumerate() {
            let updated = fragment.updated(name, value);
            if let Some(fragments) = rebuilt.as_mut() {
                fragments.push(updated.unwrap_or_else(|| fragment.clone()));
            } else if let Some(updated) = updated {
                let mut fragments = Vec::with_capacity(self.len());
                fragments.extend_from_slice(&self.0[..index]);
                fragments.push(updated);
                rebuilt = Some(fragments);
            }
        }
        rebuilt.map(Document::from)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl From<Vec<Fragment>> for Document {
    fn from(fragments: Vec<Fragment>) -> Self {
        Document(Arc::from(fragments))
    }
}

impl FromIterator<Fragment> for Document {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Document(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
