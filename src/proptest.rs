//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate arbitrary documents.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xmlfrag = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! Names are drawn from small pools so that generated documents actually
//! share tag and attribute names and the queries have something to find.
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::attribute::{Attribute, Attributes};
use crate::document::Document;
use crate::fragment::Fragment;
use crate::tag::Tag;

/// Tag names used in generated documents.
pub const TAG_NAMES: &[&str] = &["yell", "italic", "bold", "p"];
/// Attribute names used in generated documents.
pub const ATTRIBUTE_NAMES: &[&str] = &["volume", "duration", "lang"];
const TEXT: &str = "[a-zA-Z !é\u{1F600}]{0,8}";
const VALUE: &str = "[a-z0-9]{0,6}";

/// Configure document generation.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many levels of elements can be nested.
    pub depth: u32,
    /// The desired maximum number of fragments.
    pub max_nodes: u32,
    /// The maximum number of fragments in a single sequence.
    pub max_children: u32,
    /// The maximum number of attributes on a tag.
    pub max_attributes: usize,
    /// Drop duplicate attribute names from generated tags.
    pub unique_attributes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth: 6,
            max_nodes: 128,
            max_children: 6,
            max_attributes: 4,
            unique_attributes: false,
        }
    }
}

fn arb_attribute() -> impl Strategy<Value = Attribute> + Clone {
    (prop::sample::select(ATTRIBUTE_NAMES), VALUE)
        .prop_map(|(name, value)| Attribute::new(name, value))
}

fn arb_attributes(config: &Config) -> impl Strategy<Value = Attributes> + Clone {
    let unique = config.unique_attributes;
    prop::collection::vec(arb_attribute(), 0..=config.max_attributes).prop_map(move |attributes| {
        if unique {
            unduplicate_attributes(attributes)
        } else {
            Attributes::from(attributes)
        }
    })
}

fn unduplicate_attributes(attributes: Vec<Attribute>) -> Attributes {
    let mut seen = HashSet::default();
    attributes
        .into_iter()
        .filter(|attribute| seen.insert(attribute.name().to_string()))
        .collect()
}

fn arb_tag(config: &Config) -> impl Strategy<Value = Tag> + Clone {
    (prop::sample::select(TAG_NAMES), arb_attributes(config))
        .prop_map(|(name, attributes)| Tag::new(name, attributes))
}

/// Generate an arbitrary fragment.
pub fn arb_fragment(config: &Config) -> BoxedStrategy<Fragment> {
    let leaf = TEXT.prop_map(|content: String| Fragment::text(content));
    let tag = arb_tag(config);
    let max_children = config.max_children as usize;

    leaf.prop_recursive(
        config.depth,
        config.max_nodes,
        config.max_children,
        move |inner| {
            (tag.clone(), prop::collection::vec(inner, 0..=max_children))
                .prop_map(|(tag, children)| Fragment::element(tag, Document::from(children)))
        },
    )
    .boxed()
}

/// Generate an arbitrary document.
///
/// Example:
///
/// ```notrust
/// use proptest::prelude::*;
/// use xmlfrag::proptest::arb_document;
///
/// proptest! {
///   #[test]
///   fn test_render_length(doc in arb_document()) {
///     prop_assert_eq!(doc.render().chars().count(), doc.content_length());
///   }
/// }
/// ```
pub fn arb_document() -> BoxedStrategy<Document> {
    arb_document_with_config(Config::default())
}

/// Generate an arbitrary document, with configuration.
pub fn arb_document_with_config(config: Config) -> BoxedStrategy<Document> {
    prop::collection::vec(arb_fragment(&config), 0..=config.max_children as usize)
        .prop_map(Document::from)
        .boxed()
}

/// Pick one of the attribute names used in generated documents.
pub fn arb_attribute_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ATTRIBUTE_NAMES)
}

/// Pick one of the tag names used in generated documents.
pub fn arb_tag_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TAG_NAMES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::Edge;

    proptest! {
        #[test]
        fn test_length_is_additive(a in arb_document(), b in arb_document()) {
            prop_assert_eq!(
                a.concat(&b).content_length(),
                a.content_length() + b.content_length()
            );
        }

        #[test]
        fn test_render_matches_length(doc in arb_document()) {
            prop_assert_eq!(doc.render().chars().count(), doc.content_length());
        }

        #[test]
        fn test_texts_join_to_render(doc in arb_document()) {
            prop_assert_eq!(doc.texts().collect::<String>(), doc.render());
        }

        #[test]
        fn test_update_is_idempotent(doc in arb_document(), name in arb_attribute_name(), value in VALUE) {
            let once = doc.update_attribute(name, &value);
            let twice = once.update_attribute(name, &value);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn test_update_without_match_is_identical(doc in arb_document(), name in arb_attribute_name(), value in VALUE) {
            if !doc.has_attribute(name) {
                prop_assert!(doc.update_attribute(name, &value).ptr_eq(&doc));
            }
            prop_assert!(doc.update_attribute("absent", &value).ptr_eq(&doc));
        }

        #[test]
        fn test_update_is_local(doc in arb_document(), name in arb_attribute_name(), value in VALUE) {
            let updated = doc.update_attribute(name, &value);
            for other in ATTRIBUTE_NAMES.iter().filter(|other| **other != name) {
                for tag in TAG_NAMES {
                    prop_assert_eq!(
                        updated.has_attribute_in_tag(other, tag),
                        doc.has_attribute_in_tag(other, tag)
                    );
                }
            }
            prop_assert_eq!(updated.render(), doc.render());
            prop_assert_eq!(updated.has_attribute(name), doc.has_attribute(name));
        }

        #[test]
        fn test_update_sets_every_value(doc in arb_document(), name in arb_attribute_name(), value in VALUE) {
            let updated = doc.update_attribute(name, &value);
            for element in updated.elements() {
                for attribute in element.tag().attributes() {
                    if attribute.has_name(name) {
                        prop_assert_eq!(attribute.value(), value.as_str());
                    }
                }
            }
        }

        #[test]
        fn test_queries_agree_with_traversal(doc in arb_document(), name in arb_attribute_name(), tag in arb_tag_name()) {
            prop_assert_eq!(
                doc.has_tag(tag),
                doc.elements().any(|element| element.tag().has_name(tag))
            );
            prop_assert_eq!(
                doc.has_attribute(name),
                doc.elements().any(|element| element.tag().has_attribute(name))
            );
            prop_assert_eq!(
                doc.has_attribute_in_tag(name, tag),
                doc.elements().any(|element| element.tag().has_attribute_in_tag_named(name, tag))
            );
        }

        #[test]
        fn test_traverse_is_balanced(doc in arb_document()) {
            let mut open = 0usize;
            for edge in doc.traverse() {
                match edge {
                    Edge::Start(_) => open += 1,
                    Edge::End(_) => {
                        prop_assert!(open > 0);
                        open -= 1;
                    }
                }
            }
            prop_assert_eq!(open, 0);
        }

        #[test]
        fn test_unique_config_has_unique_attributes(doc in arb_document_with_config(Config {
            unique_attributes: true,
            ..Default::default()
        })) {
            for element in doc.elements() {
                let attributes = element.tag().attributes().iter().cloned();
                prop_assert!(Attributes::try_unique(attributes).is_ok());
            }
        }
    }
}
