#![forbid(unsafe_code)]

//! Immutable XML fragment trees.
//!
//! A [`Document`] is an ordered sequence of [`Fragment`]s. A fragment is
//! either text or an [`Element`], which has a [`Tag`] (a name with
//! [`Attributes`]) and a document of children. Trees are immutable and
//! cheap to clone; changing one with [`Document::update_attribute`] produces
//! a new tree that shares every untouched subtree with the old one.
//!
//! There is no parser and no serializer. [`Document::render`] strips all
//! markup and returns just the text.
//!
//! ```rust
//! use xmlfrag::{Attribute, Attributes, Document, Fragment, Tag};
//!
//! // I am <yell volume="30db"><italic>X</italic>ML</yell>!
//! let doc = Document::from(vec![
//!     Fragment::text("I "),
//!     Fragment::text("am "),
//!     Fragment::element(
//!         Tag::new("yell", Attributes::from(vec![Attribute::new("volume", "30db")])),
//!         Document::from(vec![
//!             Fragment::element(Tag::named("italic"), Document::from(vec![Fragment::text("X")])),
//!             Fragment::text("ML"),
//!         ]),
//!     ),
//!     Fragment::text("!"),
//! ]);
//!
//! assert_eq!(doc.render(), "I am XML!");
//! assert_eq!(doc.content_length(), 9);
//! assert!(doc.has_tag("italic"));
//! assert!(doc.has_attribute_in_tag("volume", "yell"));
//! assert!(!doc.has_attribute_in_tag("volume", "italic"));
//!
//! // nothing called "duration", so nothing changes
//! let same = doc.update_attribute("duration", "20sec");
//! assert!(same.ptr_eq(&doc));
//! ```
//!
//! ## Features
//!
//! - `proptest`: strategies to generate arbitrary documents, see
//!   [`proptest`](crate::proptest).
//! - `serde`: `Serialize` and `Deserialize` for all tree types.

mod attribute;
mod document;
mod error;
mod fragment;
mod tag;
mod traverse;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use attribute::{Attribute, Attributes};
pub use document::Document;
pub use error::Error;
pub use fragment::{Element, Fragment};
pub use tag::Tag;
pub use traverse::Edge;
