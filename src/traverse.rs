use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::document::Document;
use crate::fragment::{Element, Fragment};

/// Fragment edges.
///
/// Used by [`Document::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge<'a> {
    /// The start edge of a fragment. For an element this is where its
    /// start tag would be.
    Start(&'a Fragment),
    /// The end edge of a fragment. For an element this is where its end tag
    /// would be. For text the end edge follows the start edge
    /// immediately.
    End(&'a Fragment),
}

// uses an explicit stack rather than recursion, so the depth of the tree is
// not limited by the call stack
fn traverse_edges(document: &Document) -> impl Iterator<Item = Edge<'_>> + '_ {
    gen!({
        // each entry is an open element (None for the document itself) and
        // the siblings still to visit inside it
        let mut stack = vec![(None, document.iter())];
        while let Some((parent, siblings)) = stack.last_mut() {
            match siblings.next() {
                Some(fragment) => {
                    yield_!(Edge::Start(fragment));
                    match fragment {
                        Fragment::Text(_) => {
                            yield_!(Edge::End(fragment));
                        }
                        Fragment::Element(element) => {
                            stack.push((Some(fragment), element.children().iter()));
                        }
                    }
                }
                None => {
                    let parent = *parent;
                    stack.pop();
                    if let Some(parent) = parent {
                        yield_!(Edge::End(parent));
                    }
                }
            }
        }
    })
    .into_iter()
}

/// ## Traversal
///
/// These walk the tree without recursion, so they are safe to use on very
/// deeply nested documents.
impl Document {
    /// Traverse all fragments in document order, yielding a start and an
    /// end edge for each.
    ///
    /// ```rust
    /// use xmlfrag::{Document, Edge, Fragment, Tag};
    ///
    /// let doc = Document::from(vec![Fragment::element(
    ///     Tag::named("p"),
    ///     Document::from(vec![Fragment::text("Hello")]),
    /// )]);
    ///
    /// let edges = doc
    ///     .traverse()
    ///     .map(|edge| match edge {
    ///         Edge::Start(fragment) => format!("start {}", fragment.render()),
    ///         Edge::End(fragment) => format!("end {}", fragment.render()),
    ///     })
    ///     .collect::<Vec<_>>();
    /// assert_eq!(edges, vec!["start Hello", "start Hello", "end Hello", "end Hello"]);
    /// ```
    pub fn traverse(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        traverse_edges(self)
    }

    /// All fragments at any depth, in document order (pre-order).
    pub fn descendants(&self) -> impl Iterator<Item = &Fragment> + '_ {
        self.traverse().filter_map(|edge| match edge {
            Edge::Start(fragment) => Some(fragment),
            Edge::End(_) => None,
        })
    }

    /// All elements at any depth, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.descendants().filter_map(Fragment::as_element)
    }

    /// The content of all text fragments, in document order.
    ///
    /// Joined together these are the same as [`Document::render`].
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.descendants().filter_map(Fragment::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    fn describe(edge: Edge<'_>) -> String {
        let (kind, fragment) = match edge {
            Edge::Start(fragment) => ("start", fragment),
            Edge::End(fragment) => ("end", fragment),
        };
        match fragment {
            Fragment::Text(content) => format!("{} text {}", kind, content),
            Fragment::Element(element) => format!("{} {}", kind, element.tag().name()),
        }
    }

    #[test]
    fn test_traverse_empty() {
        assert_eq!(Document::new().traverse().count(), 0);
    }

    #[test]
    fn test_traverse_nested() {
        // a<yell><italic>X</italic>ML</yell>!
        let doc = Document::from(vec![
            Fragment::text("a"),
            Fragment::element(
                Tag::named("yell"),
                Document::from(vec![
                    Fragment::element(
                        Tag::named("italic"),
                        Document::from(vec![Fragment::text("X")]),
                    ),
                    Fragment::text("ML"),
                ]),
            ),
            Fragment::text("!"),
        ]);
        let edges = doc.traverse().map(describe).collect::<Vec<_>>();
        assert_eq!(
            edges,
            vec![
                "start text a",
                "end text a",
                "start yell",
                "start italic",
                "start text X",
                "end text X",
                "end italic",
                "start text ML",
                "end text ML",
                "end yell",
                "start text !",
                "end text !",
            ]
        );
    }

    #[test]
    fn test_traverse_empty_element() {
        let doc = Document::from(vec![Fragment::empty_element(Tag::named("br"))]);
        let edges = doc.traverse().map(describe).collect::<Vec<_>>();
        assert_eq!(edges, vec!["start br", "end br"]);
    }

    #[test]
    fn test_deep_nesting() {
        let mut doc = Document::from(vec![Fragment::text("deep")]);
        for _ in 0..10_000 {
            doc = Document::from(vec![Fragment::element(Tag::named("d"), doc)]);
        }
        assert_eq!(doc.elements().count(), 10_000);
        assert_eq!(doc.texts().collect::<String>(), "deep");
        // dropping nested Arcs recurses, so unwind the tree by hand
        while let Some(Fragment::Element(element)) = doc.get(0).cloned() {
            doc = element.children().clone();
        }
    }
}
