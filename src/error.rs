use std::fmt;

/// Errors produced by the checked constructors.
///
/// The tree operations themselves never fail; a missing tag or attribute
/// is reported as `false` or as an unchanged tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The same attribute name occurs more than once in a single tag.
    DuplicateAttribute(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateAttribute(name) => write!(f, "duplicate attribute: {}", name),
        }
    }
}

impl std::error::Error for Error {}
