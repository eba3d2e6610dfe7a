//! Deferred display text.
//!
//! `UiText` lets callers build a message without deciding up front whether
//! it comes from a literal, a string-resource table, or a mix of both.
//! Resolution happens once, at the rendering boundary, against whatever
//! `TextResolver` the host provides.

use crate::resolver::TextResolver;

/// A display string whose final form is decided at resolution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiText {
    /// Fixed text, resolved verbatim.
    Literal(String),
    /// A string-resource reference with positional arguments.
    Resource { id: String, args: Vec<String> },
    /// Ordered concatenation of parts.
    Combined(Vec<UiText>),
}

impl UiText {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn resource(id: impl Into<String>) -> Self {
        Self::Resource {
            id: id.into(),
            args: Vec::new(),
        }
    }

    pub fn resource_with(id: impl Into<String>, args: Vec<String>) -> Self {
        Self::Resource {
            id: id.into(),
            args,
        }
    }

    /// Append `other` to this text, flattening when already combined.
    pub fn and(self, other: UiText) -> Self {
        match self {
            Self::Combined(mut parts) => {
                parts.push(other);
                Self::Combined(parts)
            }
            first => Self::Combined(vec![first, other]),
        }
    }

    /// Project this text to a `String` using the given lookup capability.
    ///
    /// Pure: no side effects, no failure path. Combined parts resolve in
    /// declaration order.
    pub fn resolve(&self, resolver: &dyn TextResolver) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Resource { id, args } => resolver.lookup(id, args),
            Self::Combined(parts) => parts.iter().map(|part| part.resolve(resolver)).collect(),
        }
    }
}
