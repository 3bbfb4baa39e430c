//! Structural view of a source file as seen by the call-site locator.
//!
//! The locator does not look at the syntax tree directly. It only needs call
//! and element nodes with their raw texts and spans, plus the file text that
//! precedes a position. `SyntaxHost` is that contract; `ParsedSource` is the
//! swc-backed implementation and tests can build hosts by hand.

use std::cmp::Reverse;

use crate::core::{SourceSpan, SourceText};

/// An attribute on a markup element. `value` is `None` when the attribute has
/// no literal string value (bare attribute or arbitrary expression).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAttribute {
    pub name: String,
    pub value: Option<String>,
}

/// A call-like or markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// `callee(arg0, arg1, ...)` with the raw source text of each part.
    Call {
        callee: String,
        arguments: Vec<String>,
        span: SourceSpan,
    },
    /// `<Name attr="..." ...>`.
    Tag {
        name: String,
        attributes: Vec<TagAttribute>,
        span: SourceSpan,
    },
}

impl SyntaxNode {
    pub fn span(&self) -> SourceSpan {
        match self {
            SyntaxNode::Call { span, .. } | SyntaxNode::Tag { span, .. } => *span,
        }
    }
}

pub trait SyntaxHost {
    /// Every call and element node in document (pre-)order.
    fn nodes(&self) -> &[SyntaxNode];

    fn source(&self) -> &SourceText;

    /// Nodes enclosing `offset`, innermost first.
    fn ancestors(&self, offset: usize) -> Vec<&SyntaxNode> {
        // Reverse pre-order puts the deeper node first when two spans tie.
        let mut enclosing: Vec<&SyntaxNode> = self
            .nodes()
            .iter()
            .rev()
            .filter(|node| node.span().contains(offset))
            .collect();
        enclosing.sort_by_key(|node| node.span().len());
        enclosing
    }

    /// All file text strictly before `offset`.
    fn preceding_text(&self, offset: usize) -> &str {
        self.source().preceding(offset)
    }
}

/// A host assembled from explicit nodes, for callers that already have a
/// structural representation of the file.
#[derive(Debug, Clone)]
pub struct StaticHost {
    source: SourceText,
    nodes: Vec<SyntaxNode>,
}

impl StaticHost {
    pub fn new(source: impl Into<String>, mut nodes: Vec<SyntaxNode>) -> Self {
        nodes.sort_by_key(|node| (node.span().start, Reverse(node.span().end)));
        Self {
            source: SourceText::new(source),
            nodes,
        }
    }
}

impl SyntaxHost for StaticHost {
    fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    fn source(&self) -> &SourceText {
        &self.source
    }
}
