//! KDL abstraction layer.
//!
//! `KdlParse` and `ParseNode` wrap the `kdl` crate types so the config
//! module never touches KDL entries or spans directly. Both carry the original
//! source text so validation errors can name a line.

use super::ConfigError;

/// Parsed KDL document paired with its source text.
pub(super) struct KdlParse<'a> {
    doc: &'a kdl::KdlDocument,
    source: &'a str,
}

/// Single KDL node with source context for line-number reporting.
pub(super) struct ParseNode<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

impl<'a> KdlParse<'a> {
    /// Wrap a parsed document together with the text it was parsed from.
    pub(super) fn new(doc: &'a kdl::KdlDocument, source: &'a str) -> Self {
        Self { doc, source }
    }

    /// Parse a KDL source string into a document.
    ///
    /// Returns a `ConfigError::ParseError` on invalid syntax.
    pub(super) fn parse(source: &str) -> Result<kdl::KdlDocument, ConfigError> {
        source
            .parse()
            .map_err(|e: kdl::KdlError| ConfigError::ParseError(e.to_string()))
    }

    /// Iterate over all nodes at this level, in source order.
    ///
    /// At the top level these are sections (`substitutions { … }`); inside a
    /// section they are the individual `replace` rules.
    pub(super) fn nodes(&self) -> Vec<ParseNode<'a>> {
        self.doc
            .nodes()
            .iter()
            .map(|node| ParseNode {
                node,
                source: self.source,
            })
            .collect()
    }
}

impl<'a> ParseNode<'a> {
    /// The node's identifier (e.g. `"substitutions"`, `"replace"`).
    pub(super) fn name(&self) -> &'a str {
        self.node.name().value()
    }

    /// Positional arguments as strings. `None` marks a non-string argument.
    pub(super) fn arguments(&self) -> Vec<Option<&'a str>> {
        self.node
            .entries()
            .iter()
            .filter(|e| e.name().is_none())
            .map(|e| e.value().as_string())
            .collect()
    }

    /// Whether any `key=value` property is attached to this node.
    pub(super) fn has_properties(&self) -> bool {
        self.node.entries().iter().any(|e| e.name().is_some())
    }

    /// Children block as a new `KdlParse`, if the node has one.
    pub(super) fn children(&self) -> Option<KdlParse<'a>> {
        self.node.children().map(|doc| KdlParse {
            doc,
            source: self.source,
        })
    }

    /// 1-based line number of this node in the original source.
    pub(super) fn line(&self) -> usize {
        let offset = self.node.span().offset();
        self.source[..offset.min(self.source.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
            + 1
    }
}
