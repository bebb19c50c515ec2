//! OVF descriptor parsing.
//!
//! The descriptor is parsed into a namespace-aware tree with `roxmltree`.
//! Lookups never go through prefixes: every element and attribute is matched
//! by `(namespace URI, local name)`, with the URIs taken from a [`Namespaces`]
//! value handed in at construction.
//!
//! No schema validation happens here. Anything that is well-formed XML is
//! accepted; the section readers decide what they understand.

pub mod network;
pub mod virtual_system;

use roxmltree::{Document, Node};
use serde::Deserialize;

use crate::error::OvaError;

/// Core OVF envelope namespace.
pub const OVF_NAMESPACE: &str = "http://schemas.dmtf.org/ovf/envelope/1";

/// VMware extension namespace (`osType`, `vServiceDependencySection`).
pub const VMW_NAMESPACE: &str = "http://www.vmware.com/schema/ovf";

/// CIM resource allocation schema used by hardware items.
pub const RASD_NAMESPACE: &str =
    "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ResourceAllocationSettingData";

/// Namespace URIs the readers match against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Namespaces {
    pub ovf: String,
    pub vmw: String,
    pub rasd: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            ovf: OVF_NAMESPACE.to_string(),
            vmw: VMW_NAMESPACE.to_string(),
            rasd: RASD_NAMESPACE.to_string(),
        }
    }
}

/// A parsed descriptor bound to the namespaces it is read with.
pub struct Descriptor<'a> {
    doc: Document<'a>,
    namespaces: &'a Namespaces,
}

impl<'a> Descriptor<'a> {
    /// Parse descriptor text. `name` is only used in error messages.
    pub fn parse(
        name: &str,
        text: &'a str,
        namespaces: &'a Namespaces,
    ) -> Result<Self, OvaError> {
        let doc = Document::parse(text).map_err(|e| OvaError::MalformedDescriptor {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { doc, namespaces })
    }

    /// Decode raw member bytes as UTF-8.
    ///
    /// Non UTF-8 content is reported as a malformed descriptor rather than
    /// an I/O failure.
    pub fn decode<'b>(name: &str, bytes: &'b [u8]) -> Result<&'b str, OvaError> {
        std::str::from_utf8(bytes).map_err(|e| OvaError::MalformedDescriptor {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// The document element (`Envelope` in a conforming descriptor).
    pub fn envelope(&self) -> Node<'_, 'a> {
        self.doc.root_element()
    }

    pub fn namespaces(&self) -> &Namespaces {
        self.namespaces
    }
}

/// Direct element children of `node` named `(ns, name)`, in document order.
pub(crate) fn children<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &str,
    name: &str,
) -> Vec<Node<'a, 'input>> {
    node.children()
        .filter(|child| child.has_tag_name((ns, name)))
        .collect()
}

/// First direct element child of `node` named `(ns, name)`.
pub(crate) fn first_child<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &str,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| child.has_tag_name((ns, name)))
}

/// Trimmed text of the first `(ns, name)` child, `None` when the child is
/// missing or carries no non-whitespace text.
pub(crate) fn child_text(node: Node<'_, '_>, ns: &str, name: &str) -> Option<String> {
    first_child(node, ns, name)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Namespace-qualified attribute value.
pub(crate) fn attr(node: Node<'_, '_>, ns: &str, name: &str) -> Option<String> {
    node.attribute((ns, name)).map(str::to_string)
}
