//! Error types for OVA inspection.
//!
//! Two channels exist. [`OvaError`] is fatal for the archive being read.
//! [`IncompleteEntry`] describes a single descriptor entry that could not be
//! turned into a record; those are collected as [`SkippedEntry`] values and
//! never abort the surrounding pass.

use thiserror::Error;

/// Fatal errors raised while opening an OVA and parsing its descriptor.
#[derive(Debug, Error)]
pub enum OvaError {
    /// The input is not a readable tar container.
    #[error("not a tar archive: {0}")]
    NotAnArchive(String),

    /// The archive is well formed but has no members at all.
    #[error("archive contains no members")]
    EmptyArchive,

    /// More than one member carries the descriptor suffix.
    #[error("multiple descriptors found in archive: '{first}' and '{second}'")]
    MultipleDescriptors { first: String, second: String },

    /// The archive has members, but none carries the descriptor suffix.
    #[error("no member ending in '{suffix}' found in archive")]
    MissingDescriptor { suffix: String },

    /// The descriptor is not well-formed XML (or not UTF-8).
    #[error("malformed descriptor '{name}': {reason}")]
    MalformedDescriptor { name: String, reason: String },

    /// Reading the archive file or the descriptor member failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single descriptor entry was dropped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IncompleteEntry {
    #[error("property {} has no label text", .key.as_deref().unwrap_or("<no key>"))]
    MissingLabel { key: Option<String> },

    #[error("property labelled '{label}' has no key attribute")]
    MissingKey { label: String },

    #[error(
        "hardware item with sub-type '{}' has no resource type",
        .subtype.as_deref().unwrap_or("")
    )]
    MissingResourceType { subtype: Option<String> },

    #[error("service dependency section has no id attribute")]
    MissingServiceId,
}

/// A recovered, per-entry failure tagged with the virtual system it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// `ovf:id` of the walked node, when it declares one.
    pub virtual_system: Option<String>,
    pub reason: IncompleteEntry,
}
