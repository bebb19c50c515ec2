//! Virtual-system walker.
//!
//! Finds the units to walk, then runs three passes over each one and
//! appends to a single flat list: hardware, product properties, service
//! dependencies. A malformed entry is recorded as a [`SkippedEntry`] and the
//! pass moves on.

use roxmltree::Node;
use tracing::{debug, warn};

use super::{attr, child_text, children, first_child, Descriptor, Namespaces};
use crate::error::{IncompleteEntry, SkippedEntry};
use crate::model::{
    ConfigurableProperty, HardwareProperty, PropertyRecord, ServiceDependency, OS_TYPE_KIND,
};

/// Which discovery strategy produced the walked nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// `VirtualSystemCollection` elements directly under the envelope.
    Collection,
    /// Every `VirtualSystem` below the envelope, at any depth.
    Standalone,
}

/// Records collected from every walked node, plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub entries: Vec<PropertyRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl Collected {
    fn push(&mut self, record: PropertyRecord) {
        self.entries.push(record);
    }

    fn skip(&mut self, virtual_system: Option<&str>, reason: IncompleteEntry) {
        warn!(
            virtual_system = virtual_system.unwrap_or("<unnamed>"),
            "skipping descriptor entry: {reason}"
        );
        self.skipped.push(SkippedEntry {
            virtual_system: virtual_system.map(str::to_string),
            reason,
        });
    }
}

/// Nodes to walk, in document order.
///
/// Collections are used when the envelope declares any; only otherwise are
/// standalone virtual systems searched for. Results are never merged.
pub fn virtual_systems<'a, 'input>(
    descriptor: &'a Descriptor<'input>,
) -> (Discovery, Vec<Node<'a, 'input>>) {
    let ovf = descriptor.namespaces().ovf.as_str();
    let envelope = descriptor.envelope();

    let collections = children(envelope, ovf, "VirtualSystemCollection");
    if !collections.is_empty() {
        return (Discovery::Collection, collections);
    }

    let systems = envelope
        .descendants()
        .skip(1)
        .filter(|node| node.has_tag_name((ovf, "VirtualSystem")))
        .collect();
    (Discovery::Standalone, systems)
}

pub fn collect_properties(descriptor: &Descriptor<'_>) -> Collected {
    let ns = descriptor.namespaces();
    let (discovery, systems) = virtual_systems(descriptor);
    debug!(?discovery, count = systems.len(), "discovered virtual systems");

    let mut out = Collected::default();
    for system in systems {
        let system_id = attr(system, &ns.ovf, "id");
        debug!(
            virtual_system = system_id.as_deref().unwrap_or("<unnamed>"),
            "walking virtual system"
        );
        hardware_pass(ns, system, system_id.as_deref(), &mut out);
        product_pass(ns, system, system_id.as_deref(), &mut out);
        service_pass(ns, system, system_id.as_deref(), &mut out);
    }
    out
}

fn hardware_pass(
    ns: &Namespaces,
    system: Node<'_, '_>,
    system_id: Option<&str>,
    out: &mut Collected,
) {
    for os in children(system, &ns.ovf, "OperatingSystemSection") {
        out.push(PropertyRecord::Hardware(HardwareProperty {
            kind: OS_TYPE_KIND.to_string(),
            value: attr(os, &ns.vmw, "osType"),
        }));
    }

    for section in children(system, &ns.ovf, "VirtualHardwareSection") {
        for item in children(section, &ns.ovf, "Item") {
            if first_child(item, &ns.rasd, "ResourceSubType").is_none() {
                continue;
            }
            let subtype = child_text(item, &ns.rasd, "ResourceSubType");
            match child_text(item, &ns.rasd, "ResourceType") {
                Some(kind) => out.push(PropertyRecord::Hardware(HardwareProperty {
                    kind,
                    value: subtype,
                })),
                None => out.skip(system_id, IncompleteEntry::MissingResourceType { subtype }),
            }
        }
    }
}

fn product_pass(
    ns: &Namespaces,
    system: Node<'_, '_>,
    system_id: Option<&str>,
    out: &mut Collected,
) {
    for section in children(system, &ns.ovf, "ProductSection") {
        // Sections without a category describe the product, not settings.
        let Some(category) = first_child(section, &ns.ovf, "Category") else {
            continue;
        };
        let category = category.text().unwrap_or_default().trim().to_string();
        let class_name = attr(section, &ns.ovf, "class");
        let instance = attr(section, &ns.ovf, "instance");

        for property in children(section, &ns.ovf, "Property") {
            let key = attr(property, &ns.ovf, "key");
            let Some(label) = child_text(property, &ns.ovf, "Label") else {
                out.skip(system_id, IncompleteEntry::MissingLabel { key });
                continue;
            };
            let Some(key) = key else {
                out.skip(system_id, IncompleteEntry::MissingKey { label });
                continue;
            };

            out.push(PropertyRecord::Configurable(ConfigurableProperty {
                category: category.clone(),
                label,
                description: child_text(property, &ns.ovf, "Description"),
                key,
                class_name: class_name.clone(),
                instance: instance.clone(),
                value: None,
            }));
        }
    }
}

fn service_pass(
    ns: &Namespaces,
    system: Node<'_, '_>,
    system_id: Option<&str>,
    out: &mut Collected,
) {
    for section in children(system, &ns.vmw, "vServiceDependencySection") {
        match attr(section, &ns.vmw, "id") {
            Some(id) => out.push(PropertyRecord::ServiceDependency(ServiceDependency { id })),
            None => out.skip(system_id, IncompleteEntry::MissingServiceId),
        }
    }
}
