//! Property model built from a single OVA.
//!
//! The model is built once, filled in by the prompting step, rendered, and
//! dropped. Entries keep descriptor document order and are never sorted or
//! deduplicated, even when keys repeat.

pub mod render;

use std::path::Path;

use tracing::{debug, info};

use crate::archive::extract_descriptor;
use crate::config::Config;
use crate::descriptor::network::read_network;
use crate::descriptor::virtual_system::collect_properties;
use crate::descriptor::Descriptor;
use crate::error::{OvaError, SkippedEntry};

/// `kind` used for the guest OS type record.
pub const OS_TYPE_KIND: &str = "osType";

/// Informational hardware fact. Never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareProperty {
    /// [`OS_TYPE_KIND`] or a CIM resource type code (`"10"` for Ethernet, ...).
    pub kind: String,
    /// OS type string or resource sub-type (`"VmxNet3"`, `"lsilogic"`, ...).
    pub value: Option<String>,
}

/// A product property the operator supplies at deploy time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurableProperty {
    pub category: String,
    pub label: String,
    pub description: Option<String>,
    pub key: String,
    /// `ovf:class` of the enclosing product section.
    pub class_name: Option<String>,
    /// `ovf:instance` of the enclosing product section.
    pub instance: Option<String>,
    /// Filled in before rendering; `None` or empty means "leave unset".
    pub value: Option<String>,
}

impl ConfigurableProperty {
    /// Text shown when asking for this property's value.
    pub fn prompt(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.label)
    }
}

/// A vService extension the platform must bind at deploy time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDependency {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyRecord {
    Hardware(HardwareProperty),
    Configurable(ConfigurableProperty),
    ServiceDependency(ServiceDependency),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyModel {
    network_name: Option<String>,
    network_value: Option<String>,
    entries: Vec<PropertyRecord>,
    skipped: Vec<SkippedEntry>,
}

impl PropertyModel {
    pub fn new(
        network_name: Option<String>,
        entries: Vec<PropertyRecord>,
        skipped: Vec<SkippedEntry>,
    ) -> Self {
        Self {
            network_name,
            network_value: None,
            entries,
            skipped,
        }
    }

    /// Read the network section and walk every virtual system.
    pub fn from_descriptor(descriptor: &Descriptor<'_>) -> Self {
        let network_name = read_network(descriptor);
        let collected = collect_properties(descriptor);
        Self::new(network_name, collected.entries, collected.skipped)
    }

    /// Network name declared by the descriptor.
    pub fn network_name(&self) -> Option<&str> {
        self.network_name.as_deref()
    }

    /// Network the operator bound it to.
    pub fn network_value(&self) -> Option<&str> {
        self.network_value.as_deref()
    }

    pub fn set_network_value(&mut self, value: impl Into<String>) {
        self.network_value = Some(value.into());
    }

    pub fn entries(&self) -> &[PropertyRecord] {
        &self.entries
    }

    /// Configurable properties in entry order, for filling in values.
    pub fn configurable_mut(&mut self) -> impl Iterator<Item = &mut ConfigurableProperty> {
        self.entries.iter_mut().filter_map(|entry| match entry {
            PropertyRecord::Configurable(property) => Some(property),
            _ => None,
        })
    }

    /// Entries dropped while walking the descriptor.
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }
}

/// Extract, parse and walk the descriptor of the OVA at `path`.
///
/// The archive is closed before the descriptor is parsed. An archive whose
/// members include no descriptor is [`OvaError::MissingDescriptor`].
pub fn load_model(path: &Path, config: &Config) -> Result<PropertyModel, OvaError> {
    let member = extract_descriptor(path, &config.descriptor_suffix)?.ok_or_else(|| {
        OvaError::MissingDescriptor {
            suffix: config.descriptor_suffix.clone(),
        }
    })?;
    debug!(descriptor = %member.name, bytes = member.bytes.len(), "extracted descriptor");

    let text = Descriptor::decode(&member.name, &member.bytes)?;
    let descriptor = Descriptor::parse(&member.name, text, &config.namespaces)?;
    let model = PropertyModel::from_descriptor(&descriptor);

    info!(
        network = model.network_name().unwrap_or("<none>"),
        entries = model.entries().len(),
        skipped = model.skipped().len(),
        "loaded property model"
    );
    Ok(model)
}
