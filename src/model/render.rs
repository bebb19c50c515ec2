//! Rendering a filled-in model as deployment tool arguments.
//!
//! Output is one line: the network token first, then one token per entry
//! that has something to say, separated by single spaces. The network token
//! is quoted as a whole since network names routinely contain spaces.
//!
//! ```text
//! "--net:VM Network=prod" --prop:vm.ip="10.0.0.1" --vService:installation=com.vmware.vim.vsm:extension_vservice
//! ```

use super::{ConfigurableProperty, PropertyModel, PropertyRecord};

/// Provider bound to every vService dependency.
pub const DEFAULT_VSERVICE_BINDING: &str = "com.vmware.vim.vsm:extension_vservice";

impl ConfigurableProperty {
    /// `class.key.instance` with absent parts left out.
    pub fn qualifier(&self) -> String {
        [
            self.class_name.as_deref(),
            Some(self.key.as_str()),
            self.instance.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(".")
    }
}

impl PropertyRecord {
    /// The argument this record contributes, if any.
    ///
    /// Hardware records never render; configurable properties render only
    /// once they hold a non-empty value.
    pub fn argument(&self, vservice_binding: &str) -> Option<String> {
        match self {
            PropertyRecord::Hardware(_) => None,
            PropertyRecord::Configurable(property) => match property.value.as_deref() {
                Some(value) if !value.is_empty() => {
                    Some(format!("--prop:{}=\"{}\"", property.qualifier(), value))
                }
                _ => None,
            },
            PropertyRecord::ServiceDependency(dependency) => {
                Some(format!("--vService:{}={}", dependency.id, vservice_binding))
            }
        }
    }
}

/// Render with the default vService binding.
pub fn render(model: &PropertyModel) -> String {
    render_with_binding(model, DEFAULT_VSERVICE_BINDING)
}

pub fn render_with_binding(model: &PropertyModel, vservice_binding: &str) -> String {
    let network = format!(
        "\"--net:{}={}\"",
        model.network_name().unwrap_or_default(),
        model.network_value().unwrap_or_default()
    );

    std::iter::once(network)
        .chain(
            model
                .entries()
                .iter()
                .filter_map(|entry| entry.argument(vservice_binding)),
        )
        .collect::<Vec<_>>()
        .join(" ")
}
