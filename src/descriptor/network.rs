//! Network section reader.

use super::{attr, first_child, Descriptor};

/// Name of the first network declared in the envelope's `NetworkSection`.
///
/// Returns `None` when there is no network section, when it declares no
/// networks, or when the first network has no `ovf:name`. Networks after
/// the first are ignored.
pub fn read_network(descriptor: &Descriptor<'_>) -> Option<String> {
    let ovf = descriptor.namespaces().ovf.as_str();
    let section = first_child(descriptor.envelope(), ovf, "NetworkSection")?;
    let network = first_child(section, ovf, "Network")?;
    attr(network, ovf, "name")
}
