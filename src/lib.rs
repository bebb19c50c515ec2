//! Turn the configurable properties of an OVA into deployment tool arguments.
//!
//! An OVA bundles an OVF descriptor with disk images. The descriptor names a
//! network, describes each virtual system's hardware, lists user-configurable
//! product properties and declares vService dependencies. This crate pulls
//! those out into a [`PropertyModel`], lets a caller fill in values, and
//! renders the result as `--net:`, `--prop:` and `--vService:` flags.
//!
//! # Architecture
//!
//! ```text
//! appliance.ova
//!     │
//!     ├── archive::extract_descriptor      exactly one *.ovf member
//!     │
//!     ├── descriptor::Descriptor::parse    namespace-aware XML tree
//!     │       ├── network::read_network            first declared network
//!     │       └── virtual_system::collect_properties
//!     │               hardware → product properties → vService dependencies
//!     │
//!     ├── model::PropertyModel             ordered records + network
//!     │       └── prompt::fill_interactively       operator supplies values
//!     │
//!     └── model::render::render            one line of arguments
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use ova_properties::{load_model, render, Config};
//!
//! let config = Config::default();
//! let mut model = load_model(Path::new("appliance.ova"), &config)?;
//! model.set_network_value("VM Network");
//! for property in model.configurable_mut() {
//!     property.value = Some("value".to_string());
//! }
//! println!("{}", render(&model));
//! ```

pub mod archive;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod prompt;

#[cfg(test)]
mod fixtures;

pub use config::{load_config, Config};
pub use error::{IncompleteEntry, OvaError, SkippedEntry};
pub use model::render::{render, render_with_binding};
pub use model::{
    load_model, ConfigurableProperty, HardwareProperty, PropertyModel, PropertyRecord,
    ServiceDependency,
};
