//! Optional TOML configuration.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! stock OVF/ovftool behaviour:
//!
//! ```toml
//! descriptor_suffix = ".ovf"
//! vservice_binding = "com.vmware.vim.vsm:extension_vservice"
//!
//! [namespaces]
//! ovf = "http://schemas.dmtf.org/ovf/envelope/1"
//! vmw = "http://www.vmware.com/schema/ovf"
//! rasd = "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ResourceAllocationSettingData"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::archive::DESCRIPTOR_SUFFIX;
use crate::descriptor::Namespaces;
use crate::model::render::DEFAULT_VSERVICE_BINDING;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Suffix of the archive member holding the descriptor.
    pub descriptor_suffix: String,
    /// Provider written after every `--vService:<id>=`.
    pub vservice_binding: String,
    pub namespaces: Namespaces,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptor_suffix: DESCRIPTOR_SUFFIX.to_string(),
            vservice_binding: DEFAULT_VSERVICE_BINDING.to_string(),
            namespaces: Namespaces::default(),
        }
    }
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("parsing config '{}'", path.display()))?;
    validate(&config).with_context(|| format!("invalid config '{}'", path.display()))?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.descriptor_suffix.is_empty() {
        bail!("descriptor_suffix must not be empty");
    }
    if config.vservice_binding.is_empty() {
        bail!("vservice_binding must not be empty");
    }
    for (field, uri) in [
        ("ovf", &config.namespaces.ovf),
        ("vmw", &config.namespaces.vmw),
        ("rasd", &config.namespaces.rasd),
    ] {
        if uri.trim().is_empty() {
            bail!("namespaces.{field} must not be empty");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{OVF_NAMESPACE, RASD_NAMESPACE};
    use tempfile::TempDir;

    fn load(contents: &str) -> Result<Config> {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ova-properties.toml");
        fs::write(&path, contents).unwrap();
        load_config(&path)
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(load("").unwrap(), Config::default());
    }

    #[test]
    fn partial_namespaces_keep_other_defaults() {
        let config = load("[namespaces]\nvmw = \"urn:example:vmw\"\n").unwrap();
        assert_eq!(config.namespaces.vmw, "urn:example:vmw");
        assert_eq!(config.namespaces.ovf, OVF_NAMESPACE);
        assert_eq!(config.namespaces.rasd, RASD_NAMESPACE);
        assert_eq!(config.descriptor_suffix, ".ovf");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = load("descriptor_sufix = \".ovf\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn empty_values_are_rejected() {
        let err = load("descriptor_suffix = \"\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("descriptor_suffix must not be empty"));

        let err = load("[namespaces]\novf = \" \"\n").unwrap_err();
        assert!(format!("{err:#}").contains("namespaces.ovf must not be empty"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_config(Path::new("/nonexistent/ova-properties.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/ova-properties.toml"));
    }
}
