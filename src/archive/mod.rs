//! Locating the descriptor inside an OVA.
//!
//! An OVA is a plain tar stream. Every member is enumerated so that a second
//! descriptor is always noticed, but only the descriptor's bytes are read;
//! disk images and manifests are skipped over.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::OvaError;

/// Default suffix identifying the descriptor member.
pub const DESCRIPTOR_SUFFIX: &str = ".ovf";

const MAX_PREALLOCATION: u64 = 1 << 20;

/// The descriptor member pulled out of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorMember {
    /// Member path as recorded in the archive.
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Open the OVA at `path` and pull out its descriptor.
///
/// `Ok(None)` means the archive has members but none ends in `suffix`.
/// The file handle is released before this returns, on every path.
pub fn extract_descriptor(
    path: &Path,
    suffix: &str,
) -> Result<Option<DescriptorMember>, OvaError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(OvaError::NotAnArchive("file is empty".to_string()));
    }
    read_descriptor(file, suffix)
}

/// Same as [`extract_descriptor`], over any tar stream.
pub fn read_descriptor<R: Read>(
    reader: R,
    suffix: &str,
) -> Result<Option<DescriptorMember>, OvaError> {
    let mut archive = tar::Archive::new(reader);
    let entries = archive.entries().map_err(not_an_archive)?;

    let mut members = 0usize;
    let mut found: Option<DescriptorMember> = None;

    for entry in entries {
        let mut entry = entry.map_err(not_an_archive)?;
        members += 1;

        let name = entry
            .path()
            .map_err(not_an_archive)?
            .to_string_lossy()
            .into_owned();
        debug!(member = %name, size = entry.size(), "archive member");

        if !name.ends_with(suffix) {
            continue;
        }
        if let Some(first) = &found {
            return Err(OvaError::MultipleDescriptors {
                first: first.name.clone(),
                second: name,
            });
        }

        // The header size is untrusted.
        let declared = entry.size();
        let mut bytes = Vec::with_capacity(declared.min(MAX_PREALLOCATION) as usize);
        entry.read_to_end(&mut bytes)?;
        if bytes.len() as u64 != declared {
            return Err(OvaError::NotAnArchive(format!(
                "member '{}' is truncated: header declares {} bytes, read {}",
                name,
                declared,
                bytes.len()
            )));
        }
        found = Some(DescriptorMember { name, bytes });
    }

    if members == 0 {
        return Err(OvaError::EmptyArchive);
    }
    Ok(found)
}

fn not_an_archive(err: std::io::Error) -> OvaError {
    OvaError::NotAnArchive(err.to_string())
}
