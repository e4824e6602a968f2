//! The dependency manifest.
//!
//! What to provision is data, not code: a YAML manifest lists the apt
//! packages every build host needs, the libraries that must be built from
//! source, and a per-library recipe (download URL, extra packages, ordered
//! configure steps). The default manifest is embedded in the binary;
//! `--manifest` swaps in another file with the same schema.

pub mod template;

use crate::error::{DepstrapError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The embedded default manifest.
const DEFAULT_MANIFEST: &str = include_str!("default.yml");

/// A complete dependency manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Apt packages required regardless of the source-built libraries.
    #[serde(default)]
    pub global_packages: Vec<String>,

    /// Names of libraries to build from source, in order.
    #[serde(default)]
    pub enabled: Vec<String>,

    /// Library descriptors, keyed by name.
    #[serde(default)]
    pub libraries: BTreeMap<String, Library>,
}

/// One source-built library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    /// Upstream version, informational.
    pub version: String,

    /// Source tarball URL.
    pub download_url: String,

    /// Apt packages this library additionally requires.
    #[serde(default)]
    pub extra_packages: Vec<String>,

    /// Ordered configure recipe; empty means download-and-extract only.
    #[serde(default)]
    pub configure_steps: Vec<ConfigureStep>,
}

/// One action in a library's configure recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigureStep {
    /// Create a directory relative to the extracted source root.
    Mkdir(String),

    /// Run the configure command from this directory (relative to the
    /// source root) instead of from the source root itself.
    Chdir(String),

    /// Synthesize the configure command line from a placeholder template.
    Configure(String),
}

impl Manifest {
    /// Parse the manifest embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_MANIFEST)
    }

    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DepstrapError::ManifestParseError {
                message: format!("{}: {}", path.display(), e),
            }
        })?;
        Self::parse(&content)
    }

    /// Parse a manifest from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_yaml::from_str(content).map_err(|e| DepstrapError::ManifestParseError {
                message: e.to_string(),
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate cross-references and required fields.
    pub fn validate(&self) -> Result<()> {
        for name in &self.enabled {
            let library =
                self.libraries
                    .get(name)
                    .ok_or_else(|| DepstrapError::ManifestValidationError {
                        message: format!("enabled library '{}' has no descriptor", name),
                    })?;
            if library.download_url.is_empty() {
                return Err(DepstrapError::ManifestValidationError {
                    message: format!("library '{}' has an empty download URL", name),
                });
            }
        }
        Ok(())
    }

    /// Resolve the enabled libraries in declaration order.
    ///
    /// `only` narrows the set; naming a library that is not enabled is an
    /// error so typos fail before any side effect.
    pub fn enabled_libraries(&self, only: &[String]) -> Result<Vec<(&str, &Library)>> {
        for requested in only {
            if !self.enabled.contains(requested) {
                return Err(DepstrapError::UnknownLibrary {
                    name: requested.clone(),
                });
            }
        }

        self.enabled
            .iter()
            .filter(|name| only.is_empty() || only.contains(name))
            .map(|name| {
                // validate() guarantees the descriptor exists
                let library =
                    self.libraries
                        .get(name)
                        .ok_or_else(|| DepstrapError::UnknownLibrary {
                            name: name.clone(),
                        })?;
                Ok((name.as_str(), library))
            })
            .collect()
    }
}
