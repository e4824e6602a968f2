//! Configure-command synthesis.
//!
//! A configure template is whitespace-tokenized; the first token names the
//! configure script relative to the extracted source root, every following
//! token may carry placeholders:
//!
//! - `<%prefix%>` - the install prefix path
//! - `<%libdir%>` - the library directory path
//! - `<%check_path:KEY=VALUE%>` - substitutes `KEY=VALUE` after verifying
//!   that VALUE exists on the filesystem; an absent path aborts synthesis
//! - `<%name%>` - caller-supplied extra substitutions
//!
//! A token still carrying `<%` after substitution is an error, so a
//! synthesized command never contains unresolved placeholders.

use crate::error::{DepstrapError, Result};
use crate::manifest::ConfigureStep;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The install-prefix placeholder.
pub const PREFIX_TOKEN: &str = "<%prefix%>";

/// The library-directory placeholder.
pub const LIBDIR_TOKEN: &str = "<%libdir%>";

const CHECK_PATH_OPEN: &str = "<%check_path:";
const PLACEHOLDER_CLOSE: &str = "%>";

/// Values available to placeholder substitution.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    /// Replacement for `<%prefix%>`.
    pub prefix: String,

    /// Replacement for `<%libdir%>`.
    pub libdir: String,

    /// Extra named substitutions, applied as `<%name%>`.
    pub extra: HashMap<String, String>,
}

impl Substitutions {
    /// Create substitutions for a prefix and library directory.
    pub fn new(prefix: impl Into<String>, libdir: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            libdir: libdir.into(),
            extra: HashMap::new(),
        }
    }

    /// Derive substitutions from an install layout.
    pub fn from_layout(layout: &crate::layout::InstallLayout) -> Self {
        Self::new(
            layout.prefix.display().to_string(),
            layout.libdir.display().to_string(),
        )
    }

    /// Add an extra named substitution.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

/// Synthesize a configure command line from a template.
///
/// `path_exists` is injectable so tests can synthesize recipes that
/// reference host toolchain paths.
pub fn synthesize(
    template: &str,
    source_root: &Path,
    subs: &Substitutions,
    path_exists: &dyn Fn(&Path) -> bool,
) -> Result<String> {
    let mut parts = Vec::new();

    for (i, raw) in template.split_whitespace().enumerate() {
        // The leading token is the configure script inside the source root.
        if i == 0 {
            parts.push(source_root.join(raw).display().to_string());
            continue;
        }

        let mut token = raw.to_string();
        token = token.replace(PREFIX_TOKEN, &subs.prefix);
        token = token.replace(LIBDIR_TOKEN, &subs.libdir);
        for (name, value) in &subs.extra {
            token = token.replace(&format!("<%{}%>", name), value);
        }

        if token.contains(CHECK_PATH_OPEN) {
            token = resolve_check_path(&token, path_exists)?;
        }

        if token.contains("<%") {
            return Err(DepstrapError::UnresolvedPlaceholder {
                token: raw.to_string(),
            });
        }

        parts.push(token);
    }

    Ok(parts.join(" "))
}

/// Strip the `<%check_path:...%>` markers and verify the referenced path.
///
/// For `KEY=VALUE` arguments the path is VALUE; a bare
/// `<%check_path:/some/path%>` token checks the whole remainder.
fn resolve_check_path(token: &str, path_exists: &dyn Fn(&Path) -> bool) -> Result<String> {
    let cleaned = token
        .replace(CHECK_PATH_OPEN, "")
        .replace(PLACEHOLDER_CLOSE, "");

    let checked = match cleaned.split_once('=') {
        Some((_, value)) => value,
        None => cleaned.as_str(),
    };

    if !path_exists(Path::new(checked)) {
        return Err(DepstrapError::MissingPath {
            path: PathBuf::from(checked),
        });
    }

    Ok(cleaned)
}

/// A synthesized configure invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedConfigure {
    /// The fully substituted command line.
    pub command: String,

    /// Directory the command should run from.
    pub working_dir: PathBuf,
}

/// Walk a library's configure recipe.
///
/// `mkdir` steps are realized through `create_dir`, `chdir` moves the
/// working directory, `configure` synthesizes the command. Returns `None`
/// for an empty recipe (download-and-extract-only libraries).
pub fn synthesize_steps(
    library: &str,
    steps: &[ConfigureStep],
    source_root: &Path,
    subs: &Substitutions,
    path_exists: &dyn Fn(&Path) -> bool,
    create_dir: &dyn Fn(&Path) -> Result<()>,
) -> Result<Option<SynthesizedConfigure>> {
    if steps.is_empty() {
        return Ok(None);
    }

    let mut working_dir = source_root.to_path_buf();
    let mut command = None;

    for step in steps {
        match step {
            ConfigureStep::Mkdir(rel) => {
                create_dir(&source_root.join(rel))?;
            }
            ConfigureStep::Chdir(rel) => {
                working_dir = source_root.join(rel);
            }
            ConfigureStep::Configure(template) => {
                command = Some(synthesize(template, source_root, subs, path_exists)?);
            }
        }
    }

    match command {
        Some(command) => Ok(Some(SynthesizedConfigure {
            command,
            working_dir,
        })),
        None => Err(DepstrapError::EmptyConfigureCommand {
            library: library.to_string(),
        }),
    }
}
