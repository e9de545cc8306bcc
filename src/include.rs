//! WGSL `#include` preprocessing
//!
//! Shader sources may pull in shared headers with `#include "name"` or
//! `#include <name>`. Inclusion is purely textual and happens before the
//! source reaches the shader compiler; there is no versioning or module
//! resolution beyond a name lookup. Names resolve against the embedded
//! registry first, then on disk: the including file's own directory (for
//! includes that came from disk themselves), then caller-supplied include
//! directories.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ShaderError, ShaderResult};
use crate::shaders::COMMON_WGSL;

/// Look up an include that ships embedded in the crate.
pub fn builtin_include(name: &str) -> Option<&'static str> {
    if name == crate::constants::includes::COMMON {
        Some(COMMON_WGSL)
    } else {
        None
    }
}

/// Expands `#include` directives in WGSL source.
///
/// Each include is expanded at most once per preprocessor instance, so a
/// header that is pulled in from several places (or circularly) lands in the
/// output exactly once.
pub struct WgslPreprocessor {
    include_dirs: Vec<PathBuf>,
    expanded: HashSet<String>,
}

impl WgslPreprocessor {
    pub fn new() -> Self {
        Self {
            include_dirs: Vec::new(),
            expanded: HashSet::new(),
        }
    }

    /// Add a directory to search for include files not found in the
    /// embedded registry.
    pub fn add_include_dir<P: Into<PathBuf>>(&mut self, path: P) {
        self.include_dirs.push(path.into());
    }

    /// Process WGSL content, resolving all `#include` directives.
    pub fn process(&mut self, content: &str) -> ShaderResult<String> {
        self.process_from(content, None)
    }

    /// `origin` is the directory of the file `content` was read from, so a
    /// disk include can pull in a sibling by name.
    fn process_from(&mut self, content: &str, origin: Option<&Path>) -> ShaderResult<String> {
        let mut result = String::new();

        for line in content.lines() {
            match Self::parse_include_directive(line) {
                Some(name) => {
                    if self.expanded.contains(&name) {
                        result.push_str("// Skipped repeated include: ");
                        result.push_str(&name);
                        result.push('\n');
                        continue;
                    }
                    self.expanded.insert(name.clone());

                    let (included, included_dir) = self.resolve(&name, origin)?;
                    let processed = self.process_from(&included, included_dir.as_deref())?;

                    result.push_str("// Begin include: ");
                    result.push_str(&name);
                    result.push('\n');
                    result.push_str(&processed);
                    result.push_str("// End include: ");
                    result.push_str(&name);
                    result.push('\n');
                }
                None => {
                    result.push_str(line);
                    result.push('\n');
                }
            }
        }

        Ok(result)
    }

    /// Returns the included source and, for disk files, the directory it was
    /// read from.
    fn resolve(&self, name: &str, origin: Option<&Path>) -> ShaderResult<(String, Option<PathBuf>)> {
        if let Some(source) = builtin_include(name) {
            log::debug!("resolved include '{}' from embedded registry", name);
            return Ok((source.to_string(), None));
        }

        let dirs = origin.into_iter().chain(self.include_dirs.iter().map(PathBuf::as_path));
        for dir in dirs {
            let candidate = dir.join(name);
            if candidate.exists() {
                log::debug!("resolved include '{}' from {}", name, dir.display());
                let source = fs::read_to_string(&candidate).map_err(|source| {
                    ShaderError::IncludeIo {
                        name: name.to_string(),
                        source,
                    }
                })?;
                return Ok((source, candidate.parent().map(Path::to_path_buf)));
            }
        }

        Err(ShaderError::UnknownInclude(name.to_string()))
    }

    /// Parse an `#include` directive. Supports `#include "file.wgsl"` and
    /// `#include <file.wgsl>`.
    fn parse_include_directive(line: &str) -> Option<String> {
        let trimmed = line.trim();
        let after = trimmed.strip_prefix("#include")?.trim();

        if after.starts_with('"') && after.ends_with('"') && after.len() >= 2 {
            Some(after.trim_matches('"').to_string())
        } else if after.starts_with('<') && after.ends_with('>') && after.len() >= 2 {
            Some(after[1..after.len() - 1].to_string())
        } else {
            None
        }
    }
}

impl Default for WgslPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand includes in `content` using only the embedded registry.
pub fn preprocess(content: &str) -> ShaderResult<String> {
    WgslPreprocessor::new().process(content)
}
