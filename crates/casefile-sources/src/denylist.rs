use glob::Pattern;
use std::path::Path;

/// Glob denylist applied to paths relative to the scan root
pub struct Denylist {
    patterns: Vec<Pattern>,
}

impl Denylist {
    /// Create new denylist from pattern strings. Invalid patterns are ignored.
    pub fn new(patterns: Vec<String>) -> Self {
        let compiled: Vec<Pattern> = patterns
            .into_iter()
            .filter_map(|p| match Pattern::new(&p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!("Ignoring invalid denylist pattern {:?}: {}", p, e);
                    None
                }
            })
            .collect();

        Self { patterns: compiled }
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Check if a relative path matches any deny pattern
    pub fn is_denied(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    /// Check `path` against the patterns after making it relative to `root`.
    /// The root itself is never denied.
    pub fn is_denied_under(&self, root: &Path, path: &Path) -> bool {
        self.matching_pattern_under(root, path).is_some()
    }

    /// First pattern denying `path` relative to `root`, for log messages
    pub fn matching_pattern_under(&self, root: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }

        let normalized = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        self.matching_pattern(&normalized)
    }

    /// Get first matching pattern
    pub fn matching_pattern(&self, path: &str) -> Option<String> {
        self.patterns
            .iter()
            .find(|p| p.matches(path))
            .map(|p| p.as_str().to_string())
    }
}
