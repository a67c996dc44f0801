use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::{Error, Result};

/// The compiled content allow-list: which files tailwind reads class names from.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    patterns: Vec<String>,
    set: GlobSet,
}

impl ContentMatcher {
    /// Compile `patterns`. Paths are relative to the web root; a leading `./` is ignored.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(strip_dot(pattern))
                // `*` stays within one directory, `**` crosses them
                .literal_separator(true)
                .build()
                .map_err(|source| Error::Glob {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
            kept.push(pattern.to_string());
        }

        let set = builder.build().map_err(|source| Error::Glob {
            pattern: kept.join(", "),
            source,
        })?;

        Ok(Self {
            patterns: kept,
            set,
        })
    }

    /// Whether tailwind would scan `path`.
    pub fn is_scanned(&self, path: impl AsRef<Path>) -> bool {
        self.set.is_match(normalize(path.as_ref()))
    }

    /// The patterns that match `path`, as written in the config.
    pub fn matching(&self, path: impl AsRef<Path>) -> Vec<&str> {
        self.set
            .matches(normalize(path.as_ref()))
            .into_iter()
            .map(|idx| self.patterns[idx].as_str())
            .collect()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

fn strip_dot(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

fn normalize(path: &Path) -> &Path {
    path.strip_prefix("./").unwrap_or(path)
}
