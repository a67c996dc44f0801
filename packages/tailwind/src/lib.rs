//! Tailwind configuration for the sudoku generator page.
//!
//! Tailwind only keeps the utility classes it finds in the files it scans. The generator page uses classes
//! from its templates and from the form controller script, so both have to be on the content allow-list.
//! [`TailwindConfig`] is that allow-list as data: it can be loaded from TOML, checked, and rendered into the
//! `tailwind.config.js` module the tailwind CLI expects.

use std::{fmt::Write as _, path::Path};

use serde::{Deserialize, Serialize};

mod error;
mod matcher;

pub use error::{Error, Result};
pub use matcher::ContentMatcher;

/// File name the tailwind CLI looks for.
pub const CONFIG_FILE: &str = "tailwind.config.js";

/// Templates in every extension the page renders, and every script under `static`.
pub const DEFAULT_CONTENT: [&str; 2] = ["./templates/**/*.{html,jinja,jinja2}", "./static/**/*.js"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindConfig {
    /// Globs of the files to scan for class names, relative to the web root.
    pub content: Vec<String>,

    pub theme: ThemeConfig,

    /// Plugin module specifiers, e.g. `@tailwindcss/forms`.
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Merged over tailwind's default theme.
    pub extend: serde_json::Map<String, serde_json::Value>,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT.iter().map(|s| s.to_string()).collect(),
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tailwind: TailwindConfig,
}

impl TailwindConfig {
    /// Parse the `[tailwind]` table of a TOML document. Anything left out keeps its default.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        file.tailwind.validate()?;
        Ok(file.tailwind)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading tailwind config from {}", path.display());
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Check that there is something to scan, every glob compiles, and every plugin is a plain module name.
    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(Error::EmptyContent);
        }

        ContentMatcher::new(self.content.as_slice())?;

        for plugin in &self.plugins {
            let valid = !plugin.is_empty()
                && !plugin.starts_with('/')
                && !plugin.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\');
            if !valid {
                return Err(Error::InvalidPlugin(plugin.clone()));
            }
        }

        Ok(())
    }

    pub fn matcher(&self) -> Result<ContentMatcher> {
        ContentMatcher::new(self.content.as_slice())
    }

    /// Render the config as the ES module tailwind loads.
    pub fn render_js(&self) -> String {
        let mut out = String::new();

        for (idx, plugin) in self.plugins.iter().enumerate() {
            _ = writeln!(out, "import plugin{idx} from {};", quote(plugin));
        }
        if !self.plugins.is_empty() {
            out.push('\n');
        }

        out.push_str("/** @type {import('tailwindcss').Config} */\n");
        out.push_str("export default {\n");

        out.push_str("  content: [\n");
        let content = self
            .content
            .iter()
            .map(|glob| format!("    {}", quote(glob)))
            .collect::<Vec<_>>()
            .join(",\n");
        out.push_str(&content);
        out.push_str("\n  ],\n");

        out.push_str("  theme: {\n");
        _ = writeln!(
            out,
            "    extend: {},",
            serde_json::Value::Object(self.theme.extend.clone())
        );
        out.push_str("  },\n");

        let plugins = (0..self.plugins.len())
            .map(|idx| format!("plugin{idx}"))
            .collect::<Vec<_>>()
            .join(", ");
        _ = writeln!(out, "  plugins: [{plugins}],");

        out.push_str("}\n");
        out
    }

    /// Write [`CONFIG_FILE`] into `dir`, returning the path written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<std::path::PathBuf> {
        let path = dir.as_ref().join(CONFIG_FILE);
        std::fs::write(&path, self.render_js())?;
        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }
}

fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
