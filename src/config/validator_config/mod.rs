//! Validator configuration support
//!
//! Loads the rule tables from `docaudit.toml` or `.docauditrc.json` in the
//! documentation root. Every field is optional; anything left out falls back
//! to the built-in tables.
//!
//! # Configuration Format
//!
//! ```toml
//! # docaudit.toml
//!
//! [documentation.required_sections]
//! research = ["Research Questions", "Methodology", "Findings"]
//!
//! [documentation.exclude]
//! paths = ["archive/**", "**/drafts/**"]
//!
//! [mcp_integration]
//! gated_categories = ["change_log", "research"]
//! servers = ["Brave Search", "Context7", "GitHub MCP", "Playwright"]
//!
//! [mcp_integration.optimization_targets."Brave Search"]
//! target_usage = "7"
//!
//! [research]
//! [testing]
//! ```
//!
//! A config that is named explicitly but missing, or that fails to parse,
//! yields [`ValidatorConfig::unavailable`]: category tables become empty and
//! every category-gated check passes vacuously.

use crate::error::AuditError;
use crate::models::Category;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// File names probed in the documentation root, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["docaudit.toml", ".docauditrc.json"];

/// Built-in tool vocabulary
pub const DEFAULT_SERVERS: &[&str] = &["Brave Search", "Context7", "GitHub MCP", "Playwright"];

/// Categories whose documents must record tool usage by default
pub const DEFAULT_GATED_CATEGORIES: &[Category] = &[Category::ChangeLog, Category::Research];

/// Built-in required sections per category
pub fn default_required_sections(category: Category) -> &'static [&'static str] {
    match category {
        Category::ChangeLog => &[
            "Change",
            "Goal",
            "Research Conducted",
            "Files Modified",
            "Testing Done",
            "Result",
            "Next Steps",
        ],
        Category::CurrentStatus => &[
            "Project Overview",
            "Current Critical Status",
            "Development Phase",
            "Success Metrics",
            "Next Session Focus",
        ],
        Category::McpUsage => &[
            "MCP Server Usage",
            "Effectiveness Analysis",
            "Optimization Recommendations",
        ],
        Category::Research => &["Research Questions", "Methodology", "Findings", "Implementation"],
        Category::General => &[],
    }
}

/// Complete validator configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub documentation: DocumentationRules,

    #[serde(default)]
    pub mcp_integration: ToolIntegrationRules,

    /// Recognized but not consumed by the checks
    #[serde(default)]
    pub research: BTreeMap<String, serde_json::Value>,

    /// Recognized but not consumed by the checks
    #[serde(default)]
    pub testing: BTreeMap<String, serde_json::Value>,

    /// Set when the config could not be loaded
    #[serde(skip)]
    degraded: bool,
}

/// `[documentation]` group
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DocumentationRules {
    /// Per-category overrides of the built-in section table, keyed by
    /// category name (`change_log` or `change-log`)
    #[serde(default)]
    pub required_sections: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

/// `[mcp_integration]` group
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ToolIntegrationRules {
    #[serde(default)]
    pub gated_categories: Option<Vec<Category>>,

    #[serde(default)]
    pub servers: Option<Vec<String>>,

    #[serde(default)]
    pub optimization_targets: BTreeMap<String, OptimizationTarget>,
}

/// Target for one tool, e.g. `target_usage = "7"`
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct OptimizationTarget {
    #[serde(default)]
    pub target_usage: UsageTarget,
}

/// Raw shape of a target as it appears in config files
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTarget {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Booleans, arrays, tables: kept loadable, normalized to unknown
    Other(serde::de::IgnoredAny),
}

/// A usage target normalized at load time: a count or unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawTarget")]
pub enum UsageTarget {
    Weekly(u32),
    #[default]
    Unknown,
}

impl From<RawTarget> for UsageTarget {
    fn from(raw: RawTarget) -> Self {
        match raw {
            RawTarget::Integer(v) => u32::try_from(v)
                .map(UsageTarget::Weekly)
                .unwrap_or(UsageTarget::Unknown),
            RawTarget::Float(v) if v.is_finite() && v >= 0.0 && v <= u32::MAX as f64 => {
                UsageTarget::Weekly(v.round() as u32)
            }
            RawTarget::Float(_) => UsageTarget::Unknown,
            RawTarget::Text(s) => s
                .trim()
                .parse::<u32>()
                .map(UsageTarget::Weekly)
                .unwrap_or(UsageTarget::Unknown),
            RawTarget::Other(_) => UsageTarget::Unknown,
        }
    }
}

impl UsageTarget {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            UsageTarget::Weekly(n) => Some(*n),
            UsageTarget::Unknown => None,
        }
    }
}

impl std::fmt::Display for UsageTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageTarget::Weekly(n) => write!(f, "{}", n),
            UsageTarget::Unknown => f.write_str("unknown"),
        }
    }
}

// Serialized as a bare number or the string "unknown"
impl Serialize for UsageTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UsageTarget::Weekly(n) => serializer.serialize_u32(*n),
            UsageTarget::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

/// Path exclusion configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExcludeConfig {
    /// Paths/patterns (relative to the documentation root) to skip
    #[serde(default)]
    pub paths: Vec<String>,
}

impl ValidatorConfig {
    /// Degraded configuration used when the config could not be loaded
    pub fn unavailable() -> Self {
        Self {
            degraded: true,
            ..Self::default()
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Required section names for a category
    pub fn required_sections(&self, category: Category) -> Vec<String> {
        if self.degraded {
            return Vec::new();
        }
        let configured = self
            .documentation
            .required_sections
            .iter()
            .find(|(key, _)| key.trim().to_lowercase().replace('-', "_") == category.as_str());
        match configured {
            Some((_, sections)) => sections.clone(),
            None => default_required_sections(category)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Whether documents of this category must record tool usage
    pub fn requires_tool_usage(&self, category: Category) -> bool {
        if self.degraded {
            return false;
        }
        match &self.mcp_integration.gated_categories {
            Some(categories) => categories.contains(&category),
            None => DEFAULT_GATED_CATEGORIES.contains(&category),
        }
    }

    /// Tool vocabulary: configured servers plus any server that has a target
    pub fn tool_vocabulary(&self) -> Vec<String> {
        let mut servers: Vec<String> = match &self.mcp_integration.servers {
            Some(list) => list.clone(),
            None => DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect(),
        };
        for name in self.mcp_integration.optimization_targets.keys() {
            if !servers.iter().any(|s| s.eq_ignore_ascii_case(name)) {
                servers.push(name.clone());
            }
        }
        servers
    }

    /// Normalized usage target for a server
    pub fn usage_target(&self, server: &str) -> UsageTarget {
        self.mcp_integration
            .optimization_targets
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(server))
            .map(|(_, t)| t.target_usage)
            .unwrap_or_default()
    }

    /// Check if a path (relative to the documentation root) should be excluded
    pub fn should_exclude(&self, relative: &Path) -> bool {
        let path_str = relative.to_string_lossy().replace('\\', "/");
        self.documentation
            .exclude
            .paths
            .iter()
            .any(|pattern| glob_match(pattern, &path_str))
    }
}

/// Load configuration from the documentation root
///
/// Tries each of [`CONFIG_FILE_NAMES`]; a file that fails to parse makes the
/// config unavailable. When no file exists the built-in tables are used.
pub fn load_validator_config(root: &Path) -> ValidatorConfig {
    for name in CONFIG_FILE_NAMES {
        let path = root.join(name);
        if path.exists() {
            return match load_config_file(&path) {
                Ok(config) => {
                    debug!("Loaded validator config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("{}; category rules disabled", e);
                    ValidatorConfig::unavailable()
                }
            };
        }
    }

    debug!("No validator config found, using built-in rules");
    ValidatorConfig::default()
}

/// Resolve the effective config: an explicit path wins over discovery
pub fn resolve_config(root: &Path, explicit: Option<&Path>) -> ValidatorConfig {
    match explicit {
        Some(path) => match load_config_file(path) {
            Ok(config) => {
                debug!("Loaded validator config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}; category rules disabled", e);
                ValidatorConfig::unavailable()
            }
        },
        None => load_validator_config(root),
    }
}

/// Load a config file, choosing the parser by extension (TOML unless `.json`)
pub fn load_config_file(path: &Path) -> Result<ValidatorConfig, AuditError> {
    let unavailable = |reason: String| AuditError::ConfigUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| unavailable(e.to_string()))
    } else {
        toml::from_str(&content).map_err(|e| unavailable(e.to_string()))
    }
}

/// Sample config written by `docaudit init`
pub const SAMPLE_CONFIG: &str = r#"# docaudit configuration
# Every key is optional; omitted keys use the built-in rules.

[documentation.required_sections]
# change_log = ["Change", "Goal", "Research Conducted", "Files Modified", "Testing Done", "Result", "Next Steps"]
# current_status = ["Project Overview", "Current Critical Status", "Development Phase", "Success Metrics", "Next Session Focus"]
# mcp_usage = ["MCP Server Usage", "Effectiveness Analysis", "Optimization Recommendations"]
# research = ["Research Questions", "Methodology", "Findings", "Implementation"]

[documentation.exclude]
# paths = ["archive/**"]

[mcp_integration]
# gated_categories = ["change_log", "research"]
# servers = ["Brave Search", "Context7", "GitHub MCP", "Playwright"]

# [mcp_integration.optimization_targets."Brave Search"]
# target_usage = "7"

[research]

[testing]
"#;

/// Simple glob pattern matching (supports `*` and `**`)
fn glob_match(pattern: &str, path: &str) -> bool {
    // **/X/** matches if path contains X as a directory
    if pattern.starts_with("**/") && pattern.ends_with("/**") {
        let middle = pattern.trim_start_matches("**/").trim_end_matches("/**");
        return path.contains(&format!("/{}/", middle))
            || path.starts_with(&format!("{}/", middle));
    }

    if pattern.contains("**") {
        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');
            if !prefix.is_empty() && !path.starts_with(prefix) {
                return false;
            }
            if !suffix.is_empty() && !suffix.contains('*') && !path.ends_with(suffix) {
                return false;
            }
            if let Some((before, after)) = suffix.split_once('*') {
                return path.contains(before) && path.ends_with(after);
            }
            return true;
        }
    }

    if let Some((prefix, suffix)) = pattern.split_once('*') {
        if !suffix.contains('*') {
            return path.starts_with(prefix) && path.ends_with(suffix);
        }
    }

    // "archive/" only matches "archive/x.md", not "notes/archive/x.md"
    path.starts_with(pattern) || path == pattern
}
