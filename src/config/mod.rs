//! Configuration module for docaudit
//!
//! This module handles:
//! - Validator configuration (docaudit.toml / .docauditrc.json)
//! - Required-section tables per document category
//! - Tool vocabulary and usage targets
//! - Path exclusions for the file collector

mod validator_config;

pub use validator_config::{
    default_required_sections,
    load_config_file,
    load_validator_config,
    resolve_config,
    DocumentationRules,
    ExcludeConfig,
    OptimizationTarget,
    RawTarget,
    ToolIntegrationRules,
    UsageTarget,
    ValidatorConfig,
    CONFIG_FILE_NAMES,
    DEFAULT_GATED_CATEGORIES,
    DEFAULT_SERVERS,
    SAMPLE_CONFIG,
};
