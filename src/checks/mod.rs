//! Document checks
//!
//! This module provides the check framework and the seven checks applied to
//! every Markdown document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ValidationEngine                         │
//! │  - Registers checks in evaluation order                     │
//! │  - Reads documents through a DocumentSource                 │
//! │  - Validates documents in parallel (rayon)                  │
//! │  - Scores files and reduces them into a corpus result       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Check Trait                           │
//! │  - kind(): Which check this is                              │
//! │  - description(): Human-readable description                │
//! │  - check(content, ctx): Pure evaluation, returns issues     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Checks (evaluation order)
//!
//! - `StructureCheck` - H1 title, version and last-updated lines
//! - `RequiredSectionsCheck` - Level-2 sections required by the category
//! - `ToolIntegrationCheck` - Tool usage recorded in change logs and research
//! - `TemplateComplianceCheck` - Populated tables in templated reports
//! - `CrossReferencesCheck` - Relative links point at existing files
//! - `FormattingCheck` - Heading hierarchy and bullet consistency
//! - `TimestampsCheck` - Valid date-times
//!
//! # Usage
//!
//! ```ignore
//! use docaudit::checks::ValidationEngineBuilder;
//!
//! let engine = ValidationEngineBuilder::new().workers(4).build();
//! let corpus = engine.validate_corpus(&paths);
//! ```

mod base;
mod cross_references;
mod engine;
mod formatting;
mod required_sections;
mod source;
mod structure;
mod template_compliance;
mod timestamps;
mod tool_integration;

pub use base::{Check, CheckContext};
pub use cross_references::{extract_links, normalize_path, resolve_link, CrossReferencesCheck, Link};
pub use engine::{ProgressCallback, ValidationEngine, ValidationEngineBuilder};
pub use formatting::{heading_levels, FormattingCheck};
pub use required_sections::RequiredSectionsCheck;
pub use source::{DocumentSource, FsSource};
pub use structure::StructureCheck;
pub use template_compliance::{TemplateComplianceCheck, TEMPLATE_MARKERS};
pub use timestamps::{validate_timestamp, TimestampDefect, TimestampsCheck};
pub use tool_integration::{mentioned_tools, ToolIntegrationCheck};

use std::sync::Arc;

/// The seven standard checks, in evaluation order
pub fn default_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(StructureCheck::new()),
        Arc::new(RequiredSectionsCheck::new()),
        Arc::new(ToolIntegrationCheck::new()),
        Arc::new(TemplateComplianceCheck::new()),
        Arc::new(CrossReferencesCheck::new()),
        Arc::new(FormattingCheck::new()),
        Arc::new(TimestampsCheck::new()),
    ]
}
