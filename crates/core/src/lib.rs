//! Qatalog core types: the tool record, the catalog snapshot, and the
//! load-failure taxonomy.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tri-state boolean field: `Some(true)`, `Some(false)`, or unknown.
///
/// Filter predicates distinguish a field *set to* `false` from an absent
/// field; an absent field fails any set boolean predicate.
pub type TriState = Option<bool>;

/// Wire keys of the catalog document, bit-exact.
///
/// The dataset predates this program; the irregular keys (the `Familly`
/// misspelling, the double spaces in two rating keys, the mixed-case
/// lifecycle keys) are preserved for compatibility with existing data files.
pub mod wire {
    pub const NAME: &str = "Tools";
    pub const DESCRIPTION: &str = "Description";
    pub const CATEGORY: &str = "Familly";
    pub const KIND: &str = "Type";
    pub const MATURITY: &str = "Maturity";
    pub const DEPLOYMENT_NEEDED: &str = "Type of deployment needed";
    pub const SECURITY_LEVEL: &str = "Security Level (1 = very light output, 5 = rich output)";
    pub const IMPORTANCE: &str = "Importance (1 = specific, 5 = important)";
    pub const IMPLEMENTATION_COMPLEXITY: &str =
        "Implementation complexity  (1 = easy, 5 = complex)";
    pub const AI_USAGE: &str = "Use AI  (1 = not at all, 5 = built on AI)";
    pub const IS_LOCAL: &str = "Is Local";
    pub const IS_MICROSOFT: &str = "Is Microsoft";
    pub const HAS_API: &str = "API";
    pub const QUALITY_GATE: &str = "Available as quality gate";
    pub const OWNER: &str = "Owner";
    pub const PRODUCT_LINK: &str = "Product Link";
    pub const LOGO_URL: &str = "Logo URL";
    pub const DEMO: &str = "Demo";
    pub const LC_CODE: &str = "Code";
    pub const LC_BUILD: &str = "Build";
    pub const LC_TEST: &str = "Test";
    pub const LC_RELEASE: &str = "release";
    pub const LC_DEPLOY: &str = "deploy";
    pub const LC_OPERATE: &str = "operate";
    pub const LC_MONITOR: &str = "monitor";
    pub const LC_PLAN: &str = "plan";
}

/// Lifecycle phase coverage, one tri-state per phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(rename = "Code", default)]
    pub code: TriState,
    #[serde(rename = "Build", default)]
    pub build: TriState,
    #[serde(rename = "Test", default)]
    pub test: TriState,
    #[serde(rename = "release", default)]
    pub release: TriState,
    #[serde(rename = "deploy", default)]
    pub deploy: TriState,
    #[serde(rename = "operate", default)]
    pub operate: TriState,
    #[serde(rename = "monitor", default)]
    pub monitor: TriState,
    #[serde(rename = "plan", default)]
    pub plan: TriState,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "Tools", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Primary enumerable facet ("family" in the dataset).
    #[serde(rename = "Familly", default)]
    pub category: String,
    /// Deployment/packaging facet (Agent, Core, Plugin, UI).
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Maturity", default)]
    pub maturity: String,
    #[serde(rename = "Type of deployment needed", default)]
    pub deployment_needed: String,
    #[serde(rename = "Security Level (1 = very light output, 5 = rich output)", default)]
    pub security_level: Option<u8>,
    #[serde(rename = "Importance (1 = specific, 5 = important)", default)]
    pub importance: Option<u8>,
    #[serde(rename = "Implementation complexity  (1 = easy, 5 = complex)", default)]
    pub implementation_complexity: Option<u8>,
    #[serde(rename = "Use AI  (1 = not at all, 5 = built on AI)", default)]
    pub ai_usage: Option<u8>,
    #[serde(rename = "Is Local", default)]
    pub is_local: TriState,
    #[serde(rename = "Is Microsoft", default)]
    pub is_microsoft: TriState,
    #[serde(rename = "API", default)]
    pub has_api: TriState,
    #[serde(rename = "Available as quality gate", default)]
    pub quality_gate: TriState,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    #[serde(rename = "Owner", default)]
    pub owner: Option<String>,
    #[serde(rename = "Product Link", default)]
    pub product_link: Option<String>,
    #[serde(rename = "Logo URL", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "Demo", default)]
    pub demo: Option<String>,
}

fn text(v: &Value, key: &str) -> String {
    v.get(key).and_then(Value::as_str).unwrap_or("").to_string()
}

// Empty strings count as absent, matching the truthiness checks the dataset
// was authored against.
fn opt_text(v: &Value, key: &str) -> Option<String> {
    v.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn tri(v: &Value, key: &str) -> TriState {
    v.get(key).and_then(Value::as_bool)
}

fn rating(v: &Value, key: &str) -> Option<u8> {
    v.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok())
}

impl Tool {
    /// Shape one raw catalog entry into a typed record.
    ///
    /// Lenient by contract: a missing or wrong-typed field maps to the absent
    /// value for its declared type. Per-entry validity never fails a load.
    pub fn from_value(v: &Value) -> Self {
        Self {
            name: text(v, wire::NAME),
            description: text(v, wire::DESCRIPTION),
            category: text(v, wire::CATEGORY),
            kind: text(v, wire::KIND),
            maturity: text(v, wire::MATURITY),
            deployment_needed: text(v, wire::DEPLOYMENT_NEEDED),
            security_level: rating(v, wire::SECURITY_LEVEL),
            importance: rating(v, wire::IMPORTANCE),
            implementation_complexity: rating(v, wire::IMPLEMENTATION_COMPLEXITY),
            ai_usage: rating(v, wire::AI_USAGE),
            is_local: tri(v, wire::IS_LOCAL),
            is_microsoft: tri(v, wire::IS_MICROSOFT),
            has_api: tri(v, wire::HAS_API),
            quality_gate: tri(v, wire::QUALITY_GATE),
            lifecycle: Lifecycle {
                code: tri(v, wire::LC_CODE),
                build: tri(v, wire::LC_BUILD),
                test: tri(v, wire::LC_TEST),
                release: tri(v, wire::LC_RELEASE),
                deploy: tri(v, wire::LC_DEPLOY),
                operate: tri(v, wire::LC_OPERATE),
                monitor: tri(v, wire::LC_MONITOR),
                plan: tri(v, wire::LC_PLAN),
            },
            owner: opt_text(v, wire::OWNER),
            product_link: opt_text(v, wire::PRODUCT_LINK),
            logo_url: opt_text(v, wire::LOGO_URL),
            demo: opt_text(v, wire::DEMO),
        }
    }
}

/// The catalog: an ordered sequence of tool records, assigned once at load
/// completion. Subsets preserve this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub tools: Vec<Tool>,
}

impl Catalog {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Failure taxonomy of the catalog loader, the only fallible component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("network: {0}")]
    Network(String),
    #[error("http {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("parse: {0}")]
    Parse(String),
    #[error("shape: {0}")]
    Shape(String),
    #[error("empty dataset")]
    Empty,
    #[error("unknown: {0}")]
    Unknown(String),
}

impl LoadError {
    /// The single user-visible sentence shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Network(_) => {
                "Unable to connect. Please check your internet connection and try again."
                    .to_string()
            }
            LoadError::Http { status, status_text } => {
                format!("Unable to load tools: HTTP {}: {}", status, status_text)
            }
            LoadError::Parse(_) => {
                "Data format error. The tools data is corrupted. Please contact support."
                    .to_string()
            }
            LoadError::Shape(detail) => {
                format!("Unable to load tools: Invalid data format: {}", detail)
            }
            LoadError::Empty => {
                "Unable to load tools: No tools found in the dataset".to_string()
            }
            LoadError::Unknown(_) => {
                "An unexpected error occurred while loading tools. Please refresh the page."
                    .to_string()
            }
        }
    }
}

pub mod prelude {
    pub use super::{Catalog, Lifecycle, LoadError, Tool, TriState};
}
