//! Script catalog
//!
//! Browsing, filtering and parameterising the scripts the overlay can hand
//! to the host. The catalog itself is static; a [`CatalogSession`] walks
//! the user from browsing through content loading to the parameter step and
//! finally produces a [`ScriptLoad`] payload for the host bridge.

mod builtin;
mod payload;
mod query;
mod script;
mod session;

pub use builtin::builtin_scripts;
pub use payload::{ScriptLoad, SCRIPT_LOAD_PREFIX};
pub use query::{CatalogQuery, CATEGORIES};
pub use script::{ParameterValue, ScriptEntry};
pub use session::{CatalogSession, CatalogState};

use thiserror::Error;

/// Errors from catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown script: {0}")]
    UnknownScript(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("no script is awaiting content")]
    NotLoading,

    #[error("content arrived for {received} while loading {expected}")]
    StaleContent { expected: String, received: String },

    #[error("no script is being parameterised")]
    NotEditing,

    #[error("script has no parameter named {0}")]
    UnknownParameter(String),

    #[error("parameter {name} expects a {expected} value")]
    ParameterType { name: String, expected: &'static str },

    #[error("message is not a script load payload")]
    MissingPrefix,

    #[error("malformed script load payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
