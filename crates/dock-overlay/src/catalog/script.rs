//! Catalog entry types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A script parameter value, edited with a control matching its type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParameterValue {
    /// Name of the value's type, as shown in errors
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Bool(_) => "boolean",
            ParameterValue::Number(_) => "number",
            ParameterValue::Text(_) => "string",
        }
    }

    /// Check if `other` holds the same type of value
    #[inline]
    pub fn same_type(&self, other: &ParameterValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        ParameterValue::Bool(v)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        ParameterValue::Number(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        ParameterValue::Text(v.to_string())
    }
}

/// One script offered by the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub author: String,
    pub version: String,
    /// Path of the script body relative to the scripts base URL
    pub script_path: String,
    /// Preview video id
    pub video_id: String,
    pub tags: Vec<String>,
    /// Default parameter values
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl ScriptEntry {
    /// URL of the script body under `base_url`
    pub fn content_url(&self, base_url: &str) -> String {
        if base_url.ends_with('/') {
            format!("{}{}", base_url, self.script_path)
        } else {
            format!("{}/{}", base_url, self.script_path)
        }
    }
}
