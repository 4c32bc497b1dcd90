//! `SCRIPT_LOAD:` host payload

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CatalogError, ParameterValue};

/// Prefix marking a script hand-off message
pub const SCRIPT_LOAD_PREFIX: &str = "SCRIPT_LOAD:";

/// A script body plus its parameter values, sent to the host for execution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptLoad {
    pub name: String,
    pub content: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl ScriptLoad {
    /// Encode as `SCRIPT_LOAD:<json>`
    pub fn to_message(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        format!("{}{}", SCRIPT_LOAD_PREFIX, json)
    }

    /// Decode a `SCRIPT_LOAD:<json>` message
    pub fn parse(message: &str) -> Result<Self, CatalogError> {
        let json = message
            .strip_prefix(SCRIPT_LOAD_PREFIX)
            .ok_or(CatalogError::MissingPrefix)?;
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScriptLoad {
        let mut parameters = BTreeMap::new();
        parameters.insert("target_width".to_string(), ParameterValue::Number(512.0));
        parameters.insert("maintain_aspect_ratio".to_string(), ParameterValue::Bool(false));
        ScriptLoad {
            name: "Image Resizer".to_string(),
            content: "import bpy\nprint(\"hi\")\n".to_string(),
            timestamp: 1_700_000_000_000,
            parameters,
        }
    }

    #[test]
    fn test_message_layout() {
        let message = sample().to_message();
        assert!(message.starts_with("SCRIPT_LOAD:{"));

        let json: serde_json::Value =
            serde_json::from_str(&message["SCRIPT_LOAD:".len()..]).unwrap();
        assert_eq!(json["name"], "Image Resizer");
        assert_eq!(json["timestamp"], 1_700_000_000_000u64);
        assert_eq!(json["parameters"]["target_width"], 512.0);
        assert_eq!(json["parameters"]["maintain_aspect_ratio"], false);
    }

    #[test]
    fn test_host_side_decode() {
        let load = sample();
        assert_eq!(ScriptLoad::parse(&load.to_message()).unwrap(), load);
    }

    #[test]
    fn test_parse_rejects_other_messages() {
        assert!(matches!(
            ScriptLoad::parse("[1,2,3,4]"),
            Err(CatalogError::MissingPrefix)
        ));
        assert!(matches!(
            ScriptLoad::parse("SCRIPT_LOAD:{oops"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
