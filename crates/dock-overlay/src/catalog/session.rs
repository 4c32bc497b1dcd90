//! Catalog browsing session

use std::collections::BTreeMap;

use log::debug;

use super::{CatalogError, CatalogQuery, ParameterValue, ScriptEntry, ScriptLoad};

/// Where the user is in the catalog flow
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    /// Looking at the filtered script list
    Browsing,
    /// Waiting for a script body to arrive
    Loading { script: ScriptEntry },
    /// Editing parameters before sending
    Parameters {
        script: ScriptEntry,
        content: String,
        values: BTreeMap<String, ParameterValue>,
    },
}

/// State machine driving the catalog panel
///
/// `Browsing -> Loading -> Parameters -> Browsing`. A failed load or a
/// cancel returns to `Browsing`; nothing is retried.
#[derive(Clone, Debug)]
pub struct CatalogSession {
    scripts: Vec<ScriptEntry>,
    query: CatalogQuery,
    state: CatalogState,
}

impl CatalogSession {
    /// Start browsing `scripts`
    pub fn new(scripts: Vec<ScriptEntry>) -> Self {
        Self {
            scripts,
            query: CatalogQuery::new(),
            state: CatalogState::Browsing,
        }
    }

    #[inline]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    #[inline]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut CatalogQuery {
        &mut self.query
    }

    /// Every script in the catalog
    #[inline]
    pub fn scripts(&self) -> &[ScriptEntry] {
        &self.scripts
    }

    /// Scripts passing the current query
    pub fn visible(&self) -> Vec<&ScriptEntry> {
        self.query.filter(&self.scripts)
    }

    /// Look up a script by id
    pub fn script(&self, id: &str) -> Option<&ScriptEntry> {
        self.scripts.iter().find(|s| s.id == id)
    }

    /// Pick a script and wait for its body
    ///
    /// Selecting again while loading or editing abandons the previous one.
    pub fn select(&mut self, id: &str) -> Result<&ScriptEntry, CatalogError> {
        let index = self
            .scripts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CatalogError::UnknownScript(id.to_string()))?;
        let script = &self.scripts[index];
        debug!("[catalog] loading {}", script.script_path);
        self.state = CatalogState::Loading {
            script: script.clone(),
        };
        Ok(script)
    }

    /// The body of script `id` arrived; open the parameter step
    pub fn content_loaded(&mut self, id: &str, content: String) -> Result<(), CatalogError> {
        let script = match &self.state {
            CatalogState::Loading { script } if script.id == id => script.clone(),
            CatalogState::Loading { script } => {
                return Err(CatalogError::StaleContent {
                    expected: script.id.clone(),
                    received: id.to_string(),
                })
            }
            _ => return Err(CatalogError::NotLoading),
        };

        let values = script.parameters.clone();
        self.state = CatalogState::Parameters {
            script,
            content,
            values,
        };
        Ok(())
    }

    /// Loading script `id` failed; back to browsing
    ///
    /// Failures for a script that is no longer loading are ignored.
    pub fn content_failed(&mut self, id: &str) -> bool {
        match &self.state {
            CatalogState::Loading { script } if script.id == id => {
                debug!("[catalog] failed to load {}", script.script_path);
                self.state = CatalogState::Browsing;
                true
            }
            _ => false,
        }
    }

    /// Change one parameter; the new value must have the same type
    pub fn set_parameter(&mut self, name: &str, value: ParameterValue) -> Result<(), CatalogError> {
        let values = match &mut self.state {
            CatalogState::Parameters { values, .. } => values,
            _ => return Err(CatalogError::NotEditing),
        };
        let slot = values
            .get_mut(name)
            .ok_or_else(|| CatalogError::UnknownParameter(name.to_string()))?;
        if !slot.same_type(&value) {
            return Err(CatalogError::ParameterType {
                name: name.to_string(),
                expected: slot.type_name(),
            });
        }
        *slot = value;
        Ok(())
    }

    /// Leave the parameter step (or abandon a load) without sending
    pub fn cancel(&mut self) {
        self.state = CatalogState::Browsing;
    }

    /// Build the host payload and return to browsing
    pub fn submit(&mut self, timestamp_ms: u64) -> Result<ScriptLoad, CatalogError> {
        match std::mem::replace(&mut self.state, CatalogState::Browsing) {
            CatalogState::Parameters {
                script,
                content,
                values,
            } => Ok(ScriptLoad {
                name: script.name,
                content,
                timestamp: timestamp_ms,
                parameters: values,
            }),
            other => {
                self.state = other;
                Err(CatalogError::NotEditing)
            }
        }
    }
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new(super::builtin_scripts())
    }
}
