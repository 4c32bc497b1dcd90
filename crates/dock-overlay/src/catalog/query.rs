//! Catalog search and category filter

use super::{CatalogError, ScriptEntry};

/// Selectable categories; `all` disables the category filter
pub const CATEGORIES: [&str; 8] = [
    "all",
    "modeling",
    "rendering",
    "generation",
    "materials",
    "animation",
    "lighting",
    "utility",
];

/// Current search term and category selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    search: String,
    category: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
        }
    }
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Select a category from [`CATEGORIES`]
    pub fn set_category(&mut self, category: &str) -> Result<(), CatalogError> {
        if !CATEGORIES.contains(&category) {
            return Err(CatalogError::UnknownCategory(category.to_string()));
        }
        self.category = category.to_string();
        Ok(())
    }

    /// Check if `script` passes both filters
    ///
    /// The search term matches case-insensitively anywhere in the name,
    /// description, author or any tag.
    pub fn matches(&self, script: &ScriptEntry) -> bool {
        let category_match = self.category == "all" || script.category == self.category;
        if !category_match {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        [&script.name, &script.description, &script.author]
            .into_iter()
            .chain(script.tags.iter())
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Scripts passing the filters, in catalog order
    pub fn filter<'a>(&self, scripts: &'a [ScriptEntry]) -> Vec<&'a ScriptEntry> {
        scripts.iter().filter(|s| self.matches(s)).collect()
    }
}
