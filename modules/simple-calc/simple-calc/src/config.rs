use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use simple_calc_sdk::COMPUTATION_ERROR_KEY;

/// Configuration for the calculator module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimpleCalcConfig {
    /// User-visible string resources, keyed by resource name.
    #[serde(default = "default_strings")]
    pub strings: BTreeMap<String, String>,
}

impl Default for SimpleCalcConfig {
    fn default() -> Self {
        Self {
            strings: default_strings(),
        }
    }
}

impl SimpleCalcConfig {
    /// Resolve a string resource. Unknown keys resolve to the key itself.
    #[must_use]
    pub fn lookup(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}

fn default_strings() -> BTreeMap<String, String> {
    BTreeMap::from([(COMPUTATION_ERROR_KEY.to_owned(), "Error".to_owned())])
}
