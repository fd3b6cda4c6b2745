use std::collections::HashMap;

use super::Config;
use crate::ConfigSource;

impl Config {
    /// Effective configuration as `key -> (value, source)` pairs.
    #[must_use]
    pub fn effective_config(&self) -> HashMap<String, (String, String)> {
        let entries = [
            ("tool_prefix", self.harness.tool_prefix.clone()),
            ("timeout_secs", self.harness.timeout_secs.to_string()),
            ("require_success", self.harness.require_success.to_string()),
            ("verbose", self.logging.verbose.to_string()),
        ];

        entries
            .into_iter()
            .map(|(key, value)| {
                let source = self
                    .source_attribution
                    .get(key)
                    .copied()
                    .unwrap_or(ConfigSource::Default);
                (key.to_string(), (value, source.as_str().to_string()))
            })
            .collect()
    }
}
