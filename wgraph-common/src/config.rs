use std::collections::HashMap;

pub mod keys {
    /// `symmetric` (default) or `stored`.
    pub const BELLMAN_FORD_RELAXATION: &str = "wgraph.bellman_ford.relaxation";
    /// `component` (default) or `forest`.
    pub const PRIM_COVERAGE: &str = "wgraph.prim.coverage";
}

#[derive(Debug, Clone, Default)]
pub struct Configuration {
    config: HashMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self {
            config: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(key, value);
        self
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.config.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.config.get(key)
    }

    pub fn get_string(&self, key: &str, default_value: &str) -> String {
        self.config
            .get(key)
            .cloned()
            .unwrap_or_else(|| default_value.to_string())
    }
}
