use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Named collections of domains sharing cache and refresh treatment.
///
/// Supplied once at startup from configuration and only ever read after
/// that — the cache and the refresh job never mutate the domain lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, Vec<String>>")]
pub struct GroupSet {
    groups: HashMap<Arc<str>, Arc<[Arc<str>]>>,
}

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, domains: Vec<String>) {
        let domains: Arc<[Arc<str>]> = domains
            .into_iter()
            .map(|d| Arc::from(d.as_str()))
            .collect();
        self.groups.insert(Arc::from(name), domains);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<[Arc<str>]>> {
        self.groups.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<[Arc<str>]>)> {
        self.groups.iter()
    }

    /// Group names in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().map(|k| k.to_string()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for GroupSet {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        let mut set = Self::new();
        for (name, domains) in map {
            set.insert(&name, domains);
        }
        set
    }
}
