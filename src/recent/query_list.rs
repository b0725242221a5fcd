/// Trims a query and rejects empty input.
pub fn normalize_query(query: &str) -> Option<&str> {
    let query = query.trim();
    if query.is_empty() { None } else { Some(query) }
}

/// Ordered, most-recent-first list of queries.
///
/// Always holds at most `max` entries, none empty, none repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentQueryList {
    entries: Vec<String>,
    max: usize,
}

impl RecentQueryList {
    pub fn new(max: usize) -> Self {
        Self {
            entries: Vec::new(),
            max: max.max(1),
        }
    }

    /// Builds a list from persisted entries, repairing anything that breaks
    /// the list invariants. The first occurrence of a duplicate wins since
    /// stored lists are most-recent-first.
    pub fn from_stored(stored: Vec<String>, max: usize) -> Self {
        let mut list = Self::new(max);
        for entry in stored {
            let Some(query) = normalize_query(&entry) else {
                continue;
            };
            if !list.contains(query) {
                list.entries.push(query.to_string());
            }
        }
        list.entries.truncate(list.max);
        list
    }

    /// Moves `query` to the front, evicting the oldest entries past `max`.
    /// Returns false (and leaves the list untouched) for empty input.
    pub fn insert(&mut self, query: &str) -> bool {
        let Some(query) = normalize_query(query) else {
            return false;
        };

        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.max);
        true
    }

    /// Removes every entry equal to `query`, compared exactly. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, query: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != query);
        // Same bound as insert: keep the most recent `max`, front first
        self.entries.truncate(self.max);
        self.entries.len() != before
    }

    pub fn clear(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        had_entries
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e == query)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

#[cfg(test)]
#[path = "query_list_tests.rs"]
mod query_list_tests;
