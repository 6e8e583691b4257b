use std::collections::HashSet;

/// URLs already considered or posted.
///
/// Lookup is by set membership; append order is kept for persistence.
#[derive(Debug, Clone, Default)]
pub struct History {
    urls: Vec<String>,
    index: HashSet<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains(url)
    }

    /// Returns false if the URL was already present.
    pub fn insert(&mut self, url: &str) -> bool {
        if !self.index.insert(url.to_string()) {
            return false;
        }
        self.urls.push(url.to_string());
        true
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<String> for History {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut history = Self::new();
        for url in iter {
            history.insert(&url);
        }
        history
    }
}
