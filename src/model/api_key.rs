//! API keys issued to the client

/// Keys in display order, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeys {
    keys: Vec<String>,
}

impl ApiKeys {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Add a freshly generated key at the top of the list
    pub fn prepend(&mut self, key: String) {
        self.keys.insert(0, key);
    }

    /// Mask everything after the prefix, keeping the last four characters
    pub fn masked(key: &str) -> String {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 12 {
            return key.to_string();
        }
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}{}", head, "•".repeat(chars.len() - 12), tail)
    }
}

impl Default for ApiKeys {
    fn default() -> Self {
        Self::new(vec![
            "sk-live-a1b2c3d4e5f6g7h8i9j0k1l2".to_string(),
            "sk-live-z9y8x7w6v5u4t3s2r1q0p9o8".to_string(),
        ])
    }
}
