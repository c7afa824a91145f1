/// Lower-cased search key.
///
/// No trimming or tokenization happens here: `" cli"` only matches text
/// containing a space before `cli`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Absent input is the empty query, which matches every card.
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.unwrap_or("").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the query occurs in `tags` or in `text`, ignoring case.
    pub fn matches(&self, tags: &str, text: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        tags.to_lowercase().contains(&self.0) || text.to_lowercase().contains(&self.0)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw))
    }
}
