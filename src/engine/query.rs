/// How the secondary filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// No secondary filter.
    #[default]
    All,
    /// Keep projects with a tag containing the filter value.
    Tag,
}

/// The user's current search/filter intent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search_text: String,
    pub filter_kind: FilterKind,
    pub filter_value: String,
}

impl Query {
    /// Search needle, `None` when the text is blank. Whitespace only
    /// decides blankness; a non-blank needle is matched as typed.
    pub fn search_needle(&self) -> Option<&str> {
        non_blank(&self.search_text)
    }

    /// Tag needle, `None` unless a tag filter with a non-blank value is set.
    pub fn tag_needle(&self) -> Option<&str> {
        match self.filter_kind {
            FilterKind::Tag => non_blank(&self.filter_value),
            FilterKind::All => None,
        }
    }

    /// Whether this query can exclude anything at all.
    pub fn is_active(&self) -> bool {
        self.search_needle().is_some() || self.tag_needle().is_some()
    }
}

fn non_blank(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}
