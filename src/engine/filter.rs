use super::query::Query;
use crate::feed::types::Project;

/// Case-insensitive substring test.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn search_hit(project: &Project, needle_lower: &str) -> bool {
    contains_ci(&project.title, needle_lower) || contains_ci(&project.description, needle_lower)
}

fn tag_hit(project: &Project, needle_lower: &str) -> bool {
    project.tags.iter().any(|tag| contains_ci(tag, needle_lower))
}

/// Title or description contains the needle.
pub fn matches_search(project: &Project, needle: &str) -> bool {
    search_hit(project, &needle.to_lowercase())
}

/// Some tag contains the needle. Substring, not exact: "react" matches "React.js".
pub fn matches_tag(project: &Project, needle: &str) -> bool {
    tag_hit(project, &needle.to_lowercase())
}

/// Indices into `projects` of every project the query keeps, in their
/// original order. Search and tag filters compose conjunctively.
pub fn apply_filters(projects: &[Project], query: &Query) -> Vec<usize> {
    let search = query.search_needle().map(str::to_lowercase);
    let tag = query.tag_needle().map(str::to_lowercase);

    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| search.as_deref().is_none_or(|s| search_hit(p, s)))
        .filter(|(_, p)| tag.as_deref().is_none_or(|t| tag_hit(p, t)))
        .map(|(i, _)| i)
        .collect()
}
