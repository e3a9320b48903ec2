//! Search links attached to every roadmap step.

use crate::model::{Resource, ResourceKind};

const GOOGLE_SEARCH: &str = "https://www.google.com/search";
const STACKOVERFLOW_SEARCH: &str = "https://stackoverflow.com/search";
const GITHUB_SEARCH: &str = "https://github.com/search";
const REDDIT_SEARCH: &str = "https://www.reddit.com/search/";

fn search_url(base: &str, params: &[(&str, &str)]) -> String {
    // Serializing string pairs cannot fail
    let query = serde_urlencoded::to_string(params).unwrap_or_default();
    format!("{base}?{query}")
}

/// One link per [`ResourceKind`], in a fixed order, with `phrase` as the query.
pub fn resources_for(phrase: &str) -> Vec<Resource> {
    let tutorial = format!("{phrase} tutorial");
    vec![
        Resource {
            kind: ResourceKind::GoogleSearch,
            url: search_url(GOOGLE_SEARCH, &[("q", tutorial.as_str())]),
            label: format!("Google: {tutorial}"),
        },
        Resource {
            kind: ResourceKind::StackOverflow,
            url: search_url(STACKOVERFLOW_SEARCH, &[("q", phrase)]),
            label: "Stack Overflow Q&A".to_string(),
        },
        Resource {
            kind: ResourceKind::GitHub,
            url: search_url(GITHUB_SEARCH, &[("q", phrase), ("type", "repositories")]),
            label: "GitHub Repositories".to_string(),
        },
        Resource {
            kind: ResourceKind::Reddit,
            url: search_url(REDDIT_SEARCH, &[("q", phrase)]),
            label: "Reddit Discussions".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_are_url_escaped() {
        let resources = resources_for("HTML & CSS Fundamentals");
        assert_eq!(
            resources[0].url,
            "https://www.google.com/search?q=HTML+%26+CSS+Fundamentals+tutorial"
        );
        assert_eq!(
            resources[2].url,
            "https://github.com/search?q=HTML+%26+CSS+Fundamentals&type=repositories"
        );
    }

    #[test]
    fn one_link_of_each_kind() {
        let kinds: Vec<ResourceKind> = resources_for("Cryptography").iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::GoogleSearch,
                ResourceKind::StackOverflow,
                ResourceKind::GitHub,
                ResourceKind::Reddit
            ]
        );
    }
}
