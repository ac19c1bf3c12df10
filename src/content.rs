use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const BUNDLED: &str = include_str!("../content/portfolio.json");
const DEFAULT_ACCENT: &str = "#E8D5B7";

static GLOBAL_PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::from_json(BUNDLED).expect("Bundled portfolio content should be valid")
});

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Project id {0} is used more than once")]
    DuplicateProject(u32),
    #[error("Portfolio has no projects")]
    Empty,
}

fn default_accent() -> String {
    DEFAULT_ACCENT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub year: String,
    pub short_description: String,
    pub full_description: String,
    #[serde(default = "default_accent")]
    pub accent_color: String,
    pub role: String,
    pub duration: String,
    pub tools: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub initials: String,
    pub email: String,
    pub portrait: String,
    pub headline: String,
    pub bio: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Everything the page renders that isn't interaction state.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub recognition: Vec<String>,
}

impl Portfolio {
    /// The content compiled into the binary, parsed on first access.
    pub fn bundled() -> &'static Portfolio {
        &GLOBAL_PORTFOLIO
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        if portfolio.projects.is_empty() {
            return Err(ContentError::Empty);
        }
        let mut seen = HashSet::new();
        for project in &portfolio.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
        }
        Ok(portfolio)
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Two-digit project count as shown next to the work heading, e.g. "04".
    pub fn project_count_label(&self) -> String {
        format!("{:02}", self.projects.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(projects: &str) -> String {
        format!(
            r#"{{
                "owner": {{
                    "first_name": "Ada", "last_name": "Lovelace", "role": "Engineer",
                    "initials": "AL", "email": "ada@example.com", "portrait": "/ada.jpg",
                    "headline": "engines", "bio": "notes"
                }},
                "projects": [{projects}],
                "social_links": []
            }}"#
        )
    }

    fn project_json(id: u32) -> String {
        format!(
            r#"{{
                "id": {id}, "title": "P{id}", "category": "c", "year": "2024",
                "short_description": "s", "full_description": "f", "role": "r",
                "duration": "d", "tools": ["Figma"], "highlights": []
            }}"#
        )
    }

    #[test]
    fn test_bundled_content_parses() {
        let portfolio = Portfolio::bundled();
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.owner.full_name(), "Joel Boachie");
        assert_eq!(portfolio.project_count_label(), "04");
        assert_eq!(portfolio.social_links.len(), 3);

        let ids: Vec<u32> = portfolio.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_accent_defaults() {
        let portfolio = Portfolio::bundled();
        let greenhouse = portfolio.project(2).expect("project 2 should exist");
        assert_eq!(greenhouse.accent_color, DEFAULT_ACCENT);
        assert_eq!(greenhouse.tools, vec!["Figma", "Amplitude", "Loom"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = minimal(&format!("{},{}", project_json(7), project_json(7)));
        match Portfolio::from_json(&raw) {
            Err(ContentError::DuplicateProject(7)) => {}
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_malformed() {
        assert!(matches!(
            Portfolio::from_json(&minimal("")),
            Err(ContentError::Empty)
        ));
        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_project_lookup() {
        let raw = minimal(&format!("{},{}", project_json(3), project_json(9)));
        let portfolio = Portfolio::from_json(&raw).expect("should parse");
        assert_eq!(portfolio.project(9).map(|p| p.title.as_str()), Some("P9"));
        assert!(portfolio.project(4).is_none());
        assert!(portfolio.services.is_empty());
    }
}
