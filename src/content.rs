//! Static site content, parsed once at startup from the embedded JSON file and
//! shared with the component tree behind an `Rc`.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::booking::ServiceKind;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("service catalog has no entry for {0}")]
    MissingService(ServiceKind),
    #[error("service {0} is listed more than once")]
    DuplicateService(ServiceKind),
    #[error("project id {0} is used more than once")]
    DuplicateProject(u32),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub company: String,
    pub short_name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub copyright_year: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub kind: ServiceKind,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub features: Vec<String>,
}

impl Service {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ProjectCategory {
    Web,
    App,
    #[serde(rename = "SaaS")]
    Saas,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::App => "App",
            ProjectCategory::Saas => "SaaS",
        }
    }
}

/// Gallery filter; `All` shows every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub fn all() -> &'static [ProjectFilter] {
        &[
            ProjectFilter::All,
            ProjectFilter::Only(ProjectCategory::Web),
            ProjectFilter::Only(ProjectCategory::App),
            ProjectFilter::Only(ProjectCategory::Saas),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == *category,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: ProjectCategory,
    pub image: String,
    pub description: String,
    pub long_description: String,
    pub stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

impl Project {
    /// Identifier used for the card's reveal flag.
    pub fn reveal_id(&self) -> String {
        format!("project-{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HighlightStat {
    pub number: String,
    pub label: String,
    pub icon: String,
}

/// Animated counter in the about section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub id: u32,
    pub icon: String,
    pub number: f64,
    pub suffix: String,
    pub label: String,
    pub color: String,
}

impl Stat {
    /// Fractional targets keep one decimal while counting, whole ones round.
    pub fn format_value(&self, current: f64) -> String {
        if self.number.fract() != 0.0 {
            format!("{:.1}{}", current, self.suffix)
        } else {
            format!("{}{}", current.round() as i64, self.suffix)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub contact: ContactInfo,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub hero_highlights: Vec<HighlightStat>,
    pub service_highlights: Vec<HighlightStat>,
    pub stats: Vec<Stat>,
    pub timeline: Vec<Milestone>,
}

impl SiteContent {
    /// Parses the content bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.kind) {
                return Err(ContentError::DuplicateService(service.kind));
            }
        }
        if let Some(missing) = ServiceKind::all().iter().find(|kind| !seen.contains(*kind)) {
            return Err(ContentError::MissingService(*missing));
        }

        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
        }
        Ok(())
    }

    pub fn filter_projects(&self, filter: ProjectFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| filter.matches(project))
            .collect()
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.timeline.len(), 5);
        assert_eq!(content.contact.company, "Sajeev Networking Solutions");
    }

    #[test]
    fn services_follow_catalog_order() {
        let content = SiteContent::load().unwrap();
        let kinds: Vec<ServiceKind> = content.services.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ServiceKind::all().to_vec());
    }

    #[test]
    fn filter_by_category() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.filter_projects(ProjectFilter::All).len(), 6);

        let saas = content.filter_projects(ProjectFilter::Only(ProjectCategory::Saas));
        let titles: Vec<&str> = saas.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Analytics Dashboard", "Social Media Manager"]);
    }

    #[test]
    fn filter_labels_match_buttons() {
        let labels: Vec<&str> = ProjectFilter::all().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Web", "App", "SaaS"]);
    }

    #[test]
    fn stat_formatting_keeps_one_decimal_for_fractional_targets() {
        let content = SiteContent::load().unwrap();
        let uptime = &content.stats[1];
        assert_eq!(uptime.format_value(49.5), "49.5%");
        assert_eq!(uptime.format_value(99.9), "99.9%");

        let projects = &content.stats[0];
        assert_eq!(projects.format_value(24.6), "25+");
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["projects"][1]["id"] = serde_json::json!(1);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProject(1)));
    }

    #[test]
    fn missing_service_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["services"].as_array_mut().unwrap().pop();
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::MissingService(ServiceKind::DataAnalysis)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{"),
            Err(ContentError::Parse(_))
        ));
    }
}
