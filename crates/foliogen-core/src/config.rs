//! The portfolio configuration passed from collection to generation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::theme::Palette;

/// Identity fields shown on the generated site.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
}

/// A portfolio item: a piece of work with its tech tags and links.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

/// Optional links to external profiles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// Optional site sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Features {
    pub blog: bool,
    pub gallery: bool,
    pub contact_form: bool,
    pub testimonials: bool,
}

/// Target framework for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    ReactVite,
    NextJs,
    SvelteKit,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::ReactVite, Framework::NextJs, Framework::SvelteKit];

    /// Human-readable name for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::ReactVite => "React + Vite",
            Framework::NextJs => "Next.js",
            Framework::SvelteKit => "SvelteKit",
        }
    }

    /// Directory the framework serves static files from.
    pub fn public_dir(&self) -> &'static str {
        match self {
            Framework::ReactVite | Framework::NextJs => "public",
            Framework::SvelteKit => "static",
        }
    }

    /// The fixed directory skeleton created before any file is written.
    pub fn skeleton_dirs(&self) -> &'static [&'static str] {
        match self {
            Framework::ReactVite => &[
                "src/components",
                "src/pages",
                "src/styles",
                "src/assets",
                "src/lib",
                "src/config",
                "public",
            ],
            Framework::NextJs => &[
                "src/app",
                "src/components",
                "src/styles",
                "src/lib",
                "src/config",
                "public",
            ],
            Framework::SvelteKit => &[
                "src/routes",
                "src/lib/components",
                "src/lib/styles",
                "src/config",
                "static",
            ],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framework::ReactVite => write!(f, "react-vite"),
            Framework::NextJs => write!(f, "nextjs"),
            Framework::SvelteKit => write!(f, "sveltekit"),
        }
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react-vite" | "react" | "vite" => Ok(Framework::ReactVite),
            "nextjs" | "next" | "next.js" => Ok(Framework::NextJs),
            "sveltekit" | "svelte" => Ok(Framework::SvelteKit),
            _ => Err(format!("Unknown framework: {s}")),
        }
    }
}

/// How the generated site is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    SinglePage,
    MultiPage,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::SinglePage => write!(f, "single-page"),
            LayoutMode::MultiPage => write!(f, "multi-page"),
        }
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-page" | "single" => Ok(LayoutMode::SinglePage),
            "multi-page" | "multi" => Ok(LayoutMode::MultiPage),
            _ => Err(format!("Unknown layout: {s}")),
        }
    }
}

/// Optional search-engine fields.
#[derive(Debug, Clone, Default)]
pub struct Seo {
    pub site_url: Option<String>,
    pub keywords: Vec<String>,
}

/// The single source of truth handed from collection to generation.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub profile: Profile,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub social: SocialLinks,
    pub theme_key: String,
    pub colors: Palette,
    pub features: Features,
    pub framework: Framework,
    pub layout: LayoutMode,
    pub seo: Seo,
}

impl PortfolioConfig {
    /// Checks the collection invariant: name, role, and bio are non-empty.
    pub fn ensure_complete(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("name", &self.profile.name),
            ("role", &self.profile.role),
            ("bio", &self.profile.bio),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Removes duplicate skills while preserving first-seen order.
pub fn dedup_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

const MAX_PROJECT_NAME_LENGTH: usize = 214;

/// Why a project name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("project name cannot be empty")]
    Empty,
    #[error("project name must be {0} characters or less")]
    TooLong(usize),
    #[error("project name must be lowercase")]
    Uppercase,
    #[error("project name cannot start with '.' or '_'")]
    LeadingDotOrUnderscore,
    #[error("project name '{0}' contains invalid characters. Use lowercase letters, digits, '-', '.', '_'")]
    InvalidCharacters(String),
}

/// Validates a project name against npm package-name rules, since the
/// name lands verbatim in the generated manifest.
pub fn validate_project_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > MAX_PROJECT_NAME_LENGTH {
        return Err(NameError::TooLong(MAX_PROJECT_NAME_LENGTH));
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(NameError::Uppercase);
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Err(NameError::LeadingDotOrUnderscore);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~'))
    {
        return Err(NameError::InvalidCharacters(name.to_string()));
    }
    Ok(())
}
