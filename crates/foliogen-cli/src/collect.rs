//! Configuration collection, independent of how answers are obtained.
//!
//! The generator only ever sees a finished [`PortfolioConfig`]; this
//! module defines the prompt seam so the interactive and scripted paths
//! produce equally well-formed configurations.

use foliogen_core::config::{
    dedup_skills, Features, Framework, LayoutMode, PortfolioConfig, Profile, Project, Seo,
    SocialLinks,
};
use foliogen_core::theme::{self, Category, Palette, Theme};

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("cancelled by user")]
    Aborted,
    #[error("prompt failed: {0}")]
    Prompt(String),
    #[error("{0}")]
    Invalid(String),
}

/// Answers already supplied on the command line; prompts for these are
/// skipped.
#[derive(Debug, Default)]
pub struct CollectHints {
    pub theme: Option<String>,
    pub framework: Option<Framework>,
}

pub trait UserPrompt {
    fn input_project_name(&self, default: &str) -> Result<String, CollectError>;
    fn select_theme(&self) -> Result<String, CollectError>;
    fn select_colors(&self, theme: &Theme) -> Result<Palette, CollectError>;
    fn select_framework(&self) -> Result<Framework, CollectError>;
    fn select_layout(&self) -> Result<LayoutMode, CollectError>;
    fn select_features(&self, suggested: &Features) -> Result<Features, CollectError>;
    fn input_profile(&self, theme: &Theme) -> Result<Profile, CollectError>;
    fn input_skills(&self, defaults: &[&str]) -> Result<Vec<String>, CollectError>;
    fn input_projects(&self) -> Result<Vec<Project>, CollectError>;
    fn input_social(&self, category: Category) -> Result<SocialLinks, CollectError>;
    fn input_seo(&self) -> Result<Seo, CollectError>;
    fn confirm(&self, config: &PortfolioConfig) -> Result<bool, CollectError>;
}

/// Walks the full question flow and returns a validated configuration.
/// Declining the final confirmation aborts with [`CollectError::Aborted`].
pub fn collect_config<P: UserPrompt>(
    prompt: &P,
    hints: &CollectHints,
) -> Result<PortfolioConfig, CollectError> {
    let theme_key = match &hints.theme {
        Some(key) => key.clone(),
        None => prompt.select_theme()?,
    };
    let theme = theme::resolve(&theme_key);

    let colors = prompt.select_colors(theme)?;
    let framework = match hints.framework {
        Some(framework) => framework,
        None => prompt.select_framework()?,
    };
    let layout = prompt.select_layout()?;
    let features = prompt.select_features(&theme.suggested)?;
    let profile = prompt.input_profile(theme)?;
    let skills = dedup_skills(prompt.input_skills(theme.default_skills)?);
    let projects = prompt.input_projects()?;
    let social = prompt.input_social(theme.category)?;
    let seo = prompt.input_seo()?;

    let config = PortfolioConfig {
        profile,
        skills,
        projects,
        social,
        theme_key: theme.key.to_string(),
        colors,
        features,
        framework,
        layout,
        seo,
    };
    config
        .ensure_complete()
        .map_err(|e| CollectError::Invalid(e.to_string()))?;

    if !prompt.confirm(&config)? {
        return Err(CollectError::Aborted);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockPrompt {
        theme: String,
        framework: Framework,
        confirm_result: bool,
        skills: Vec<String>,
        name: String,
        calls: RefCell<Vec<&'static str>>,
    }

    impl MockPrompt {
        fn new() -> Self {
            Self {
                theme: "ocean-blue".to_string(),
                framework: Framework::NextJs,
                confirm_result: true,
                skills: vec!["Rust".to_string(), "Go".to_string()],
                name: "Taylor".to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl UserPrompt for MockPrompt {
        fn input_project_name(&self, default: &str) -> Result<String, CollectError> {
            self.record("input_project_name");
            Ok(default.to_string())
        }

        fn select_theme(&self) -> Result<String, CollectError> {
            self.record("select_theme");
            Ok(self.theme.clone())
        }

        fn select_colors(&self, theme: &Theme) -> Result<Palette, CollectError> {
            self.record("select_colors");
            Ok(theme.palette.clone())
        }

        fn select_framework(&self) -> Result<Framework, CollectError> {
            self.record("select_framework");
            Ok(self.framework)
        }

        fn select_layout(&self) -> Result<LayoutMode, CollectError> {
            self.record("select_layout");
            Ok(LayoutMode::SinglePage)
        }

        fn select_features(&self, suggested: &Features) -> Result<Features, CollectError> {
            self.record("select_features");
            Ok(suggested.clone())
        }

        fn input_profile(&self, theme: &Theme) -> Result<Profile, CollectError> {
            self.record("input_profile");
            Ok(Profile {
                name: self.name.clone(),
                role: theme.default_role.to_string(),
                bio: theme.default_bio.to_string(),
                email: "taylor@example.com".to_string(),
            })
        }

        fn input_skills(&self, _defaults: &[&str]) -> Result<Vec<String>, CollectError> {
            self.record("input_skills");
            Ok(self.skills.clone())
        }

        fn input_projects(&self) -> Result<Vec<Project>, CollectError> {
            self.record("input_projects");
            Ok(Vec::new())
        }

        fn input_social(&self, _category: Category) -> Result<SocialLinks, CollectError> {
            self.record("input_social");
            Ok(SocialLinks::default())
        }

        fn input_seo(&self) -> Result<Seo, CollectError> {
            self.record("input_seo");
            Ok(Seo::default())
        }

        fn confirm(&self, _config: &PortfolioConfig) -> Result<bool, CollectError> {
            self.record("confirm");
            Ok(self.confirm_result)
        }
    }

    #[test]
    fn test_collects_full_configuration() {
        let prompt = MockPrompt::new();
        let config = collect_config(&prompt, &CollectHints::default()).unwrap();
        assert_eq!(config.theme_key, "ocean-blue");
        assert_eq!(config.framework, Framework::NextJs);
        assert_eq!(config.profile.name, "Taylor");
        assert_eq!(config.skills, vec!["Rust", "Go"]);

        let calls = prompt.calls.borrow();
        assert!(calls.contains(&"select_theme"));
        assert!(calls.contains(&"confirm"));
    }

    #[test]
    fn test_hints_skip_their_prompts() {
        let prompt = MockPrompt::new();
        let hints = CollectHints {
            theme: Some("sunset-orange".to_string()),
            framework: Some(Framework::SvelteKit),
        };
        let config = collect_config(&prompt, &hints).unwrap();
        assert_eq!(config.theme_key, "sunset-orange");
        assert_eq!(config.framework, Framework::SvelteKit);

        let calls = prompt.calls.borrow();
        assert!(!calls.contains(&"select_theme"));
        assert!(!calls.contains(&"select_framework"));
    }

    #[test]
    fn test_unknown_theme_hint_is_canonicalized() {
        let prompt = MockPrompt::new();
        let hints = CollectHints {
            theme: Some("not-a-theme".to_string()),
            framework: None,
        };
        let config = collect_config(&prompt, &hints).unwrap();
        // resolve() fell back to the catalog default
        assert_eq!(config.theme_key, "modern-dark");
    }

    #[test]
    fn test_declined_confirmation_aborts() {
        let mut prompt = MockPrompt::new();
        prompt.confirm_result = false;
        let err = collect_config(&prompt, &CollectHints::default()).unwrap_err();
        assert!(matches!(err, CollectError::Aborted));
    }

    #[test]
    fn test_duplicate_skills_are_deduplicated() {
        let mut prompt = MockPrompt::new();
        prompt.skills = vec![
            "Rust".to_string(),
            "Rust".to_string(),
            "SQL".to_string(),
        ];
        let config = collect_config(&prompt, &CollectHints::default()).unwrap();
        assert_eq!(config.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut prompt = MockPrompt::new();
        prompt.name = "   ".to_string();
        let err = collect_config(&prompt, &CollectHints::default()).unwrap_err();
        assert!(matches!(err, CollectError::Invalid(_)));
    }
}
