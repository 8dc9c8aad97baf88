//! Interactive prompt implementation on top of dialoguer.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use foliogen_core::config::{
    validate_project_name, Features, Framework, LayoutMode, PortfolioConfig, Profile, Project,
    Seo, SocialLinks,
};
use foliogen_core::theme::{self, Category, Palette, PaletteOverrides, Theme};

use crate::collect::{CollectError, UserPrompt};
use crate::ui;

const MAX_PROJECTS: usize = 6;

pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn prompt_err(err: dialoguer::Error) -> CollectError {
    CollectError::Prompt(err.to_string())
}

fn optional(input: String) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl UserPrompt for DialoguerPrompt {
    fn input_project_name(&self, default: &str) -> Result<String, CollectError> {
        Input::with_theme(&prompt_theme())
            .with_prompt("Project name")
            .default(default.to_string())
            .validate_with(|input: &String| {
                validate_project_name(input).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_err)
    }

    fn select_theme(&self) -> Result<String, CollectError> {
        let themes = theme::themes();
        let items: Vec<String> = themes
            .iter()
            .map(|t| format!("{} ({})", t.name, t.default_role))
            .collect();
        let selection = Select::with_theme(&prompt_theme())
            .with_prompt("Select a theme")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        Ok(themes[selection].key.to_string())
    }

    fn select_colors(&self, theme: &Theme) -> Result<Palette, CollectError> {
        let keep = Confirm::with_theme(&prompt_theme())
            .with_prompt(format!("Use the {} color palette?", theme.name))
            .default(true)
            .interact()
            .map_err(prompt_err)?;
        if keep {
            return Ok(theme.palette.clone());
        }

        let mut overrides = PaletteOverrides::default();
        for (label, slot, default) in [
            ("Primary color (HSL, e.g. \"220 90% 56%\")", &mut overrides.primary, &theme.palette.primary),
            ("Secondary color (HSL)", &mut overrides.secondary, &theme.palette.secondary),
            ("Accent color (HSL)", &mut overrides.accent, &theme.palette.accent),
        ] {
            let value: String = Input::with_theme(&prompt_theme())
                .with_prompt(label)
                .default(default.clone())
                .interact_text()
                .map_err(prompt_err)?;
            *slot = Some(value);
        }
        // remaining slots stay on the theme's values
        Ok(theme.palette.merged(&overrides))
    }

    fn select_framework(&self) -> Result<Framework, CollectError> {
        let items: Vec<&str> = Framework::ALL.iter().map(Framework::label).collect();
        let selection = Select::with_theme(&prompt_theme())
            .with_prompt("Select framework")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        Ok(Framework::ALL[selection])
    }

    fn select_layout(&self) -> Result<LayoutMode, CollectError> {
        let items = ["Single page (scrolling sections)", "Multi page (separate pages)"];
        let selection = Select::with_theme(&prompt_theme())
            .with_prompt("Choose layout style")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        Ok(match selection {
            0 => LayoutMode::SinglePage,
            _ => LayoutMode::MultiPage,
        })
    }

    fn select_features(&self, suggested: &Features) -> Result<Features, CollectError> {
        let items = ["Contact form", "Gallery / showcase", "Blog section", "Testimonials"];
        let defaults = [
            suggested.contact_form,
            suggested.gallery,
            suggested.blog,
            suggested.testimonials,
        ];
        let picked = MultiSelect::with_theme(&prompt_theme())
            .with_prompt("Select features to include")
            .items(&items)
            .defaults(&defaults)
            .interact()
            .map_err(prompt_err)?;
        Ok(Features {
            contact_form: picked.contains(&0),
            gallery: picked.contains(&1),
            blog: picked.contains(&2),
            testimonials: picked.contains(&3),
        })
    }

    fn input_profile(&self, theme: &Theme) -> Result<Profile, CollectError> {
        let name: String = Input::with_theme(&prompt_theme())
            .with_prompt("Your name")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(prompt_err)?;
        let role: String = Input::with_theme(&prompt_theme())
            .with_prompt("Your role/title")
            .default(theme.default_role.to_string())
            .interact_text()
            .map_err(prompt_err)?;
        let bio: String = Input::with_theme(&prompt_theme())
            .with_prompt("Short bio")
            .default(theme.default_bio.to_string())
            .interact_text()
            .map_err(prompt_err)?;
        let email: String = Input::with_theme(&prompt_theme())
            .with_prompt("Email")
            .default("hello@example.com".to_string())
            .interact_text()
            .map_err(prompt_err)?;
        Ok(Profile { name, role, bio, email })
    }

    fn input_skills(&self, defaults: &[&str]) -> Result<Vec<String>, CollectError> {
        let raw: String = Input::with_theme(&prompt_theme())
            .with_prompt("Skills (comma-separated)")
            .default(defaults.join(", "))
            .interact_text()
            .map_err(prompt_err)?;
        Ok(split_list(&raw))
    }

    fn input_projects(&self) -> Result<Vec<Project>, CollectError> {
        let mut projects = Vec::new();
        while projects.len() < MAX_PROJECTS {
            let add = Confirm::with_theme(&prompt_theme())
                .with_prompt(if projects.is_empty() {
                    "Add a project?".to_string()
                } else {
                    "Add another project?".to_string()
                })
                .default(projects.is_empty())
                .interact()
                .map_err(prompt_err)?;
            if !add {
                break;
            }

            let name: String = Input::with_theme(&prompt_theme())
                .with_prompt(format!("Project {} name", projects.len() + 1))
                .validate_with(|input: &String| {
                    if input.trim().is_empty() {
                        Err("Project name is required")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()
                .map_err(prompt_err)?;
            let description: String = Input::with_theme(&prompt_theme())
                .with_prompt("Project description")
                .interact_text()
                .map_err(prompt_err)?;
            let tech: String = Input::with_theme(&prompt_theme())
                .with_prompt("Technologies used (comma-separated)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let repo: String = Input::with_theme(&prompt_theme())
                .with_prompt("Repository URL (optional)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let demo: String = Input::with_theme(&prompt_theme())
                .with_prompt("Live demo URL (optional)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;

            projects.push(Project {
                name,
                description,
                tech: split_list(&tech),
                repo_url: optional(repo),
                demo_url: optional(demo),
            });
        }
        Ok(projects)
    }

    fn input_social(&self, category: Category) -> Result<SocialLinks, CollectError> {
        let mut social = SocialLinks::default();
        let fields: &[(&str, fn(&mut SocialLinks) -> &mut Option<String>)] = match category {
            Category::Professional => &[
                ("GitHub URL (optional)", |s| &mut s.github),
                ("LinkedIn URL (optional)", |s| &mut s.linkedin),
                ("Twitter/X URL (optional)", |s| &mut s.twitter),
            ],
            Category::Creative => &[
                ("Instagram URL (optional)", |s| &mut s.instagram),
                ("Twitter/X URL (optional)", |s| &mut s.twitter),
                ("LinkedIn URL (optional)", |s| &mut s.linkedin),
            ],
            Category::Business | Category::Personal => &[
                ("Instagram URL (optional)", |s| &mut s.instagram),
                ("YouTube URL (optional)", |s| &mut s.youtube),
                ("LinkedIn URL (optional)", |s| &mut s.linkedin),
                ("Twitter/X URL (optional)", |s| &mut s.twitter),
            ],
        };

        for (label, field) in fields {
            let value: String = Input::with_theme(&prompt_theme())
                .with_prompt(*label)
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            *field(&mut social) = optional(value);
        }
        Ok(social)
    }

    fn input_seo(&self) -> Result<Seo, CollectError> {
        let site_url: String = Input::with_theme(&prompt_theme())
            .with_prompt("Site URL (optional, enables sitemap/robots)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        let keywords: String = Input::with_theme(&prompt_theme())
            .with_prompt("SEO keywords (comma-separated, optional)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        Ok(Seo {
            site_url: optional(site_url),
            keywords: split_list(&keywords),
        })
    }

    fn confirm(&self, config: &PortfolioConfig) -> Result<bool, CollectError> {
        let theme = theme::resolve(&config.theme_key);
        println!("\nPortfolio configuration:");
        println!("  Name:      {}", config.profile.name);
        println!("  Role:      {}", config.profile.role);
        println!("  Theme:     {}", theme.name);
        println!("  Framework: {}", config.framework.label());
        println!("  Layout:    {}", config.layout);
        println!("  Skills:    {}", config.skills.join(", "));
        println!("  Projects:  {}", config.projects.len());
        println!();

        ui::debug(&format!("resolved theme key: {}", config.theme_key));

        Confirm::with_theme(&prompt_theme())
            .with_prompt("Generate project?")
            .default(true)
            .interact()
            .map_err(prompt_err)
    }
}
