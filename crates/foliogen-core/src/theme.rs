//! Fixed catalog of portfolio themes.
//!
//! A theme bundles a color palette, typography, layout hints, and the
//! default profile data used by the non-interactive path. Entries are
//! fixed at build time; lookups never fail (unknown keys resolve to the
//! default theme).

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::{Features, Framework, LayoutMode, PortfolioConfig, Profile, Seo, SocialLinks};

/// The eight color slots every theme provides, as HSL component strings
/// in the `"H S% L%"` form the generated stylesheets expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub card: String,
    pub border: String,
}

/// Per-slot palette overrides entered by the user on the custom-color path.
#[derive(Debug, Clone, Default)]
pub struct PaletteOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub muted: Option<String>,
    pub card: Option<String>,
    pub border: Option<String>,
}

impl Palette {
    /// Builds a palette from `overrides`, filling every missing slot from
    /// `self`. Blank override strings count as missing.
    pub fn merged(&self, overrides: &PaletteOverrides) -> Palette {
        fn pick(over: &Option<String>, base: &str) -> String {
            match over {
                Some(v) if !v.trim().is_empty() => v.trim().to_string(),
                _ => base.to_string(),
            }
        }
        Palette {
            primary: pick(&overrides.primary, &self.primary),
            secondary: pick(&overrides.secondary, &self.secondary),
            accent: pick(&overrides.accent, &self.accent),
            background: pick(&overrides.background, &self.background),
            foreground: pick(&overrides.foreground, &self.foreground),
            muted: pick(&overrides.muted, &self.muted),
            card: pick(&overrides.card, &self.card),
            border: pick(&overrides.border, &self.border),
        }
    }

    /// Slot name / value pairs in stylesheet order.
    pub fn slots(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("muted", &self.muted),
            ("card", &self.card),
            ("border", &self.border),
        ]
    }
}

/// Font choices for a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    pub heading_family: String,
    pub body_family: String,
    pub heading_weight: u16,
    pub body_weight: u16,
}

/// Structural hints the generated stylesheet exposes as CSS custom
/// properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutHints {
    pub corner_radius: String,
    pub grid_columns: u8,
    pub hero_style: String,
}

/// Broad audience category, used to pick which social-link prompts make
/// sense for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Professional,
    Creative,
    Business,
    Personal,
}

/// An immutable catalog entry.
#[derive(Debug, Clone)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub palette: Palette,
    pub typography: Typography,
    pub layout: LayoutHints,
    pub default_role: &'static str,
    pub default_bio: &'static str,
    pub default_skills: &'static [&'static str],
    pub suggested: Features,
}

const DEFAULT_THEME_KEY: &str = "modern-dark";

fn palette(
    primary: &str,
    secondary: &str,
    accent: &str,
    background: &str,
    foreground: &str,
    muted: &str,
    card: &str,
    border: &str,
) -> Palette {
    Palette {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        background: background.to_string(),
        foreground: foreground.to_string(),
        muted: muted.to_string(),
        card: card.to_string(),
        border: border.to_string(),
    }
}

fn typography(heading: &str, body: &str, heading_weight: u16, body_weight: u16) -> Typography {
    Typography {
        heading_family: heading.to_string(),
        body_family: body.to_string(),
        heading_weight,
        body_weight,
    }
}

fn layout(radius: &str, grid_columns: u8, hero_style: &str) -> LayoutHints {
    LayoutHints {
        corner_radius: radius.to_string(),
        grid_columns,
        hero_style: hero_style.to_string(),
    }
}

static THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme {
            key: "modern-dark",
            name: "Modern Dark",
            category: Category::Professional,
            palette: palette(
                "220 90% 56%",
                "280 80% 60%",
                "340 82% 52%",
                "224 71% 4%",
                "213 31% 91%",
                "223 47% 11%",
                "224 60% 7%",
                "223 40% 16%",
            ),
            typography: typography("Space Grotesk", "Inter", 700, 400),
            layout: layout("0.75rem", 3, "gradient"),
            default_role: "Full Stack Developer",
            default_bio: "Passionate developer creating innovative solutions with modern technologies.",
            default_skills: &["React", "Node.js", "TypeScript", "Python", "AWS", "Docker", "Git"],
            suggested: Features {
                blog: true,
                gallery: true,
                contact_form: true,
                testimonials: false,
            },
        },
        Theme {
            key: "gradient-purple",
            name: "Gradient Purple",
            category: Category::Creative,
            palette: palette(
                "271 91% 65%",
                "296 80% 60%",
                "326 78% 66%",
                "240 10% 3.9%",
                "0 0% 98%",
                "240 3.7% 15.9%",
                "240 8% 7%",
                "240 5% 20%",
            ),
            typography: typography("Sora", "DM Sans", 700, 400),
            layout: layout("1rem", 2, "split"),
            default_role: "UI/UX Designer",
            default_bio: "Creative designer crafting beautiful and intuitive user experiences.",
            default_skills: &["Figma", "Prototyping", "Design Systems", "Illustration", "Motion Design"],
            suggested: Features {
                blog: false,
                gallery: true,
                contact_form: true,
                testimonials: true,
            },
        },
        Theme {
            key: "ocean-blue",
            name: "Ocean Blue",
            category: Category::Professional,
            palette: palette(
                "199 89% 48%",
                "187 85% 53%",
                "173 80% 40%",
                "200 50% 5%",
                "180 20% 96%",
                "200 40% 12%",
                "200 45% 8%",
                "200 35% 18%",
            ),
            typography: typography("Space Grotesk", "Inter", 600, 400),
            layout: layout("0.5rem", 3, "centered"),
            default_role: "Freelance Consultant",
            default_bio: "Helping businesses grow with strategic insights and expert solutions.",
            default_skills: &["Strategy", "Project Management", "Business Analysis", "Marketing", "Leadership"],
            suggested: Features {
                blog: true,
                gallery: false,
                contact_form: true,
                testimonials: true,
            },
        },
        Theme {
            key: "sunset-orange",
            name: "Sunset Orange",
            category: Category::Creative,
            palette: palette(
                "25 95% 53%",
                "45 93% 47%",
                "340 82% 52%",
                "20 14.3% 4.1%",
                "0 0% 95%",
                "0 0% 15%",
                "20 12% 7%",
                "20 10% 20%",
            ),
            typography: typography("Playfair Display", "DM Sans", 700, 400),
            layout: layout("0.25rem", 2, "banner"),
            default_role: "Professional Photographer",
            default_bio: "Capturing moments and telling stories through the lens.",
            default_skills: &["Portrait", "Landscape", "Wedding", "Product", "Lightroom", "Photoshop"],
            suggested: Features {
                blog: false,
                gallery: true,
                contact_form: true,
                testimonials: false,
            },
        },
        Theme {
            key: "forest-green",
            name: "Forest Green",
            category: Category::Personal,
            palette: palette(
                "142 70% 45%",
                "160 60% 40%",
                "80 60% 45%",
                "150 25% 5%",
                "145 20% 95%",
                "148 18% 12%",
                "150 20% 8%",
                "148 15% 18%",
            ),
            typography: typography("Sora", "Inter", 700, 400),
            layout: layout("0.75rem", 3, "split"),
            default_role: "Fitness & Wellness Coach",
            default_bio: "Helping you achieve your fitness goals with personalized training.",
            default_skills: &["Personal Training", "Nutrition", "Strength Training", "HIIT", "Yoga"],
            suggested: Features {
                blog: false,
                gallery: true,
                contact_form: true,
                testimonials: true,
            },
        },
        Theme {
            key: "minimal-light",
            name: "Minimal Light",
            category: Category::Professional,
            palette: palette(
                "222 47% 11%",
                "215 28% 17%",
                "262 83% 58%",
                "0 0% 100%",
                "222 47% 11%",
                "210 40% 96.1%",
                "0 0% 98%",
                "214 32% 91%",
            ),
            typography: typography("Playfair Display", "Merriweather", 700, 400),
            layout: layout("0.375rem", 2, "centered"),
            default_role: "Content Writer & Author",
            default_bio: "Wordsmith crafting compelling stories and engaging content.",
            default_skills: &["Creative Writing", "Copywriting", "Content Strategy", "SEO", "Editing"],
            suggested: Features {
                blog: true,
                gallery: false,
                contact_form: true,
                testimonials: true,
            },
        },
    ]
});

/// Every theme in the catalog, in display order.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

/// Looks up a theme by key, falling back to the default theme for
/// unrecognized keys. Never fails.
pub fn resolve(key: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|t| t.key == key)
        .unwrap_or_else(|| default_theme())
}

/// The designated fallback theme.
pub fn default_theme() -> &'static Theme {
    THEMES
        .iter()
        .find(|t| t.key == DEFAULT_THEME_KEY)
        .unwrap_or(&THEMES[0])
}

/// Builds a complete configuration from a theme's defaults, without any
/// interactive input. Unknown keys produce the default theme's
/// configuration.
pub fn defaults_for(key: &str) -> PortfolioConfig {
    let theme = resolve(key);
    PortfolioConfig {
        profile: Profile {
            name: "John Doe".to_string(),
            role: theme.default_role.to_string(),
            bio: theme.default_bio.to_string(),
            email: "hello@example.com".to_string(),
        },
        skills: theme.default_skills.iter().map(|s| s.to_string()).collect(),
        projects: Vec::new(),
        social: SocialLinks::default(),
        theme_key: theme.key.to_string(),
        colors: theme.palette.clone(),
        features: theme.suggested.clone(),
        framework: Framework::ReactVite,
        layout: LayoutMode::SinglePage,
        seo: Seo::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_all_color_slots() {
        for theme in themes() {
            for (slot, value) in theme.palette.slots() {
                assert!(
                    !value.trim().is_empty(),
                    "theme '{}' has empty slot '{}'",
                    theme.key,
                    slot
                );
            }
        }
    }

    #[test]
    fn resolve_known_keys() {
        for theme in themes() {
            assert_eq!(resolve(theme.key).key, theme.key);
        }
    }

    #[test]
    fn resolve_unknown_key_falls_back_to_default() {
        assert_eq!(resolve("no-such-theme").key, DEFAULT_THEME_KEY);
        assert_eq!(resolve("").key, DEFAULT_THEME_KEY);
    }

    #[test]
    fn theme_keys_are_unique() {
        let mut keys: Vec<_> = themes().iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), themes().len());
    }

    #[test]
    fn merged_prefers_overrides() {
        let base = default_theme().palette.clone();
        let overrides = PaletteOverrides {
            primary: Some("10 80% 50%".to_string()),
            accent: Some("  ".to_string()),
            ..Default::default()
        };
        let merged = base.merged(&overrides);
        assert_eq!(merged.primary, "10 80% 50%");
        // blank override falls back to the base value
        assert_eq!(merged.accent, base.accent);
        assert_eq!(merged.background, base.background);
        assert_eq!(merged.border, base.border);
    }

    #[test]
    fn defaults_for_is_well_formed() {
        let config = defaults_for("gradient-purple");
        assert_eq!(config.theme_key, "gradient-purple");
        assert!(!config.profile.name.is_empty());
        assert!(!config.profile.role.is_empty());
        assert!(!config.profile.bio.is_empty());
        assert!(!config.skills.is_empty());
        assert_eq!(config.framework, Framework::ReactVite);
    }

    #[test]
    fn defaults_for_unknown_key_uses_default_theme() {
        let config = defaults_for("definitely-not-a-theme");
        assert_eq!(config.theme_key, DEFAULT_THEME_KEY);
    }
}
