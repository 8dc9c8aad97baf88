pub mod blog;
pub mod config;
pub mod error;
pub mod exec;
pub mod generator;
pub mod theme;
pub mod validator;

pub use config::{
    dedup_skills, validate_project_name, Features, Framework, LayoutMode, NameError,
    PortfolioConfig, Profile, Project, Seo, SocialLinks,
};
pub use error::GenerateError;
pub use generator::{generate, GenerateOptions, GeneratedTree};
pub use theme::{defaults_for, default_theme, resolve, themes, Palette, PaletteOverrides, Theme};
pub use validator::{validate, ValidationReport};
