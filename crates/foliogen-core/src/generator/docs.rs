//! Shared non-code artifacts: README, license, ignore files, SEO files,
//! deploy configs, and the runtime portfolio config JSON.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use serde_json::json;

use crate::config::{Framework, PortfolioConfig};
use crate::theme;

/// Files every framework target receives.
pub fn common_files(config: &PortfolioConfig, project_name: &str) -> Vec<(PathBuf, String)> {
    let mut files = vec![
        (PathBuf::from("README.md"), readme(project_name, config)),
        (PathBuf::from("LICENSE"), license(&config.profile.name)),
        (PathBuf::from(".gitignore"), gitignore()),
        (PathBuf::from(".env.example"), env_example()),
        (PathBuf::from(".prettierrc"), prettierrc()),
        (
            PathBuf::from("src/config/portfolio.json"),
            portfolio_json(config),
        ),
        (
            PathBuf::from(config.framework.public_dir()).join("favicon.svg"),
            favicon_svg(config),
        ),
    ];

    if let Some(eslint) = eslint_config(config.framework) {
        files.push((PathBuf::from(".eslintrc.json"), eslint));
    }

    files
}

/// The runtime configuration the generated site reads: flattened
/// user-facing fields only.
pub fn portfolio_json(config: &PortfolioConfig) -> String {
    let value = json!({
        "name": config.profile.name,
        "role": config.profile.role,
        "bio": config.profile.bio,
        "email": config.profile.email,
        "skills": config.skills,
        "projects": config.projects,
        "social": config.social,
        "theme": config.theme_key,
    });
    let mut rendered = serde_json::to_string_pretty(&value).expect("portfolio config is valid JSON");
    rendered.push('\n');
    rendered
}

fn readme(project_name: &str, config: &PortfolioConfig) -> String {
    let theme = theme::resolve(&config.theme_key);
    let mut feature_lines = String::new();
    if config.features.contact_form {
        feature_lines.push_str("- Contact form\n");
    }
    if config.features.gallery {
        feature_lines.push_str("- Gallery / portfolio showcase\n");
    }
    if config.features.blog {
        feature_lines.push_str("- Blog section with markdown content\n");
    }
    if config.features.testimonials {
        feature_lines.push_str("- Testimonials\n");
    }
    feature_lines.push_str("- Dark/light mode toggle\n- Fully responsive layout\n");

    format!(
        r#"# {project_name}

**{theme_name}** portfolio for {name}, built with {framework}.

## Getting Started

```bash
# Install dependencies
npm install

# Start development server
npm run dev

# Build for production
npm run build
```

## Features

{features}
## Customization

Edit `src/config/portfolio.json` to update your information, and
`src/styles` for colors and typography.

## Deployment

- Vercel: `vercel`
- Netlify: `netlify deploy`
- Static hosting: upload the build output directory

## License

MIT
"#,
        project_name = project_name,
        name = config.profile.name,
        theme_name = theme.name,
        framework = config.framework.label(),
        features = feature_lines,
    )
}

/// MIT license stamped with the current year and the configured name.
fn license(holder: &str) -> String {
    let year = Local::now().year();
    format!(
        r#"MIT License

Copyright (c) {year} {holder}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}

fn gitignore() -> String {
    r#"# Dependencies
node_modules/

# Build outputs
dist/
.next/
.svelte-kit/
build/

# Environment files
.env
.env.local
.env.*.local

# IDE
.vscode/
.idea/

# OS
.DS_Store
Thumbs.db

# Logs
*.log
npm-debug.log*

# TypeScript
*.tsbuildinfo
"#
    .to_string()
}

fn env_example() -> String {
    r#"# Environment Variables
# Copy this file to .env and fill in your values

# Site configuration
VITE_SITE_URL=http://localhost:5173

# Contact form endpoint (optional)
# VITE_CONTACT_API_URL=

# Analytics (optional)
# VITE_GA_ID=
"#
    .to_string()
}

fn prettierrc() -> String {
    r#"{
    "semi": true,
    "singleQuote": true,
    "tabWidth": 4,
    "trailingComma": "es5",
    "printWidth": 100
}
"#
    .to_string()
}

/// SvelteKit projects use their own linting setup, so only the React
/// frameworks get an eslint config.
fn eslint_config(framework: Framework) -> Option<String> {
    match framework {
        Framework::ReactVite => Some(
            r#"{
    "root": true,
    "env": { "browser": true, "es2020": true },
    "extends": [
        "eslint:recommended",
        "plugin:@typescript-eslint/recommended",
        "plugin:react-hooks/recommended"
    ],
    "ignorePatterns": ["dist", ".eslintrc.json"],
    "parser": "@typescript-eslint/parser",
    "plugins": ["react-refresh"],
    "rules": {
        "react-refresh/only-export-components": [
            "warn",
            { "allowConstantExport": true }
        ]
    }
}
"#
            .to_string(),
        ),
        Framework::NextJs => Some(
            r#"{
    "extends": ["next/core-web-vitals"]
}
"#
            .to_string(),
        ),
        Framework::SvelteKit => None,
    }
}

/// Simple monogram favicon in the theme's primary color.
fn favicon_svg(config: &PortfolioConfig) -> String {
    let initial = config
        .profile
        .name
        .chars()
        .next()
        .unwrap_or('P')
        .to_uppercase()
        .to_string();
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">
    <rect width="32" height="32" rx="8" fill="hsl({primary})" />
    <text x="16" y="22" font-family="sans-serif" font-size="16" font-weight="bold" fill="hsl({background})" text-anchor="middle">{initial}</text>
</svg>
"#,
        primary = config.colors.primary,
        background = config.colors.background,
    )
}

pub fn sitemap_xml(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    <url>
        <loc>{base}/</loc>
        <changefreq>monthly</changefreq>
        <priority>1.0</priority>
    </url>
</urlset>
"#
    )
}

pub fn robots_txt(site_url: &str) -> String {
    let base = site_url.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {base}/sitemap.xml\n")
}

pub fn vercel_json(framework: Framework) -> String {
    let value = json!({
        "framework": if framework == Framework::NextJs { "nextjs" } else { "vite" },
        "buildCommand": "npm run build",
        "outputDirectory": output_dir(framework),
    });
    let mut rendered = serde_json::to_string_pretty(&value).expect("vercel config is valid JSON");
    rendered.push('\n');
    rendered
}

pub fn netlify_toml(framework: Framework) -> String {
    format!(
        r#"[build]
  command = "npm run build"
  publish = "{publish}"

[[redirects]]
  from = "/*"
  to = "/index.html"
  status = 200
"#,
        publish = output_dir(framework),
    )
}

fn output_dir(framework: Framework) -> &'static str {
    match framework {
        Framework::NextJs => ".next",
        Framework::ReactVite | Framework::SvelteKit => "dist",
    }
}
