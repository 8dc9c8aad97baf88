//! Entry-document synthesis: SEO meta tags and web-font loading.

use crate::config::PortfolioConfig;
use crate::theme::{Theme, Typography};

/// Families with a known Google Fonts mapping. Anything else falls back
/// to the default bundle instead of omitting font loading.
const KNOWN_FAMILIES: &[&str] = &[
    "Inter",
    "Space Grotesk",
    "Sora",
    "DM Sans",
    "Playfair Display",
    "Merriweather",
    "JetBrains Mono",
];

const FALLBACK_FAMILY: &str = "Inter";
const FALLBACK_WEIGHTS: [u16; 2] = [400, 700];

/// Minimal escaping for text interpolated into HTML attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Page title in the `Name | Role` form used across all frameworks.
pub fn seo_title(config: &PortfolioConfig) -> String {
    format!("{} | {}", config.profile.name, config.profile.role)
}

/// Builds the Google Fonts stylesheet URL for a theme's typography.
/// A family without a known mapping is replaced by the fallback bundle.
pub fn font_stylesheet_url(typography: &Typography) -> String {
    let mut families: Vec<(String, Vec<u16>)> = Vec::new();

    let mut push = |family: &str, weight: u16| {
        if let Some(entry) = families.iter_mut().find(|(f, _)| f == family) {
            if !entry.1.contains(&weight) {
                entry.1.push(weight);
            }
        } else {
            families.push((family.to_string(), vec![weight]));
        }
    };

    for (family, weight) in [
        (&typography.heading_family, typography.heading_weight),
        (&typography.body_family, typography.body_weight),
    ] {
        if KNOWN_FAMILIES.contains(&family.as_str()) {
            push(family, weight);
        } else {
            for w in FALLBACK_WEIGHTS {
                push(FALLBACK_FAMILY, w);
            }
        }
    }

    let specs: Vec<String> = families
        .into_iter()
        .map(|(family, mut weights)| {
            weights.sort_unstable();
            let weights: Vec<String> = weights.iter().map(u16::to_string).collect();
            format!("family={}:wght@{}", family.replace(' ', "+"), weights.join(";"))
        })
        .collect();

    format!(
        "https://fonts.googleapis.com/css2?{}&display=swap",
        specs.join("&")
    )
}

/// SEO/OG/Twitter meta tags shared by the plain-HTML entry documents.
pub fn meta_block(config: &PortfolioConfig) -> String {
    let title = escape_html(&seo_title(config));
    let description = escape_html(&config.profile.bio);
    let author = escape_html(&config.profile.name);

    let mut tags = format!(
        r#"        <meta name="description" content="{description}" />
        <meta name="author" content="{author}" />
"#
    );
    if !config.seo.keywords.is_empty() {
        tags.push_str(&format!(
            "        <meta name=\"keywords\" content=\"{}\" />\n",
            escape_html(&config.seo.keywords.join(", "))
        ));
    }
    tags.push_str(&format!(
        r#"        <meta property="og:title" content="{title}" />
        <meta property="og:description" content="{description}" />
        <meta property="og:type" content="website" />
"#
    ));
    if let Some(site_url) = config.seo.site_url.as_deref() {
        tags.push_str(&format!(
            "        <meta property=\"og:url\" content=\"{}\" />\n",
            escape_html(site_url)
        ));
    }
    tags.push_str(&format!(
        r#"        <meta name="twitter:card" content="summary_large_image" />
        <meta name="twitter:title" content="{title}" />
        <meta name="twitter:description" content="{description}" />"#
    ));
    tags
}

/// The Vite entry document.
pub fn index_html(config: &PortfolioConfig, theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="UTF-8" />
        <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
        <meta name="viewport" content="width=device-width, initial-scale=1.0" />
{meta}
        <title>{title}</title>
        <link rel="preconnect" href="https://fonts.googleapis.com" />
        <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
        <link rel="stylesheet" href="{fonts}" />
    </head>
    <body>
        <div id="root"></div>
        <script type="module" src="/src/main.tsx"></script>
    </body>
</html>
"#,
        meta = meta_block(config),
        title = escape_html(&seo_title(config)),
        fonts = font_stylesheet_url(&theme.typography),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{defaults_for, resolve};

    #[test]
    fn test_index_html_has_seo_and_social_meta() {
        let mut config = defaults_for("modern-dark");
        config.seo.site_url = Some("https://jane.dev".to_string());
        config.seo.keywords = vec!["portfolio".to_string(), "developer".to_string()];
        let html = index_html(&config, resolve("modern-dark"));

        assert!(html.contains("<title>John Doe | Full Stack Developer</title>"));
        assert!(html.contains("meta name=\"description\""));
        assert!(html.contains("meta property=\"og:title\""));
        assert!(html.contains("meta property=\"og:url\" content=\"https://jane.dev\""));
        assert!(html.contains("meta name=\"twitter:card\" content=\"summary_large_image\""));
        assert!(html.contains("portfolio, developer"));
    }

    #[test]
    fn test_og_url_omitted_without_site_url() {
        let config = defaults_for("modern-dark");
        let html = index_html(&config, resolve("modern-dark"));
        assert!(!html.contains("og:url"));
        assert!(!html.contains("keywords"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut config = defaults_for("modern-dark");
        config.profile.bio = r#"Builds "fast" <web> tools & apps"#.to_string();
        let html = index_html(&config, resolve("modern-dark"));
        assert!(html.contains("Builds &quot;fast&quot; &lt;web&gt; tools &amp; apps"));
    }

    #[test]
    fn test_font_url_for_known_families() {
        let theme = resolve("modern-dark");
        let url = font_stylesheet_url(&theme.typography);
        assert!(url.contains("family=Space+Grotesk:wght@700"));
        assert!(url.contains("family=Inter:wght@400"));
        assert!(url.ends_with("&display=swap"));
    }

    #[test]
    fn test_unknown_family_falls_back_to_default_bundle() {
        let mut typography = resolve("modern-dark").typography.clone();
        typography.heading_family = "Comic Serif Pro".to_string();
        typography.body_family = "Comic Serif Pro".to_string();
        let url = font_stylesheet_url(&typography);
        assert!(url.contains("family=Inter:wght@400;700"));
        assert!(!url.contains("Comic"));
    }

    #[test]
    fn test_same_family_merges_weights() {
        let mut typography = resolve("modern-dark").typography.clone();
        typography.heading_family = "Inter".to_string();
        typography.body_family = "Inter".to_string();
        typography.heading_weight = 700;
        typography.body_weight = 400;
        let url = font_stylesheet_url(&typography);
        assert!(url.contains("family=Inter:wght@400;700"));
        assert_eq!(url.matches("family=").count(), 1);
    }
}
