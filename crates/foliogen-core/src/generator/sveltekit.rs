//! SvelteKit project synthesis. The leanest of the three targets: hero
//! and footer only, no optional sections.

use std::path::PathBuf;

use crate::config::PortfolioConfig;
use crate::generator::{html, styles};
use crate::theme::Theme;

pub fn files(config: &PortfolioConfig, theme: &Theme) -> Vec<(PathBuf, String)> {
    vec![
        (PathBuf::from("tsconfig.json"), tsconfig()),
        (PathBuf::from("svelte.config.js"), svelte_config()),
        (PathBuf::from("tailwind.config.js"), styles::tailwind_config()),
        (PathBuf::from("postcss.config.js"), styles::postcss_config()),
        (
            PathBuf::from("src/lib/styles/app.css"),
            styles::svelte_css(config, theme),
        ),
        (PathBuf::from("src/routes/+layout.svelte"), layout_svelte()),
        (
            PathBuf::from("src/routes/+page.svelte"),
            page_svelte(config, theme),
        ),
        (
            PathBuf::from("src/lib/components/Hero.svelte"),
            hero_svelte(config),
        ),
        (
            PathBuf::from("src/lib/components/Footer.svelte"),
            footer_svelte(config),
        ),
    ]
}

fn tsconfig() -> String {
    r#"{
    "extends": "./.svelte-kit/tsconfig.json",
    "compilerOptions": {
        "allowJs": true,
        "checkJs": true,
        "esModuleInterop": true,
        "forceConsistentCasingInFileNames": true,
        "resolveJsonModule": true,
        "skipLibCheck": true,
        "sourceMap": true,
        "strict": true
    }
}
"#
    .to_string()
}

fn svelte_config() -> String {
    r#"import adapter from '@sveltejs/adapter-auto';
import { vitePreprocess } from '@sveltejs/vite-plugin-svelte';

/** @type {import('@sveltejs/kit').Config} */
const config = {
    preprocess: vitePreprocess(),
    kit: {
        adapter: adapter()
    }
};

export default config;
"#
    .to_string()
}

fn layout_svelte() -> String {
    r#"<script>
    import '../lib/styles/app.css';
</script>

<slot />
"#
    .to_string()
}

const PAGE_SVELTE: &str = r#"<script lang="ts">
    import Hero from '$lib/components/Hero.svelte';
    import Footer from '$lib/components/Footer.svelte';
</script>

<svelte:head>
    <title>__TITLE__</title>
__META__
    <link rel="preconnect" href="https://fonts.googleapis.com" />
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
    <link rel="stylesheet" href="__FONTS__" />
</svelte:head>

<main class="min-h-screen bg-background text-foreground">
    <Hero />
    <Footer />
</main>
"#;

fn page_svelte(config: &PortfolioConfig, theme: &Theme) -> String {
    PAGE_SVELTE
        .replace("__TITLE__", &html::escape_html(&html::seo_title(config)))
        .replace("__META__", &html::meta_block(config))
        .replace("__FONTS__", &html::font_stylesheet_url(&theme.typography))
}

const HERO_SVELTE: &str = r##"<script lang="ts">
    const name = __NAME__;
    const role = __ROLE__;
    const bio = __BIO__;
    const skills: string[] = __SKILLS__;
</script>

<section class="min-h-screen flex items-center justify-center px-4 py-20">
    <div class="max-w-4xl mx-auto text-center">
        <h1 class="text-4xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
            {name}
        </h1>
        <h2 class="text-xl md:text-2xl text-muted-foreground mb-6">
            {role}
        </h2>
        <p class="text-lg text-muted-foreground max-w-2xl mx-auto mb-8">
            {bio}
        </p>
        <div class="flex flex-wrap justify-center gap-3 mb-12">
            {#each skills as skill}
                <span class="px-4 py-2 bg-muted rounded-full text-sm font-medium">
                    {skill}
                </span>
            {/each}
        </div>
        <div class="flex justify-center gap-4">
            <a
                href="#contact"
                class="px-8 py-3 bg-primary text-background rounded-lg font-medium hover:opacity-90 transition-opacity"
            >
                Get in Touch
            </a>
        </div>
    </div>
</section>

<style>
    .bg-clip-text {
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
</style>
"##;

fn js_str(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn hero_svelte(config: &PortfolioConfig) -> String {
    let skills: Vec<String> = config.skills.iter().map(|s| js_str(s)).collect();
    HERO_SVELTE
        .replace("__NAME__", &js_str(&config.profile.name))
        .replace("__ROLE__", &js_str(&config.profile.role))
        .replace("__BIO__", &js_str(&config.profile.bio))
        .replace("__SKILLS__", &format!("[{}]", skills.join(", ")))
}

const FOOTER_SVELTE: &str = r#"<script lang="ts">
    const currentYear = new Date().getFullYear();
    const name = __NAME__;
</script>

<footer class="py-8 px-4 border-t border-border">
    <div class="max-w-4xl mx-auto text-center">
        <p class="text-muted-foreground">
            Made with care by {name}
        </p>
        <p class="text-sm text-muted-foreground mt-2">
            &copy; {currentYear} All rights reserved.
        </p>
    </div>
</footer>
"#;

fn footer_svelte(config: &PortfolioConfig) -> String {
    FOOTER_SVELTE.replace("__NAME__", &js_str(&config.profile.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Framework;
    use crate::theme::{defaults_for, resolve};

    #[test]
    fn test_file_set_is_framework_shaped() {
        let mut config = defaults_for("modern-dark");
        config.framework = Framework::SvelteKit;
        let paths: Vec<PathBuf> = files(&config, resolve("modern-dark"))
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(paths.contains(&PathBuf::from("svelte.config.js")));
        assert!(paths.contains(&PathBuf::from("src/routes/+page.svelte")));
        assert!(paths.contains(&PathBuf::from("src/routes/+layout.svelte")));
        assert!(!paths.iter().any(|p| p.extension().is_some_and(|e| e == "tsx")));
    }

    #[test]
    fn test_page_head_carries_meta_and_fonts() {
        let mut config = defaults_for("modern-dark");
        config.framework = Framework::SvelteKit;
        let page = page_svelte(&config, resolve("modern-dark"));
        assert!(page.contains("<title>John Doe | Full Stack Developer</title>"));
        assert!(page.contains("og:title"));
        assert!(page.contains("fonts.googleapis.com"));
    }

    #[test]
    fn test_hero_serializes_skills_as_js_strings() {
        let mut config = defaults_for("modern-dark");
        config.framework = Framework::SvelteKit;
        config.skills = vec!["Svelte".to_string()];
        let hero = hero_svelte(&config);
        assert!(hero.contains("const skills: string[] = ['Svelte'];"));
    }
}
