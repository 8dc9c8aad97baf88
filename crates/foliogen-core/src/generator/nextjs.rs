//! Next.js (app router) project synthesis.

use std::path::PathBuf;

use crate::config::{LayoutMode, PortfolioConfig};
use crate::generator::{features, html, styles};
use crate::theme::Theme;

pub fn files(config: &PortfolioConfig, theme: &Theme) -> Vec<(PathBuf, String)> {
    let mut files = vec![
        (PathBuf::from("tsconfig.json"), tsconfig()),
        (PathBuf::from("next.config.js"), next_config()),
        (PathBuf::from("tailwind.config.js"), styles::tailwind_config()),
        (PathBuf::from("postcss.config.js"), styles::postcss_config()),
        (
            PathBuf::from("src/app/globals.css"),
            styles::global_css(config, theme),
        ),
        (PathBuf::from("src/app/layout.tsx"), layout_tsx(config, theme)),
        (PathBuf::from("src/app/page.tsx"), page_tsx(config)),
        (
            PathBuf::from("src/components/Hero.tsx"),
            features::hero_tsx(config),
        ),
        (
            PathBuf::from("src/components/Projects.tsx"),
            features::projects_tsx(),
        ),
        (
            PathBuf::from("src/components/ThemeToggle.tsx"),
            features::theme_toggle_tsx(),
        ),
        (
            PathBuf::from("src/components/Footer.tsx"),
            features::footer_tsx(config),
        ),
    ];

    // The blog section only exists on the multi-page layout here; the
    // single-page Next.js variant stays a plain landing page.
    if blog_enabled(config) {
        files.push((
            PathBuf::from("src/components/Blog.tsx"),
            features::blog_tsx(),
        ));
        files.push((PathBuf::from("src/lib/blog.ts"), features::blog_lib_ts()));
        files.push((
            PathBuf::from("content/hello-world.md"),
            features::seed_article_md(),
        ));
    }

    files
}

fn blog_enabled(config: &PortfolioConfig) -> bool {
    config.features.blog && config.layout == LayoutMode::MultiPage
}

fn js_str(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

const LAYOUT_TSX: &str = r#"import type { Metadata } from 'next';
import './globals.css';

export const metadata: Metadata = {
    title: __TITLE__,
    description: __DESCRIPTION__,
    openGraph: {
        title: __TITLE__,
        description: __DESCRIPTION__,
        type: 'website',
    },
    twitter: {
        card: 'summary_large_image',
        title: __TITLE__,
        description: __DESCRIPTION__,
    },
};

export default function RootLayout({
    children,
}: {
    children: React.ReactNode;
}) {
    return (
        <html lang="en" className="dark">
            <head>
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossOrigin="anonymous" />
                <link rel="stylesheet" href="__FONTS__" />
            </head>
            <body>{children}</body>
        </html>
    );
}
"#;

fn layout_tsx(config: &PortfolioConfig, theme: &Theme) -> String {
    LAYOUT_TSX
        .replace("__TITLE__", &js_str(&html::seo_title(config)))
        .replace("__DESCRIPTION__", &js_str(&config.profile.bio))
        .replace("__FONTS__", &html::font_stylesheet_url(&theme.typography))
}

fn page_tsx(config: &PortfolioConfig) -> String {
    let mut components = vec!["Hero", "Projects"];
    if blog_enabled(config) {
        components.push("Blog");
    }
    components.push("Footer");

    let imports: Vec<String> = components
        .iter()
        .map(|c| format!("import {c} from '@/components/{c}';"))
        .collect();
    let sections: Vec<String> = components
        .iter()
        .map(|c| format!("            <{c} />"))
        .collect();

    format!(
        "{imports}\n\nexport default function Home() {{\n    return (\n        <main className=\"min-h-screen\">\n{sections}\n        </main>\n    );\n}}\n",
        imports = imports.join("\n"),
        sections = sections.join("\n"),
    )
}

fn tsconfig() -> String {
    r#"{
    "compilerOptions": {
        "target": "es5",
        "lib": ["dom", "dom.iterable", "esnext"],
        "allowJs": true,
        "skipLibCheck": true,
        "strict": true,
        "noEmit": true,
        "esModuleInterop": true,
        "module": "esnext",
        "moduleResolution": "bundler",
        "resolveJsonModule": true,
        "isolatedModules": true,
        "jsx": "preserve",
        "incremental": true,
        "plugins": [{ "name": "next" }],
        "paths": {
            "@/*": ["./src/*"]
        }
    },
    "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
    "exclude": ["node_modules"]
}
"#
    .to_string()
}

fn next_config() -> String {
    r#"/** @type {import('next').NextConfig} */
const nextConfig = {
    reactStrictMode: true,
};

module.exports = nextConfig;
"#
    .to_string()
}
