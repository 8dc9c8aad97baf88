//! React + Vite project synthesis.

use std::path::PathBuf;

use crate::config::PortfolioConfig;
use crate::generator::{features, html, styles};
use crate::theme::Theme;

pub fn files(config: &PortfolioConfig, theme: &Theme) -> Vec<(PathBuf, String)> {
    let mut files = vec![
        (PathBuf::from("tsconfig.json"), tsconfig()),
        (PathBuf::from("tsconfig.node.json"), tsconfig_node()),
        (PathBuf::from("vite.config.ts"), vite_config()),
        (PathBuf::from("index.html"), html::index_html(config, theme)),
        (PathBuf::from("tailwind.config.js"), styles::tailwind_config()),
        (PathBuf::from("postcss.config.js"), styles::postcss_config()),
        (
            PathBuf::from("src/styles/globals.css"),
            styles::global_css(config, theme),
        ),
        (PathBuf::from("src/main.tsx"), features::main_tsx()),
        (PathBuf::from("src/App.tsx"), features::app_tsx(config)),
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

    if config.features.gallery {
        files.push((
            PathBuf::from("src/components/Gallery.tsx"),
            features::gallery_tsx(),
        ));
    }
    if config.features.testimonials {
        files.push((
            PathBuf::from("src/components/Testimonials.tsx"),
            features::testimonials_tsx(),
        ));
    }
    if config.features.contact_form {
        files.push((
            PathBuf::from("src/components/Contact.tsx"),
            features::contact_tsx(config),
        ));
    }
    if config.features.blog {
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

fn tsconfig() -> String {
    r#"{
    "compilerOptions": {
        "target": "ES2020",
        "useDefineForClassFields": true,
        "lib": ["ES2020", "DOM", "DOM.Iterable"],
        "module": "ESNext",
        "skipLibCheck": true,
        "moduleResolution": "bundler",
        "allowImportingTsExtensions": true,
        "resolveJsonModule": true,
        "isolatedModules": true,
        "noEmit": true,
        "jsx": "react-jsx",
        "strict": true,
        "noUnusedLocals": true,
        "noUnusedParameters": true,
        "noFallthroughCasesInSwitch": true,
        "baseUrl": ".",
        "paths": {
            "@/*": ["./src/*"]
        }
    },
    "include": ["src"],
    "references": [{ "path": "./tsconfig.node.json" }]
}
"#
    .to_string()
}

fn tsconfig_node() -> String {
    r#"{
    "compilerOptions": {
        "composite": true,
        "skipLibCheck": true,
        "module": "ESNext",
        "moduleResolution": "bundler",
        "allowSyntheticDefaultImports": true
    },
    "include": ["vite.config.ts"]
}
"#
    .to_string()
}

fn vite_config() -> String {
    r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';
import path from 'path';

export default defineConfig({
    plugins: [react()],
    resolve: {
        alias: {
            '@': path.resolve(__dirname, './src'),
        },
    },
});
"#
    .to_string()
}
