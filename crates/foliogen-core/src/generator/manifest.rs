//! Generated `package.json` manifests.
//!
//! The dependency set is a deterministic function of the framework choice
//! and the enabled features. The `name` field always carries the
//! caller-supplied project name, never the user's display name.

use serde_json::{json, Map, Value};

use crate::config::{Framework, PortfolioConfig};

pub fn package_json(project_name: &str, config: &PortfolioConfig) -> String {
    let mut manifest = match config.framework {
        Framework::ReactVite => react_vite_manifest(project_name),
        Framework::NextJs => nextjs_manifest(project_name),
        Framework::SvelteKit => sveltekit_manifest(project_name),
    };

    if config.features.blog && config.framework != Framework::SvelteKit {
        insert_dependency(&mut manifest, "react-markdown", "^9.0.1");
    }

    let mut rendered = serde_json::to_string_pretty(&manifest).expect("manifest is valid JSON");
    rendered.push('\n');
    rendered
}

fn insert_dependency(manifest: &mut Value, name: &str, version: &str) {
    if let Some(deps) = manifest
        .get_mut("dependencies")
        .and_then(Value::as_object_mut)
    {
        deps.insert(name.to_string(), Value::String(version.to_string()));
    } else if let Some(obj) = manifest.as_object_mut() {
        let mut deps = Map::new();
        deps.insert(name.to_string(), Value::String(version.to_string()));
        obj.insert("dependencies".to_string(), Value::Object(deps));
    }
}

fn react_vite_manifest(project_name: &str) -> Value {
    json!({
        "name": project_name,
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "tsc && vite build",
            "lint": "eslint src --ext ts,tsx --report-unused-disable-directives --max-warnings 0",
            "preview": "vite preview",
            "format": "prettier --write \"src/**/*.{ts,tsx,css}\""
        },
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "lucide-react": "^0.303.0",
            "clsx": "^2.1.0"
        },
        "devDependencies": {
            "@types/react": "^18.2.47",
            "@types/react-dom": "^18.2.18",
            "@typescript-eslint/eslint-plugin": "^6.18.1",
            "@typescript-eslint/parser": "^6.18.1",
            "@vitejs/plugin-react": "^4.2.1",
            "autoprefixer": "^10.4.16",
            "eslint": "^8.56.0",
            "eslint-plugin-react-hooks": "^4.6.0",
            "eslint-plugin-react-refresh": "^0.4.5",
            "postcss": "^8.4.33",
            "prettier": "^3.2.2",
            "tailwindcss": "^3.4.1",
            "typescript": "^5.3.3",
            "vite": "^5.0.11"
        }
    })
}

fn nextjs_manifest(project_name: &str) -> Value {
    json!({
        "name": project_name,
        "private": true,
        "version": "0.1.0",
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start",
            "lint": "next lint",
            "format": "prettier --write \"src/**/*.{ts,tsx,css}\""
        },
        "dependencies": {
            "next": "^14.1.0",
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "lucide-react": "^0.303.0",
            "clsx": "^2.1.0"
        },
        "devDependencies": {
            "@types/node": "^20.11.0",
            "@types/react": "^18.2.47",
            "@types/react-dom": "^18.2.18",
            "autoprefixer": "^10.4.16",
            "eslint": "^8.56.0",
            "eslint-config-next": "^14.1.0",
            "postcss": "^8.4.33",
            "prettier": "^3.2.2",
            "tailwindcss": "^3.4.1",
            "typescript": "^5.3.3"
        }
    })
}

fn sveltekit_manifest(project_name: &str) -> Value {
    json!({
        "name": project_name,
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": {
            "dev": "vite dev",
            "build": "vite build",
            "preview": "vite preview",
            "format": "prettier --write \"src/**/*.{ts,svelte,css}\""
        },
        "dependencies": {
            "lucide-svelte": "^0.303.0"
        },
        "devDependencies": {
            "@sveltejs/adapter-auto": "^3.1.0",
            "@sveltejs/kit": "^2.0.6",
            "@sveltejs/vite-plugin-svelte": "^3.0.1",
            "autoprefixer": "^10.4.16",
            "postcss": "^8.4.33",
            "prettier": "^3.2.2",
            "prettier-plugin-svelte": "^3.1.2",
            "svelte": "^4.2.8",
            "tailwindcss": "^3.4.1",
            "typescript": "^5.3.3",
            "vite": "^5.0.11"
        }
    })
}
