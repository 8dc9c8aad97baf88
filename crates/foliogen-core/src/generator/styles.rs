//! Stylesheet and CSS-toolchain config synthesis.

use crate::config::PortfolioConfig;
use crate::theme::Theme;

const SERIF_FAMILIES: &[&str] = &["Playfair Display", "Merriweather"];

fn font_stack(family: &str) -> String {
    if SERIF_FAMILIES.contains(&family) {
        format!("'{family}', Georgia, serif")
    } else {
        format!("'{family}', ui-sans-serif, system-ui, sans-serif")
    }
}

/// The global stylesheet for the React-based frameworks. Every palette
/// slot, both font families, and the layout hints are interpolated; the
/// palette itself is already fully resolved (missing custom slots fall
/// back during collection), so no slot can be absent here.
pub fn global_css(config: &PortfolioConfig, theme: &Theme) -> String {
    let mut vars = String::new();
    for (slot, value) in config.colors.slots() {
        vars.push_str(&format!("        --{slot}: {value};\n"));
    }
    vars.push_str(&format!(
        "        --radius: {};\n        --grid-columns: {};\n",
        theme.layout.corner_radius, theme.layout.grid_columns
    ));
    vars.push_str(&format!(
        "        --font-heading: {};\n        --font-body: {};\n",
        font_stack(&theme.typography.heading_family),
        font_stack(&theme.typography.body_family)
    ));

    format!(
        r#"@tailwind base;
@tailwind components;
@tailwind utilities;

@layer base {{
    :root {{
{vars}    }}
}}

@layer base {{
    * {{
        @apply border-border;
    }}

    body {{
        @apply bg-background text-foreground;
        font-family: var(--font-body);
        font-weight: {body_weight};
    }}

    h1, h2, h3, h4, h5, h6 {{
        font-family: var(--font-heading);
        font-weight: {heading_weight};
    }}
}}

html {{
    scroll-behavior: smooth;
}}

::-webkit-scrollbar {{
    width: 8px;
}}

::-webkit-scrollbar-track {{
    background: hsl(var(--muted));
}}

::-webkit-scrollbar-thumb {{
    background: hsl(var(--primary));
    border-radius: 4px;
}}

::selection {{
    background: hsl(var(--primary) / 0.3);
}}
"#,
        vars = vars,
        body_weight = theme.typography.body_weight,
        heading_weight = theme.typography.heading_weight,
    )
}

/// The SvelteKit variant: same variables, plain CSS body rules.
pub fn svelte_css(config: &PortfolioConfig, theme: &Theme) -> String {
    let mut vars = String::new();
    for (slot, value) in config.colors.slots() {
        vars.push_str(&format!("    --{slot}: {value};\n"));
    }
    vars.push_str(&format!(
        "    --radius: {};\n    --grid-columns: {};\n",
        theme.layout.corner_radius, theme.layout.grid_columns
    ));

    format!(
        r#"@tailwind base;
@tailwind components;
@tailwind utilities;

:root {{
{vars}}}

html {{
    scroll-behavior: smooth;
}}

body {{
    background-color: hsl(var(--background));
    color: hsl(var(--foreground));
    font-family: {body_stack};
}}

h1, h2, h3 {{
    font-family: {heading_stack};
}}
"#,
        vars = vars,
        body_stack = font_stack(&theme.typography.body_family),
        heading_stack = font_stack(&theme.typography.heading_family),
    )
}

pub fn tailwind_config() -> String {
    r#"/** @type {import('tailwindcss').Config} */
export default {
    content: [
        './index.html',
        './src/**/*.{js,ts,jsx,tsx,svelte}',
    ],
    darkMode: 'class',
    theme: {
        extend: {
            colors: {
                border: 'hsl(var(--border))',
                background: 'hsl(var(--background))',
                foreground: 'hsl(var(--foreground))',
                card: 'hsl(var(--card))',
                primary: {
                    DEFAULT: 'hsl(var(--primary))',
                    foreground: 'hsl(var(--background))',
                },
                secondary: {
                    DEFAULT: 'hsl(var(--secondary))',
                    foreground: 'hsl(var(--background))',
                },
                accent: {
                    DEFAULT: 'hsl(var(--accent))',
                    foreground: 'hsl(var(--background))',
                },
                muted: {
                    DEFAULT: 'hsl(var(--muted))',
                    foreground: 'hsl(var(--foreground) / 0.7)',
                },
            },
            borderRadius: {
                DEFAULT: 'var(--radius)',
                lg: 'var(--radius)',
            },
            animation: {
                'fade-in': 'fadeIn 0.5s ease-out',
                'slide-up': 'slideUp 0.5s ease-out',
            },
            keyframes: {
                fadeIn: {
                    '0%': { opacity: '0' },
                    '100%': { opacity: '1' },
                },
                slideUp: {
                    '0%': { opacity: '0', transform: 'translateY(20px)' },
                    '100%': { opacity: '1', transform: 'translateY(0)' },
                },
            },
        },
    },
    plugins: [],
};
"#
    .to_string()
}

pub fn postcss_config() -> String {
    r#"export default {
    plugins: {
        tailwindcss: {},
        autoprefixer: {},
    },
};
"#
    .to_string()
}
