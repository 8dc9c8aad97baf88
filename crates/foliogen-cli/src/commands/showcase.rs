//! Batch mode: one generated project per catalog theme under a fixed
//! parent directory. Individual failures are recorded in the tally and
//! never abort the batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use console::style;

use foliogen_core::config::Framework;
use foliogen_core::generator::{generate, GenerateOptions};
use foliogen_core::theme::{self, defaults_for};
use foliogen_core::{exec, validator};

use crate::ui;

const SHOWCASE_DIR: &str = "foliogen-showcase";

pub struct ShowcaseArgs {
    pub framework: Option<String>,
    pub skip_validation: bool,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ItemResult {
    pub name: String,
    pub success: bool,
    pub error: Option<String>,
}

/// Generates one project per theme into `parent` (which must already
/// exist). A failing theme is recorded with its error string and the
/// remaining themes are still attempted.
pub fn generate_all(parent: &Path, framework: Framework) -> Vec<ItemResult> {
    theme::themes()
        .iter()
        .map(|theme| {
            let project_name = format!("portfolio-{}", theme.key);
            let target = parent.join(&project_name);
            let mut config = defaults_for(theme.key);
            config.framework = framework;

            match generate(&config, &project_name, &target, &GenerateOptions::default()) {
                Ok(_) => ItemResult {
                    name: project_name,
                    success: true,
                    error: None,
                },
                Err(err) => ItemResult {
                    name: project_name,
                    success: false,
                    error: Some(err.to_string()),
                },
            }
        })
        .collect()
}

pub fn run(args: ShowcaseArgs) -> Result<()> {
    ui::banner();

    let framework = match args.framework.as_deref() {
        Some(raw) => raw.parse::<Framework>().map_err(|e| anyhow!(e))?,
        None => Framework::ReactVite,
    };

    let base = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("cannot resolve current directory")?,
    };
    let parent = base.join(SHOWCASE_DIR);
    if parent.exists() {
        bail!("directory '{SHOWCASE_DIR}' already exists");
    }
    fs::create_dir_all(&parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;

    ui::header(&format!(
        "Generating {} themes as {} projects",
        theme::themes().len(),
        framework.label()
    ));

    let results = generate_all(&parent, framework);

    for item in results.iter().filter(|item| item.success) {
        let target = parent.join(&item.name);
        ui::best_effort(
            &format!("npm install ({})", item.name),
            exec::run_in(&target, "npm", &["install"]),
        );
        if !args.skip_validation {
            let report = validator::validate(&target, false);
            println!(
                "{}",
                ui::check_line(report.success(), &format!("{} validation", item.name))
            );
        }
    }

    print_tally(&results, &parent);
    Ok(())
}

fn print_tally(results: &[ItemResult], parent: &Path) {
    let successful = results.iter().filter(|r| r.success).count();
    let failed = results.len() - successful;

    println!("\n{}", style("Generation summary").cyan().bold());
    println!("{}", style("─".repeat(48)).dim());
    for result in results {
        match &result.error {
            None => println!("  {} {}", style("✓").green(), result.name),
            Some(error) => println!("  {} {}: {}", style("✗").red(), result.name, error),
        }
    }
    println!("{}", style("─".repeat(48)).dim());
    println!(
        "  Total: {} | {} | {}",
        results.len(),
        style(format!("Success: {successful}")).green(),
        if failed > 0 {
            style(format!("Failed: {failed}")).red()
        } else {
            style("Failed: 0".to_string()).dim()
        }
    );
    println!("\nAll projects generated in: {}", parent.display());
}
