//! The primary command: collect (or default) a configuration, generate
//! the project, then run the best-effort install / validation / git
//! steps strictly in that order.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use foliogen_core::config::{validate_project_name, Framework};
use foliogen_core::generator::{generate, GenerateOptions};
use foliogen_core::theme::{defaults_for, resolve};
use foliogen_core::{exec, validator};

use crate::collect::{collect_config, CollectError, CollectHints, UserPrompt};
use crate::prompt::DialoguerPrompt;
use crate::ui;

const DEFAULT_PROJECT_NAME: &str = "my-portfolio";

pub struct NewArgs {
    pub name: Option<String>,
    pub yes: bool,
    pub theme: Option<String>,
    pub framework: Option<String>,
    pub deploy_ready: bool,
    pub git: bool,
    pub assets: Option<PathBuf>,
    pub skip_validation: bool,
    pub fix: bool,
    pub path: Option<PathBuf>,
}

pub fn run(args: NewArgs) -> Result<()> {
    ui::banner();

    let prompt = DialoguerPrompt::new();
    let framework = parse_framework(args.framework.as_deref())?;

    let name = match args.name {
        Some(name) => name,
        None if args.yes => DEFAULT_PROJECT_NAME.to_string(),
        None => prompt
            .input_project_name(DEFAULT_PROJECT_NAME)
            .map_err(|e| anyhow!("{e}"))?,
    };
    validate_project_name(&name).map_err(|e| anyhow!("Invalid project name: {e}"))?;

    let parent = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("cannot resolve current directory")?,
    };
    let target = parent.join(&name);
    ui::debug(&format!("target directory: {}", target.display()));
    if target.exists() {
        bail!("directory '{name}' already exists");
    }

    let config = if args.yes {
        let theme_key = args.theme.as_deref().unwrap_or("modern-dark");
        let theme = resolve(theme_key);
        ui::info(&format!("Using theme defaults: {}", theme.name));
        let mut config = defaults_for(theme_key);
        if let Some(framework) = framework {
            config.framework = framework;
        }
        config
    } else {
        let hints = CollectHints {
            theme: args.theme.clone(),
            framework,
        };
        collect_config(&prompt, &hints).map_err(|e| match e {
            CollectError::Aborted => anyhow!("cancelled by user"),
            other => anyhow!("{other}"),
        })?
    };

    ui::header("Generating project files");
    if let Some(assets) = &args.assets {
        ui::debug(&format!("custom assets source: {}", assets.display()));
    }
    let options = GenerateOptions {
        deploy_ready: args.deploy_ready,
        custom_assets: args.assets.clone(),
    };
    let tree = generate(&config, &name, &target, &options)
        .with_context(|| format!("failed to generate '{name}'"))?;
    ui::success(&format!(
        "Created {} files in {}",
        tree.files.len(),
        tree.root.display()
    ));

    ui::header("Installing dependencies");
    let installed = with_spinner("Installing packages...", || {
        ui::best_effort("npm install", exec::run_in(&target, "npm", &["install"]))
    });
    if installed {
        ui::success("Dependencies installed");
    } else {
        ui::info("You can install them manually by running: npm install");
    }

    let report = if args.skip_validation {
        None
    } else {
        ui::header("Validating generated project");
        Some(with_spinner("Running checks...", || {
            validator::validate(&target, args.fix)
        }))
    };

    if args.git {
        if init_git(&target) {
            ui::success("Git repository initialized");
        } else {
            ui::warn("Failed to initialize git repository");
        }
    }

    ui::print_summary(&name, &config, report.as_ref(), args.deploy_ready);
    Ok(())
}

fn parse_framework(raw: Option<&str>) -> Result<Option<Framework>> {
    raw.map(|value| value.parse::<Framework>().map_err(|e| anyhow!(e)))
        .transpose()
}

fn with_spinner<T>(message: &'static str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = work();
    spinner.finish_and_clear();
    result
}

/// Best-effort repository setup: init, stage, and one initial commit.
fn init_git(target: &Path) -> bool {
    let steps: [&[&str]; 3] = [
        &["init"],
        &["add", "."],
        &["commit", "-m", "Initial commit"],
    ];
    for step in steps {
        match exec::run_in(target, "git", step) {
            Ok(output) if output.success => {}
            _ => return false,
        }
    }
    true
}
