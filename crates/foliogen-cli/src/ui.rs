//! Styled terminal output.

use console::style;

use foliogen_core::config::PortfolioConfig;
use foliogen_core::exec::{truncate_lines, ExecError, ExecOutput};
use foliogen_core::validator::ValidationReport;
use foliogen_core::theme;

const DEBUG_ENV: &str = "FOLIOGEN_DEBUG";

pub fn banner() {
    let line = style("━".repeat(48)).cyan();
    println!("{line}");
    println!("  {}", style("foliogen").cyan().bold());
    println!("  {}", style("portfolio sites, generated and validated").cyan());
    println!("{line}");
}

pub fn header(message: &str) {
    println!("\n{}", style(message).magenta().bold());
}

pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn warn(message: &str) {
    println!("{} {}", style("!").yellow(), style(message).yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), style(message).red());
}

pub fn info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Verbose path-resolution logging, enabled through the environment.
pub fn debug(message: &str) {
    if debug_enabled() {
        eprintln!("{} {}", style("debug:").dim(), style(message).dim());
    }
}

fn debug_enabled() -> bool {
    matches!(
        std::env::var(DEBUG_ENV).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    )
}

/// Runs a best-effort step: a non-zero exit or a missing tool is reported
/// as a warning and never fails the command.
pub fn best_effort(label: &str, result: Result<ExecOutput, ExecError>) -> bool {
    match result {
        Ok(output) if output.success => true,
        Ok(output) => {
            warn(&format!("{label} failed"));
            for line in truncate_lines(&output.stderr, 5) {
                println!("    {}", style(line).dim());
            }
            false
        }
        Err(err) => {
            warn(&format!("{label} skipped: {err}"));
            false
        }
    }
}

pub fn check_line(ok: bool, message: &str) -> String {
    if ok {
        format!("  {} {}", style("✓").green(), style(message).green())
    } else {
        format!("  {} {}", style("✗").red(), style(message).red())
    }
}

fn warn_line(message: &str) -> String {
    format!("  {} {}", style("!").yellow(), style(message).yellow())
}

pub fn print_validation(report: &ValidationReport) {
    println!("\n{}", style("Validation results").cyan().bold());
    println!("{}", style("─".repeat(48)).dim());

    if report.files.success {
        println!("{}", check_line(true, "Required files: all present"));
    } else {
        println!(
            "{}",
            check_line(false, &format!("Missing files: {}", report.files.missing.join(", ")))
        );
    }

    if report.dependencies.success {
        println!("{}", check_line(true, "Dependencies: all installed"));
    } else {
        println!(
            "{}",
            warn_line(&format!("Missing dependencies: {}", report.dependencies.missing.join(", ")))
        );
    }

    if report.typescript.skipped {
        println!("{}", warn_line("TypeScript: not installed, check skipped"));
    } else if report.typescript.success {
        println!("{}", check_line(true, "TypeScript: no errors"));
    } else {
        println!(
            "{}",
            check_line(false, &format!("TypeScript: {} error(s)", report.typescript.errors.len()))
        );
        for err in report.typescript.errors.iter().take(3) {
            println!("      {}", style(err).red());
        }
    }

    if report.eslint.skipped {
        println!("{}", warn_line("ESLint: not configured, check skipped"));
    } else if report.eslint.success && report.eslint.warnings == 0 {
        println!("{}", check_line(true, "ESLint: clean"));
    } else if report.eslint.success {
        println!(
            "{}",
            warn_line(&format!("ESLint: {} warning(s)", report.eslint.warnings))
        );
    } else {
        println!(
            "{}",
            check_line(
                false,
                &format!(
                    "ESLint: {} error(s), {} warning(s)",
                    report.eslint.errors.len(),
                    report.eslint.warnings
                )
            )
        );
    }

    for warning in &report.assets.warnings {
        println!("{}", warn_line(warning));
    }

    println!("{}", style("─".repeat(48)).dim());
    if report.success() {
        println!("{}", check_line(true, "Overall: PASSED"));
    } else {
        println!("{}", check_line(false, "Overall: FAILED - see findings above"));
    }
}

pub fn print_summary(
    project_name: &str,
    config: &PortfolioConfig,
    validation: Option<&ValidationReport>,
    deploy_ready: bool,
) {
    let theme = theme::resolve(&config.theme_key);

    println!("\n{}", style("═".repeat(48)).green().bold());
    println!("{}", style("  Portfolio generation complete!").green().bold());
    println!("{}", style("═".repeat(48)).green().bold());

    println!("\n{}", style("Project details").cyan());
    println!("{}", style("─".repeat(40)).dim());
    println!("  Location:  ./{project_name}");
    println!("  Theme:     {}", theme.name);
    println!("  Framework: {}", config.framework.label());
    println!("  Layout:    {}", config.layout);

    println!("\n{}", style("Features enabled").cyan());
    println!("{}", style("─".repeat(40)).dim());
    if config.features.contact_form {
        println!("  {} Contact form", style("✓").green());
    }
    if config.features.gallery {
        println!("  {} Gallery", style("✓").green());
    }
    if config.features.blog {
        println!("  {} Blog", style("✓").green());
    }
    if config.features.testimonials {
        println!("  {} Testimonials", style("✓").green());
    }

    if let Some(report) = validation {
        print_validation(report);
    }

    println!("\n{}", style("Next steps").cyan());
    println!("{}", style("─".repeat(40)).dim());
    println!("  cd {project_name}");
    println!("  npm run dev");

    if deploy_ready {
        println!("\n{}", style("Deploy ready").cyan());
        println!("{}", style("─".repeat(40)).dim());
        println!("  • Vercel:  vercel deploy");
        println!("  • Netlify: netlify deploy");
    }
    println!();
}
