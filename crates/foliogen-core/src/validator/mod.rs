//! Post-generation validation pipeline.
//!
//! Five independent checks (required files, installed dependencies,
//! type-check, lint, assets) that never short-circuit each other: a failed
//! type-check must not prevent the lint check from running. Results are
//! collected into a single [`ValidationReport`]; overall success is the
//! AND of the first four, and asset findings are warnings only.

pub mod parse;

use std::fs;
use std::path::Path;
use std::time::Duration;

use walkdir::WalkDir;

use crate::config::Framework;
use crate::exec::{self, ExecError};

pub use parse::MAX_DIAGNOSTICS;

const BUILD_CHECK_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct FileCheck {
    pub success: bool,
    /// Relative paths of missing required files, verbatim.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DependencyCheck {
    pub success: bool,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TypeCheck {
    pub success: bool,
    pub errors: Vec<String>,
    /// True when the type-checker was absent or could not be launched.
    pub skipped: bool,
}

#[derive(Debug, Clone)]
pub struct LintCheck {
    pub success: bool,
    pub errors: Vec<String>,
    pub warnings: usize,
    pub skipped: bool,
}

#[derive(Debug, Clone)]
pub struct AssetCheck {
    pub warnings: Vec<String>,
}

/// Aggregated result of one validation run. Produced once per generation,
/// printed, never persisted.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub framework: Framework,
    pub files: FileCheck,
    pub dependencies: DependencyCheck,
    pub typescript: TypeCheck,
    pub eslint: LintCheck,
    pub assets: AssetCheck,
}

impl ValidationReport {
    /// Overall success: files, dependencies, type-check, and lint all
    /// passed. Asset warnings never affect this.
    pub fn success(&self) -> bool {
        self.files.success
            && self.dependencies.success
            && self.typescript.success
            && self.eslint.success
    }
}

/// Per-framework required-file checklists. The react-vite list doubles as
/// the baseline when detection is ambiguous.
pub fn required_files(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::ReactVite => &[
            "package.json",
            "tsconfig.json",
            "vite.config.ts",
            "index.html",
            "src/main.tsx",
            "src/App.tsx",
        ],
        Framework::NextJs => &[
            "package.json",
            "tsconfig.json",
            "next.config.js",
            "src/app/page.tsx",
            "src/app/layout.tsx",
        ],
        Framework::SvelteKit => &[
            "package.json",
            "tsconfig.json",
            "svelte.config.js",
            "src/routes/+page.svelte",
            "src/routes/+layout.svelte",
        ],
    }
}

/// Detects the framework from the manifest's declared dependencies,
/// defaulting to the react-vite baseline when ambiguous or unreadable.
pub fn detect_framework(project_dir: &Path) -> Framework {
    let manifest_path = project_dir.join("package.json");
    let Ok(raw) = fs::read_to_string(&manifest_path) else {
        return Framework::ReactVite;
    };
    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&raw) else {
        return Framework::ReactVite;
    };

    if manifest["dependencies"].get("next").is_some() {
        Framework::NextJs
    } else if manifest["devDependencies"].get("@sveltejs/kit").is_some() {
        Framework::SvelteKit
    } else {
        Framework::ReactVite
    }
}

/// Runs the full pipeline against a generated tree. Read-only unless
/// `auto_fix` is set, in which case eslint runs in fix mode and prettier
/// is invoked best-effort.
pub fn validate(project_dir: &Path, auto_fix: bool) -> ValidationReport {
    let framework = detect_framework(project_dir);

    let files = check_files(project_dir, framework);
    let dependencies = check_dependencies(project_dir, framework);
    let typescript = check_typescript(project_dir);
    let eslint = check_eslint(project_dir, auto_fix);
    let assets = check_assets(project_dir);

    if auto_fix {
        run_prettier(project_dir);
    }

    ValidationReport {
        framework,
        files,
        dependencies,
        typescript,
        eslint,
        assets,
    }
}

fn check_files(project_dir: &Path, framework: Framework) -> FileCheck {
    let missing: Vec<String> = required_files(framework)
        .iter()
        .filter(|relative| !project_dir.join(relative).exists())
        .map(|relative| relative.to_string())
        .collect();
    FileCheck {
        success: missing.is_empty(),
        missing,
    }
}

fn critical_packages(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::ReactVite | Framework::NextJs => &["react", "react-dom"],
        Framework::SvelteKit => &["svelte"],
    }
}

fn check_dependencies(project_dir: &Path, framework: Framework) -> DependencyCheck {
    let node_modules = project_dir.join("node_modules");
    if !node_modules.is_dir() {
        return DependencyCheck {
            success: false,
            missing: vec!["node_modules (run npm install)".to_string()],
        };
    }

    let missing: Vec<String> = critical_packages(framework)
        .iter()
        .filter(|package| !node_modules.join(package).is_dir())
        .map(|package| package.to_string())
        .collect();
    DependencyCheck {
        success: missing.is_empty(),
        missing,
    }
}

fn check_typescript(project_dir: &Path) -> TypeCheck {
    let tsc = project_dir.join("node_modules/.bin/tsc");
    if !tsc.exists() && !project_dir.join("node_modules/.bin/tsc.cmd").exists() {
        return TypeCheck {
            success: true,
            errors: Vec::new(),
            skipped: true,
        };
    }

    match exec::run_in(project_dir, "npx", &["tsc", "--noEmit"]) {
        Ok(output) if output.success => TypeCheck {
            success: true,
            errors: Vec::new(),
            skipped: false,
        },
        Ok(output) => {
            let errors = parse::parse_typescript_errors(&output.combined());
            TypeCheck {
                // non-zero exit without recognizable error lines still
                // counts as clean, matching the error-marker contract
                success: errors.is_empty(),
                errors,
                skipped: false,
            }
        }
        Err(_) => TypeCheck {
            success: true,
            errors: Vec::new(),
            skipped: true,
        },
    }
}

fn eslint_config_present(project_dir: &Path) -> bool {
    [".eslintrc.json", ".eslintrc.js", "eslint.config.js"]
        .iter()
        .any(|name| project_dir.join(name).exists())
}

fn check_eslint(project_dir: &Path, auto_fix: bool) -> LintCheck {
    if !eslint_config_present(project_dir) {
        return LintCheck {
            success: true,
            errors: Vec::new(),
            warnings: 0,
            skipped: true,
        };
    }

    let mut args = vec!["eslint", "src", "--ext", ".ts,.tsx"];
    if auto_fix {
        args.push("--fix");
    }

    match exec::run_in(project_dir, "npx", &args) {
        Ok(output) if output.success => LintCheck {
            success: true,
            errors: Vec::new(),
            warnings: 0,
            skipped: false,
        },
        Ok(output) => {
            let (errors, warnings) = parse::parse_eslint_output(&output.combined());
            LintCheck {
                success: errors.is_empty(),
                errors,
                warnings,
                skipped: false,
            }
        }
        Err(_) => LintCheck {
            success: true,
            errors: Vec::new(),
            warnings: 0,
            skipped: true,
        },
    }
}

fn check_assets(project_dir: &Path) -> AssetCheck {
    let mut warnings = Vec::new();

    let assets_dir = project_dir.join("src/assets");
    if assets_dir.is_dir() {
        let has_placeholders = WalkDir::new(&assets_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .any(|entry| entry.file_name().to_string_lossy().contains("placeholder"));
        if has_placeholders {
            warnings.push(
                "Contains placeholder images - consider replacing with real assets".to_string(),
            );
        }
    }

    for public in ["public", "static"] {
        let dir = project_dir.join(public);
        if dir.is_dir() {
            let has_favicon = fs::read_dir(&dir)
                .into_iter()
                .flatten()
                .filter_map(Result::ok)
                .any(|entry| entry.file_name().to_string_lossy().contains("favicon"));
            if !has_favicon {
                warnings.push(format!("Missing favicon in {public} directory"));
            }
            break;
        }
    }

    AssetCheck { warnings }
}

fn run_prettier(project_dir: &Path) {
    let configured = project_dir.join(".prettierrc").exists()
        || project_dir.join("prettier.config.js").exists();
    if !configured {
        return;
    }
    // best-effort; formatting failures never surface as validation results
    let _ = exec::run_in(
        project_dir,
        "npx",
        &["prettier", "--write", "src/**/*.{ts,tsx,css}"],
    );
}

#[derive(Debug, Clone)]
pub struct BuildCheck {
    pub success: bool,
    pub errors: Vec<String>,
}

/// Runs `npm run build` with a hard timeout as an explicit, opt-in
/// verification step.
pub fn run_build_check(project_dir: &Path) -> BuildCheck {
    match exec::run_with_timeout(
        project_dir,
        "npm",
        &["run", "build"],
        BUILD_CHECK_TIMEOUT,
    ) {
        Ok(output) if output.success => BuildCheck {
            success: true,
            errors: Vec::new(),
        },
        Ok(output) => {
            let combined = output.combined();
            let mut errors: Vec<String> = combined
                .lines()
                .filter(|line| {
                    let lower = line.to_lowercase();
                    lower.contains("error") || lower.contains("failed")
                })
                .map(|line| line.trim().to_string())
                .take(5)
                .collect();
            if errors.is_empty() {
                errors = exec::truncate_lines(&combined, 5);
            }
            BuildCheck {
                success: false,
                errors,
            }
        }
        Err(err @ ExecError::Timeout { .. }) | Err(err @ ExecError::Spawn { .. }) => BuildCheck {
            success: false,
            errors: vec![err.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, GenerateOptions};
    use crate::theme::defaults_for;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_detect_framework_from_manifest() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp.path().join("package.json"),
            r#"{ "dependencies": { "next": "^14.1.0" } }"#,
        );
        assert_eq!(detect_framework(tmp.path()), Framework::NextJs);

        write(
            &tmp.path().join("package.json"),
            r#"{ "devDependencies": { "@sveltejs/kit": "^2.0.6" } }"#,
        );
        assert_eq!(detect_framework(tmp.path()), Framework::SvelteKit);

        write(
            &tmp.path().join("package.json"),
            r#"{ "dependencies": { "react": "^18.2.0" } }"#,
        );
        assert_eq!(detect_framework(tmp.path()), Framework::ReactVite);
    }

    #[test]
    fn test_detect_framework_defaults_when_unreadable() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(detect_framework(tmp.path()), Framework::ReactVite);
        write(&tmp.path().join("package.json"), "not json at all");
        assert_eq!(detect_framework(tmp.path()), Framework::ReactVite);
    }

    #[test]
    fn test_missing_file_does_not_short_circuit_other_checks() {
        let tmp = TempDir::new().unwrap();
        // a react-vite shaped tree missing vite.config.ts
        write(
            &tmp.path().join("package.json"),
            r#"{ "dependencies": { "react": "^18.2.0" } }"#,
        );
        for present in ["tsconfig.json", "index.html", "src/main.tsx", "src/App.tsx"] {
            write(&tmp.path().join(present), "// stub");
        }

        let report = validate(tmp.path(), false);
        assert!(!report.files.success);
        assert_eq!(report.files.missing, vec!["vite.config.ts"]);

        // the remaining sub-reports were still computed
        assert!(!report.dependencies.success);
        assert_eq!(
            report.dependencies.missing,
            vec!["node_modules (run npm install)"]
        );
        assert!(report.typescript.skipped);
        assert!(report.eslint.skipped);
        assert!(!report.success());
    }

    #[test]
    fn test_dependency_probe_reports_each_missing_package() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp.path().join("package.json"),
            r#"{ "dependencies": { "react": "^18.2.0" } }"#,
        );
        fs::create_dir_all(tmp.path().join("node_modules/react")).unwrap();

        let report = validate(tmp.path(), false);
        assert!(!report.dependencies.success);
        assert_eq!(report.dependencies.missing, vec!["react-dom"]);
    }

    #[test]
    fn test_asset_warnings_do_not_affect_success() {
        let tmp = TempDir::new().unwrap();
        let config = defaults_for("modern-dark");
        let target = tmp.path().join("site");
        generate(&config, "site", &target, &GenerateOptions::default()).unwrap();
        // keep the run hermetic: no eslint config means no npx invocation
        fs::remove_file(target.join(".eslintrc.json")).unwrap();
        // drop a placeholder image and remove the favicon
        write(&target.join("src/assets/placeholder-1.jpg"), "jpeg");
        fs::remove_file(target.join("public/favicon.svg")).unwrap();
        // satisfy the dependency probe so only assets would differ
        for package in ["react", "react-dom"] {
            fs::create_dir_all(target.join("node_modules").join(package)).unwrap();
        }

        let report = validate(&target, false);
        assert!(report.files.success);
        assert_eq!(report.assets.warnings.len(), 2);
        assert!(report.assets.warnings[0].contains("placeholder"));
        assert!(report.assets.warnings[1].contains("favicon"));
        assert!(report.success(), "asset warnings must not fail validation");
    }

    #[test]
    fn test_generated_tree_passes_file_check_for_all_frameworks() {
        for framework in Framework::ALL {
            let tmp = TempDir::new().unwrap();
            let mut config = defaults_for("modern-dark");
            config.framework = framework;
            let target = tmp.path().join("site");
            generate(&config, "site", &target, &GenerateOptions::default()).unwrap();
            // keep the run hermetic: no eslint config means no npx invocation
            let _ = fs::remove_file(target.join(".eslintrc.json"));

            let report = validate(&target, false);
            assert_eq!(report.framework, framework, "detection should round-trip");
            assert!(
                report.files.success,
                "{framework}: missing {:?}",
                report.files.missing
            );
            assert!(report.assets.warnings.is_empty(), "{framework}: {:?}", report.assets.warnings);
        }
    }

    #[test]
    fn test_build_check_fails_in_an_empty_tree() {
        // either npm is absent (spawn error) or there is no package.json
        // to build; both are failures with a diagnostic attached
        let tmp = TempDir::new().unwrap();
        let result = run_build_check(tmp.path());
        assert!(!result.success);
    }
}
