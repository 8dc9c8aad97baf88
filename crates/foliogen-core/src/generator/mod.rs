//! Project generation: turns a [`PortfolioConfig`] into an on-disk tree.
//!
//! File synthesis is in-memory first: each framework module contributes
//! `(relative path, content)` pairs, and nothing touches the filesystem
//! until the full plan exists. The generator refuses pre-existing target
//! directories and does not roll back on mid-write failure; the target is
//! assumed freshly created and abandonment is the accepted failure mode.

pub mod docs;
pub mod features;
pub mod html;
pub mod manifest;
pub mod nextjs;
pub mod react_vite;
pub mod styles;
pub mod sveltekit;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Framework, PortfolioConfig};
use crate::error::GenerateError;
use crate::theme;

/// Generation switches that are not part of the portfolio configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Also write vercel.json / netlify.toml.
    pub deploy_ready: bool,
    /// Directory to copy into `src/assets` (explicit source path; the
    /// generator never probes candidate locations).
    pub custom_assets: Option<PathBuf>,
}

/// The on-disk result of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedTree {
    pub root: PathBuf,
    /// Relative paths of every synthesized file, in write order.
    pub files: Vec<PathBuf>,
}

/// Computes the full set of files for a configuration without touching
/// the filesystem.
pub fn plan_files(
    config: &PortfolioConfig,
    project_name: &str,
    options: &GenerateOptions,
) -> Vec<(PathBuf, String)> {
    let theme = theme::resolve(&config.theme_key);

    let mut files = vec![(
        PathBuf::from("package.json"),
        manifest::package_json(project_name, config),
    )];

    files.extend(match config.framework {
        Framework::ReactVite => react_vite::files(config, theme),
        Framework::NextJs => nextjs::files(config, theme),
        Framework::SvelteKit => sveltekit::files(config, theme),
    });

    files.extend(docs::common_files(config, project_name));

    if let Some(site_url) = config.seo.site_url.as_deref() {
        let public = config.framework.public_dir();
        files.push((
            PathBuf::from(public).join("sitemap.xml"),
            docs::sitemap_xml(site_url),
        ));
        files.push((
            PathBuf::from(public).join("robots.txt"),
            docs::robots_txt(site_url),
        ));
    }

    if options.deploy_ready {
        files.push((PathBuf::from("vercel.json"), docs::vercel_json(config.framework)));
        files.push((PathBuf::from("netlify.toml"), docs::netlify_toml(config.framework)));
    }

    files
}

/// Generates the project tree at `target_dir`.
///
/// The target must not exist; this is re-checked here even though the
/// caller validates it first, so a directory created in between cannot be
/// partially overwritten.
pub fn generate(
    config: &PortfolioConfig,
    project_name: &str,
    target_dir: &Path,
    options: &GenerateOptions,
) -> Result<GeneratedTree, GenerateError> {
    if target_dir.exists() {
        return Err(GenerateError::TargetExists(target_dir.to_path_buf()));
    }
    if let Some(assets) = &options.custom_assets {
        if !assets.is_dir() {
            return Err(GenerateError::AssetSourceMissing(assets.clone()));
        }
    }

    let files = plan_files(config, project_name, options);

    for dir in config.framework.skeleton_dirs() {
        let path = target_dir.join(dir);
        fs::create_dir_all(&path).map_err(|source| GenerateError::CreateDir { path, source })?;
    }

    for (relative, content) in &files {
        let path = target_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| GenerateError::WriteFile { path, source })?;
    }

    if let Some(assets) = &options.custom_assets {
        copy_assets(assets, &target_dir.join("src").join("assets"))?;
    }

    Ok(GeneratedTree {
        root: target_dir.to_path_buf(),
        files: files.into_iter().map(|(p, _)| p).collect(),
    })
}

fn copy_assets(source: &Path, dest: &Path) -> Result<(), GenerateError> {
    for entry in walkdir::WalkDir::new(source)
        .into_iter()
        .filter_map(Result::ok)
    {
        let relative = match entry.path().strip_prefix(source) {
            Ok(r) if !r.as_os_str().is_empty() => r,
            _ => continue,
        };
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| GenerateError::CreateDir {
                path: target.clone(),
                source,
            })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::copy(entry.path(), &target).map_err(|source| GenerateError::CopyAsset {
                path: entry.path().to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutMode;
    use crate::theme::defaults_for;
    use crate::validator;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn full_config(framework: Framework) -> PortfolioConfig {
        let mut config = defaults_for("modern-dark");
        config.framework = framework;
        config.features.blog = true;
        config.features.gallery = true;
        config.features.contact_form = true;
        config.features.testimonials = true;
        config
    }

    #[test]
    fn test_generate_produces_required_files_for_every_framework() {
        for framework in Framework::ALL {
            let tmp = TempDir::new().unwrap();
            let target = tmp.path().join("site");
            let config = full_config(framework);
            generate(&config, "site", &target, &GenerateOptions::default()).unwrap();

            for required in validator::required_files(framework) {
                assert!(
                    target.join(required).exists(),
                    "{framework}: missing required file {required}"
                );
            }
        }
    }

    #[test]
    fn test_generate_refuses_existing_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("taken");
        fs::create_dir(&target).unwrap();

        let config = defaults_for("modern-dark");
        let err = generate(&config, "taken", &target, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::TargetExists(_)));
        // nothing was written into the pre-existing directory
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_refuses_missing_asset_source_before_writing() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("site");
        let options = GenerateOptions {
            deploy_ready: false,
            custom_assets: Some(tmp.path().join("no-such-assets")),
        };

        let config = defaults_for("modern-dark");
        let err = generate(&config, "site", &target, &options).unwrap_err();
        assert!(matches!(err, GenerateError::AssetSourceMissing(_)));
        assert!(!target.exists());
    }

    #[test]
    fn test_manifest_name_is_project_name_not_display_name() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("my-folio");
        let mut config = defaults_for("modern-dark");
        config.profile.name = "Jane Q. Author".to_string();
        generate(&config, "my-folio", &target, &GenerateOptions::default()).unwrap();

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(target.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "my-folio");
    }

    #[test]
    fn test_custom_assets_are_copied() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("icons")).unwrap();
        fs::write(assets.join("photo.jpg"), b"jpeg").unwrap();
        fs::write(assets.join("icons/logo.svg"), b"<svg/>").unwrap();

        let target = tmp.path().join("site");
        let options = GenerateOptions {
            deploy_ready: false,
            custom_assets: Some(assets),
        };
        generate(&defaults_for("modern-dark"), "site", &target, &options).unwrap();

        assert!(target.join("src/assets/photo.jpg").exists());
        assert!(target.join("src/assets/icons/logo.svg").exists());
    }

    #[test]
    fn test_sitemap_only_with_site_url() {
        let options = GenerateOptions::default();
        let mut config = defaults_for("modern-dark");
        let without: Vec<_> = plan_files(&config, "p", &options)
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(!without.contains(&PathBuf::from("public/sitemap.xml")));

        config.seo.site_url = Some("https://example.com".to_string());
        let with: Vec<_> = plan_files(&config, "p", &options)
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(with.contains(&PathBuf::from("public/sitemap.xml")));
        assert!(with.contains(&PathBuf::from("public/robots.txt")));
    }

    #[test]
    fn test_deploy_files_only_when_requested() {
        let config = defaults_for("modern-dark");
        let plain: Vec<_> = plan_files(&config, "p", &GenerateOptions::default())
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(!plain.contains(&PathBuf::from("vercel.json")));

        let options = GenerateOptions {
            deploy_ready: true,
            custom_assets: None,
        };
        let deploy: Vec<_> = plan_files(&config, "p", &options)
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(deploy.contains(&PathBuf::from("vercel.json")));
        assert!(deploy.contains(&PathBuf::from("netlify.toml")));
    }

    fn tree_contents(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                (
                    e.path().strip_prefix(root).unwrap().to_path_buf(),
                    fs::read(e.path()).unwrap(),
                )
            })
            .collect()
    }

    // Time-dependent outputs: the license year and the dated seed article.
    fn time_dependent(path: &Path) -> bool {
        path == Path::new("LICENSE") || path.starts_with("content")
    }

    #[test]
    fn test_two_generations_are_byte_identical_except_dated_files() {
        for framework in Framework::ALL {
            let tmp = TempDir::new().unwrap();
            let mut config = full_config(framework);
            config.layout = LayoutMode::MultiPage;
            config.seo.site_url = Some("https://example.com".to_string());

            let a = tmp.path().join("a");
            let b = tmp.path().join("b");
            generate(&config, "twin", &a, &GenerateOptions::default()).unwrap();
            generate(&config, "twin", &b, &GenerateOptions::default()).unwrap();

            let left = tree_contents(&a);
            let right = tree_contents(&b);
            assert_eq!(
                left.keys().collect::<Vec<_>>(),
                right.keys().collect::<Vec<_>>(),
                "{framework}: file sets differ"
            );
            for (path, content) in &left {
                if time_dependent(path) {
                    continue;
                }
                assert_eq!(
                    Some(content),
                    right.get(path),
                    "{framework}: {} differs between runs",
                    path.display()
                );
            }
        }
    }

    #[test]
    fn test_failed_write_leaves_partial_tree() {
        // Known limitation: no rollback. A write failure mid-run leaves
        // already-written files behind.
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("partial");
        let config = defaults_for("modern-dark");

        generate(&config, "partial", &target, &GenerateOptions::default()).unwrap();
        // Simulate the aborted second run an operator might observe: the
        // tree from the first run is still there and a re-run against the
        // same path refuses rather than cleaning up.
        let err = generate(&config, "partial", &target, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::TargetExists(_)));
        assert!(target.join("package.json").exists());
    }
}
