use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::render::Renderer;
use crate::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    /// SQLAlchemy model.
    Model,
    /// Pydantic create/update/read schemas.
    Schema,
    /// FastAPI CRUD router.
    Endpoint,
    /// Next.js list page.
    Page,
    /// TypeScript interfaces.
    Types,
}

impl Artifact {
    pub const ALL: [Artifact; 5] = [
        Artifact::Model,
        Artifact::Schema,
        Artifact::Endpoint,
        Artifact::Page,
        Artifact::Types,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Model => "model",
            Artifact::Schema => "schema",
            Artifact::Endpoint => "endpoint",
            Artifact::Page => "page",
            Artifact::Types => "types",
        }
    }

    pub(crate) fn template_name(&self) -> &'static str {
        match self {
            Artifact::Model => "model.py",
            Artifact::Schema => "schema.py",
            Artifact::Endpoint => "endpoint.py",
            Artifact::Page => "page.tsx",
            Artifact::Types => "types.ts",
        }
    }

    /// Output path relative to the project root.
    pub fn output_path(&self, resource: &Resource, config: &ScaffoldConfig) -> PathBuf {
        match self {
            Artifact::Model => config.models_dir.join(format!("{}.py", resource.name)),
            Artifact::Schema => config.schemas_dir.join(format!("{}.py", resource.name)),
            Artifact::Endpoint => config.routers_dir.join(format!("{}.py", resource.plural())),
            Artifact::Page => config.pages_dir.join(resource.route()).join("page.tsx"),
            Artifact::Types => config.types_dir.join(format!("{}.ts", resource.name)),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Artifact {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Artifact::ALL
            .into_iter()
            .find(|a| a.as_str() == s.trim())
            .ok_or_else(|| ScaffoldError::UnknownArtifact(s.to_string()))
    }
}

/// A rendered file not yet written.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub artifact: Artifact,
    /// Relative to the project root.
    pub path: PathBuf,
    pub contents: String,
}

/// Render `artifacts` for `resource`.
pub fn plan(
    renderer: &Renderer,
    artifacts: &[Artifact],
    resource: &Resource,
    config: &ScaffoldConfig,
) -> Result<Vec<GeneratedFile>, ScaffoldError> {
    artifacts
        .iter()
        .map(|&artifact| {
            Ok(GeneratedFile {
                artifact,
                path: artifact.output_path(resource, config),
                contents: renderer.render(artifact, resource, config)?,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    pub dry_run: bool,
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Created,
    Overwritten,
    /// Exists and `force` was not given.
    Skipped,
    /// Would be created or overwritten.
    DryRun,
}

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub action: Action,
}

/// Write planned files under `root`. Existing files are left untouched
/// unless `options.force` is set.
pub fn write(
    root: &Path,
    files: &[GeneratedFile],
    options: WriteOptions,
) -> Result<Vec<Outcome>, ScaffoldError> {
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let target = root.join(&file.path);
        let exists = target.exists();

        let action = if exists && !options.force {
            tracing::warn!(path = %target.display(), "exists, skipping (use --force to overwrite)");
            Action::Skipped
        } else if options.dry_run {
            Action::DryRun
        } else {
            if let Some(dir) = target.parent() {
                std::fs::create_dir_all(dir).map_err(ScaffoldError::io(dir))?;
            }
            write_atomic(&target, file.contents.as_bytes())?;
            tracing::info!(artifact = %file.artifact, path = %target.display(), "wrote file");
            if exists { Action::Overwritten } else { Action::Created }
        };

        outcomes.push(Outcome {
            artifact: file.artifact,
            path: file.path.clone(),
            action,
        });
    }
    Ok(outcomes)
}

/// Write to a temp file then rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ScaffoldError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, bytes).map_err(ScaffoldError::io(&tmp))?;
    std::fs::rename(&tmp, path).map_err(ScaffoldError::io(path))?;
    Ok(())
}
