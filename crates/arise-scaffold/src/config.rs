use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const CONFIG_FILE: &str = "arise-scaffold.json";

/// Where generated files land, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub models_dir: PathBuf,
    pub schemas_dir: PathBuf,
    pub routers_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub types_dir: PathBuf,
    /// Import root of the backend package, e.g. `app` for `app.models`.
    pub backend_package: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            models_dir: PathBuf::from("backend/app/models"),
            schemas_dir: PathBuf::from("backend/app/schemas"),
            routers_dir: PathBuf::from("backend/app/api/routes"),
            pages_dir: PathBuf::from("frontend/src/app"),
            types_dir: PathBuf::from("frontend/src/types"),
            backend_package: "app".to_string(),
        }
    }
}

/// User-wide fallback used when the project has no config of its own.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("arise").join(CONFIG_FILE))
}

/// Resolve the config for `root`: an explicit path, then
/// `{root}/arise-scaffold.json`, then the user config, then defaults.
pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<ScaffoldConfig, ScaffoldError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let candidates = std::iter::once(root.join(CONFIG_FILE)).chain(user_config_path());
    for path in candidates {
        if path.exists() {
            tracing::debug!(path = %path.display(), "using scaffold config");
            return load_config(&path);
        }
    }
    tracing::debug!("no scaffold config found, using defaults");
    Ok(ScaffoldConfig::default())
}

pub fn load_config(path: &Path) -> Result<ScaffoldConfig, ScaffoldError> {
    let contents = std::fs::read_to_string(path).map_err(ScaffoldError::io(path))?;
    let config_error = |message: String| ScaffoldError::Config {
        path: path.to_path_buf(),
        message,
    };

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| config_error(e.to_string()))?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version).map_err(config_error)?;
    serde_json::from_value(migrated).map_err(|e| config_error(e.to_string()))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, String> {
    if from_version > CURRENT_VERSION {
        return Err(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update arise-scaffold."
        ));
    }

    // v0 → v1: `backend_dir`/`frontend_dir` roots split into one directory
    // per artifact; `api_dir` renamed to `routers_dir`.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| "config is not a JSON object".to_string())?;
        let defaults = ScaffoldConfig::default();

        let backend = obj
            .remove("backend_dir")
            .and_then(|v| v.as_str().map(PathBuf::from));
        let frontend = obj
            .remove("frontend_dir")
            .and_then(|v| v.as_str().map(PathBuf::from));
        if let Some(api) = obj.remove("api_dir") {
            obj.entry("routers_dir").or_insert(api);
        }

        let mut fill = |key: &str, base: &Option<PathBuf>, leaf: &str, default: &Path| {
            let value = match base {
                Some(base) => base.join(leaf),
                None => default.to_path_buf(),
            };
            obj.entry(key)
                .or_insert(serde_json::Value::String(value.to_string_lossy().into_owned()));
        };
        fill("models_dir", &backend, "models", &defaults.models_dir);
        fill("schemas_dir", &backend, "schemas", &defaults.schemas_dir);
        fill("routers_dir", &backend, "api/routes", &defaults.routers_dir);
        fill("pages_dir", &frontend, "app", &defaults.pages_dir);
        fill("types_dir", &frontend, "types", &defaults.types_dir);

        obj.entry("backend_package")
            .or_insert(serde_json::Value::String(defaults.backend_package));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated scaffold config v0 → v1 (per-artifact directories)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ScaffoldConfig) -> Result<(), ScaffoldError> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(ScaffoldError::io(dir))?;
    }
    crate::generate::write_atomic(path, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn v0_roots_expand_to_artifact_dirs() {
        let v0 = json!({
            "backend_dir": "server/src",
            "frontend_dir": "web",
            "api_dir": "server/src/routers"
        });
        let migrated = migrate(v0, 0).unwrap();
        let config: ScaffoldConfig = serde_json::from_value(migrated).unwrap();

        assert_eq!(config.config_version, 1);
        assert_eq!(config.models_dir, PathBuf::from("server/src/models"));
        assert_eq!(config.routers_dir, PathBuf::from("server/src/routers"));
        assert_eq!(config.types_dir, PathBuf::from("web/types"));
        assert_eq!(config.backend_package, "app");
    }

    #[test]
    fn empty_v0_gets_defaults() {
        let config: ScaffoldConfig = serde_json::from_value(migrate(json!({}), 0).unwrap()).unwrap();
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn newer_versions_are_refused() {
        let err = migrate(json!({"config_version": 7}), 7).unwrap_err();
        assert!(err.contains("newer than this build"));
    }
}
