use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid resource name '{0}': use letters, digits and underscores, starting with a letter")]
    InvalidName(String),

    #[error("invalid field spec '{0}': expected name:type")]
    InvalidField(String),

    #[error("unknown field type '{0}' (expected str, text, int, float, bool, date, datetime, uuid or json)")]
    UnknownFieldType(String),

    #[error("invalid relation spec '{0}': expected name:kind:target")]
    InvalidRelation(String),

    #[error("unknown relation kind '{0}' (expected many-to-one, one-to-many or many-to-many)")]
    UnknownRelationKind(String),

    #[error("duplicate field '{0}'")]
    DuplicateField(String),

    #[error("field '{0}' is reserved")]
    ReservedField(String),

    #[error("unknown artifact '{0}'")]
    UnknownArtifact(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ScaffoldError {
    fn from(e: tera::Error) -> Self {
        ScaffoldError::TemplateRender(e.to_string())
    }
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ScaffoldError::Io { path, source }
    }
}
