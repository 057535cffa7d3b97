use serde::Serialize;
use tera::{Context, Tera};

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::generate::Artifact;
use crate::resource::{FieldType, RelationKind, Resource, pluralize, to_pascal, to_title};

const TEMPLATES: &[(&str, &str)] = &[
    ("model.py", include_str!("../templates/model.py.tera")),
    ("schema.py", include_str!("../templates/schema.py.tera")),
    ("endpoint.py", include_str!("../templates/endpoint.py.tera")),
    ("page.tsx", include_str!("../templates/page.tsx.tera")),
    ("types.ts", include_str!("../templates/types.ts.tera")),
];

#[derive(Debug, Serialize)]
struct FieldView {
    name: String,
    label: String,
    ty: FieldType,
    nullable: bool,
    sqlalchemy: &'static str,
    python: &'static str,
    typescript: &'static str,
    input: &'static str,
}

#[derive(Debug, Serialize)]
struct RelationView {
    name: String,
    kind: RelationKind,
    target: String,
    target_class: String,
    target_table: String,
    /// Foreign key column for many-to-one.
    fk_column: String,
    /// Link table for many-to-many.
    association_table: String,
}

/// Template context for one resource.
#[derive(Debug, Serialize)]
struct ResourceView {
    name: String,
    class_name: String,
    title: String,
    plural: String,
    plural_title: String,
    table: String,
    route: String,
    package: String,
    fields: Vec<FieldView>,
    relations: Vec<RelationView>,
    uses_date: bool,
    uses_datetime: bool,
    uses_uuid: bool,
    uses_json: bool,
}

impl ResourceView {
    fn new(resource: &Resource, config: &ScaffoldConfig) -> Self {
        let fields: Vec<FieldView> = resource
            .fields
            .iter()
            .map(|f| FieldView {
                name: f.name.clone(),
                label: to_title(&f.name),
                ty: f.ty,
                nullable: f.nullable,
                sqlalchemy: f.ty.sqlalchemy(),
                python: f.ty.python(),
                typescript: f.ty.typescript(),
                input: f.ty.input(),
            })
            .collect();
        let table = resource.plural();
        let relations = resource
            .relations
            .iter()
            .map(|r| {
                let target_table = pluralize(&r.target);
                RelationView {
                    name: r.name.clone(),
                    kind: r.kind,
                    target: r.target.clone(),
                    target_class: to_pascal(&r.target),
                    fk_column: format!("{}_id", r.name),
                    association_table: format!("{table}_{}", r.name),
                    target_table,
                }
            })
            .collect();
        let uses = |ty: FieldType| fields.iter().any(|f| f.ty == ty);

        Self {
            name: resource.name.clone(),
            class_name: resource.class_name(),
            title: to_title(&resource.name),
            plural: resource.plural(),
            plural_title: to_title(&resource.plural()),
            route: resource.route(),
            package: config.backend_package.clone(),
            uses_date: uses(FieldType::Date),
            uses_datetime: uses(FieldType::DateTime),
            uses_uuid: uses(FieldType::Uuid),
            uses_json: uses(FieldType::Json),
            table,
            fields,
            relations,
        }
    }
}

/// Renders the built-in templates.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, ScaffoldError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .map_err(|e| ScaffoldError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    pub fn render(
        &self,
        artifact: Artifact,
        resource: &Resource,
        config: &ScaffoldConfig,
    ) -> Result<String, ScaffoldError> {
        let view = ResourceView::new(resource, config);
        let context = Context::from_serialize(&view)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))?;
        let rendered = self.tera.render(artifact.template_name(), &context)?;
        Ok(rendered)
    }
}
