//! Resource descriptions parsed from the command line.
//!
//! `--fields "title:str,body:text?,published_at:datetime?"` and
//! `--relations "author:many-to-one:user,tags:many-to-many:tag"`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ScaffoldError;

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid identifier regex"));

/// Columns every generated model gets, plus `metadata`, which SQLAlchemy
/// reserves on declarative classes.
const RESERVED: &[&str] = &["id", "created_at", "updated_at", "metadata"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Str,
    Text,
    Int,
    Float,
    Bool,
    Date,
    DateTime,
    Uuid,
    Json,
}

impl FieldType {
    pub fn sqlalchemy(&self) -> &'static str {
        match self {
            FieldType::Str => "String(255)",
            FieldType::Text => "Text",
            FieldType::Int => "Integer",
            FieldType::Float => "Float",
            FieldType::Bool => "Boolean",
            FieldType::Date => "Date",
            FieldType::DateTime => "DateTime(timezone=True)",
            FieldType::Uuid => "UUID(as_uuid=True)",
            FieldType::Json => "JSON",
        }
    }

    pub fn python(&self) -> &'static str {
        match self {
            FieldType::Str | FieldType::Text => "str",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Uuid => "UUID",
            FieldType::Json => "dict[str, Any]",
        }
    }

    pub fn typescript(&self) -> &'static str {
        match self {
            FieldType::Str | FieldType::Text | FieldType::Date | FieldType::DateTime | FieldType::Uuid => {
                "string"
            }
            FieldType::Int | FieldType::Float => "number",
            FieldType::Bool => "boolean",
            FieldType::Json => "Record<string, unknown>",
        }
    }

    /// HTML input used by the generated form.
    pub fn input(&self) -> &'static str {
        match self {
            FieldType::Str | FieldType::Uuid => "text",
            FieldType::Text | FieldType::Json => "textarea",
            FieldType::Int | FieldType::Float => "number",
            FieldType::Bool => "checkbox",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime-local",
        }
    }
}

impl FromStr for FieldType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" | "string" => Ok(FieldType::Str),
            "text" => Ok(FieldType::Text),
            "int" | "integer" => Ok(FieldType::Int),
            "float" => Ok(FieldType::Float),
            "bool" | "boolean" => Ok(FieldType::Bool),
            "date" => Ok(FieldType::Date),
            "datetime" => Ok(FieldType::DateTime),
            "uuid" => Ok(FieldType::Uuid),
            "json" => Ok(FieldType::Json),
            other => Err(ScaffoldError::UnknownFieldType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    pub nullable: bool,
}

impl FromStr for Field {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, ty) = s
            .split_once(':')
            .ok_or_else(|| ScaffoldError::InvalidField(s.to_string()))?;
        let name = to_snake(name.trim());
        if !IDENT.is_match(&name) {
            return Err(ScaffoldError::InvalidField(s.to_string()));
        }
        let ty = ty.trim();
        let (ty, nullable) = match ty.strip_suffix('?') {
            Some(inner) => (inner, true),
            None => (ty, false),
        };
        Ok(Field {
            name,
            ty: ty.parse()?,
            nullable,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::ManyToOne => "many-to-one",
            RelationKind::OneToMany => "one-to-many",
            RelationKind::ManyToMany => "many-to-many",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "many-to-one" | "m2o" => Ok(RelationKind::ManyToOne),
            "one-to-many" | "o2m" => Ok(RelationKind::OneToMany),
            "many-to-many" | "m2m" => Ok(RelationKind::ManyToMany),
            other => Err(ScaffoldError::UnknownRelationKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub name: String,
    pub kind: RelationKind,
    /// Target resource, snake_case singular.
    pub target: String,
}

impl FromStr for Relation {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [name, kind, target] = parts.as_slice() else {
            return Err(ScaffoldError::InvalidRelation(s.to_string()));
        };
        let (name, target) = (to_snake(name), to_snake(target));
        if !IDENT.is_match(&name) || !IDENT.is_match(&target) {
            return Err(ScaffoldError::InvalidRelation(s.to_string()));
        }
        Ok(Relation {
            name,
            kind: kind.parse()?,
            target,
        })
    }
}

/// A CRUD resource to generate code for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// snake_case singular, e.g. `blog_post`.
    pub name: String,
    pub fields: Vec<Field>,
    pub relations: Vec<Relation>,
}

impl Resource {
    pub fn parse(name: &str, fields: &str, relations: &str) -> Result<Self, ScaffoldError> {
        let name = to_snake(name.trim());
        if !IDENT.is_match(&name) {
            return Err(ScaffoldError::InvalidName(name));
        }

        let fields = split_list(fields)
            .map(str::parse)
            .collect::<Result<Vec<Field>, _>>()?;
        let relations = split_list(relations)
            .map(str::parse)
            .collect::<Result<Vec<Relation>, _>>()?;

        let mut seen = BTreeSet::new();
        let columns = fields
            .iter()
            .map(|f| f.name.clone())
            .chain(relations.iter().map(|r| r.name.clone()))
            .chain(
                relations
                    .iter()
                    .filter(|r| r.kind == RelationKind::ManyToOne)
                    .map(|r| format!("{}_id", r.name)),
            );
        for column in columns {
            if RESERVED.contains(&column.as_str()) {
                return Err(ScaffoldError::ReservedField(column));
            }
            if !seen.insert(column.clone()) {
                return Err(ScaffoldError::DuplicateField(column));
            }
        }

        Ok(Self {
            name,
            fields,
            relations,
        })
    }

    pub fn class_name(&self) -> String {
        to_pascal(&self.name)
    }

    pub fn plural(&self) -> String {
        pluralize(&self.name)
    }

    /// URL segment, e.g. `blog-posts`.
    pub fn route(&self) -> String {
        self.plural().replace('_', "-")
    }
}

fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty())
}

/// `BlogPost`, `blog-post` and `blog post` all become `blog_post`.
pub fn to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '-' || c == ' ' || c == '_' {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out.trim_end_matches('_').to_string()
}

pub fn to_pascal(snake: &str) -> String {
    snake
        .split('_')
        .filter(|p| !p.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `Blog post` from `blog_post`.
pub fn to_title(snake: &str) -> String {
    let spaced = snake.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// English plural of the last word of a snake_case name.
pub fn pluralize(snake: &str) -> String {
    if snake.ends_with('y')
        && !snake.ends_with("ay")
        && !snake.ends_with("ey")
        && !snake.ends_with("oy")
        && !snake.ends_with("uy")
    {
        return format!("{}ies", &snake[..snake.len() - 1]);
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|end| snake.ends_with(end)) {
        return format!("{snake}es");
    }
    format!("{snake}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields_and_relations() {
        let resource = Resource::parse(
            "BlogPost",
            "title:str, body:text?, views:int",
            "author:many-to-one:user,tags:m2m:Tag",
        )
        .unwrap();
        assert_eq!(resource.name, "blog_post");
        assert_eq!(resource.class_name(), "BlogPost");
        assert_eq!(resource.route(), "blog-posts");
        assert_eq!(resource.fields.len(), 3);
        assert!(resource.fields[1].nullable);
        assert_eq!(resource.fields[1].ty, FieldType::Text);
        assert_eq!(resource.relations[1].kind, RelationKind::ManyToMany);
        assert_eq!(resource.relations[1].target, "tag");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Resource::parse("post", "title", ""),
            Err(ScaffoldError::InvalidField(_))
        ));
        assert!(matches!(
            Resource::parse("post", "title:varchar", ""),
            Err(ScaffoldError::UnknownFieldType(_))
        ));
        assert!(matches!(
            Resource::parse("post", "id:uuid", ""),
            Err(ScaffoldError::ReservedField(_))
        ));
        assert!(matches!(
            Resource::parse("post", "title:str,Title:text", ""),
            Err(ScaffoldError::DuplicateField(_))
        ));
        assert!(matches!(
            Resource::parse("post", "author_id:uuid", "author:many-to-one:user"),
            Err(ScaffoldError::DuplicateField(_))
        ));
        assert!(matches!(
            Resource::parse("post", "", "author:belongs-to:user"),
            Err(ScaffoldError::UnknownRelationKind(_))
        ));
        assert!(matches!(
            Resource::parse("9lives", "", ""),
            Err(ScaffoldError::InvalidName(_))
        ));
    }

    #[test]
    fn case_helpers() {
        assert_eq!(to_snake("HTTPRequest"), "httprequest");
        assert_eq!(to_snake("team-member"), "team_member");
        assert_eq!(to_pascal("team_member"), "TeamMember");
        assert_eq!(to_title("team_member"), "Team member");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("survey"), "surveys");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("assessment"), "assessments");
    }
}
