use std::fs;
use std::path::PathBuf;

use arise_scaffold::config::{self, CONFIG_FILE, ScaffoldConfig};
use arise_scaffold::generate::{self, Action, Artifact, GeneratedFile, WriteOptions};
use arise_scaffold::render::Renderer;
use arise_scaffold::resource::Resource;

fn blog_post() -> Resource {
    Resource::parse(
        "BlogPost",
        "title:str,body:text?,published:bool,extra:json?,published_on:date?",
        "author:many-to-one:user,tags:many-to-many:tag,comments:one-to-many:comment",
    )
    .unwrap()
}

fn render(artifact: Artifact) -> String {
    Renderer::new()
        .unwrap()
        .render(artifact, &blog_post(), &ScaffoldConfig::default())
        .unwrap()
}

fn plan_all() -> Vec<GeneratedFile> {
    generate::plan(
        &Renderer::new().unwrap(),
        &Artifact::ALL,
        &blog_post(),
        &ScaffoldConfig::default(),
    )
    .unwrap()
}

#[test]
fn model_has_columns_and_relationships() {
    let model = render(Artifact::Model);
    assert!(model.contains("class BlogPost(Base):"));
    assert!(model.contains(r#"__tablename__ = "blog_posts""#));
    assert!(model.contains("    title = Column(String(255), nullable=False)"));
    assert!(model.contains("    body = Column(Text, nullable=True)"));
    assert!(model.contains("from sqlalchemy import JSON, "));
    assert!(model.contains(
        r#"    author_id = Column(UUID(as_uuid=True), ForeignKey("users.id"), nullable=True)"#
    ));
    assert!(model.contains(r#"    author = relationship("User")"#));
    assert!(model.contains(r#"    tags = relationship("Tag", secondary=blog_posts_tags)"#));
    assert!(model.contains(r#"blog_posts_tags = Table("#));
    assert!(model.contains(r#"    comments = relationship("Comment", cascade="all, delete-orphan")"#));
}

#[test]
fn schemas_mark_nullable_fields_optional() {
    let schema = render(Artifact::Schema);
    assert!(schema.contains("from datetime import date, datetime"));
    assert!(schema.contains("from typing import Any"));
    assert!(schema.contains("class BlogPostCreate(BlogPostBase):"));
    assert!(schema.contains("    title: str\n"));
    assert!(schema.contains("    body: str | None = None"));
    assert!(schema.contains("    extra: dict[str, Any] | None = None"));
    assert!(schema.contains("    author_id: UUID | None = None"));
}

#[test]
fn router_uses_kebab_route_and_id_param() {
    let endpoint = render(Artifact::Endpoint);
    assert!(endpoint.contains(r#"APIRouter(prefix="/blog-posts", tags=["blog-posts"])"#));
    assert!(endpoint.contains(r#"@router.get("/{blog_post_id}", response_model=BlogPostRead)"#));
    assert!(endpoint.contains("from app.models.blog_post import BlogPost"));
    assert!(endpoint.contains("def list_blog_posts("));
    assert!(endpoint.contains(r#"detail="Blog post not found""#));
}

#[test]
fn frontend_types_and_page() {
    let types = render(Artifact::Types);
    assert!(types.contains("export interface BlogPost {"));
    assert!(types.contains("  published: boolean;"));
    assert!(types.contains("  body?: string | null;"));
    assert!(types.contains("  author_id: string | null;"));

    let page = render(Artifact::Page);
    assert!(page.contains("export default function BlogPostPage()"));
    assert!(page.contains(r#"import type { BlogPost } from "@/types/blog_post";"#));
    assert!(page.contains("/api/v1/blog-posts/"));
    assert!(page.contains("<th>Title</th>"));
    assert!(page.contains(r#"<td>{item.published ? "Yes" : "No"}</td>"#));
    assert!(page.contains(r#"<td>{String(item.title ?? "")}</td>"#));
}

#[test]
fn default_output_paths() {
    let paths: Vec<PathBuf> = plan_all().into_iter().map(|f| f.path).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("backend/app/models/blog_post.py"),
            PathBuf::from("backend/app/schemas/blog_post.py"),
            PathBuf::from("backend/app/api/routes/blog_posts.py"),
            PathBuf::from("frontend/src/app/blog-posts/page.tsx"),
            PathBuf::from("frontend/src/types/blog_post.ts"),
        ]
    );
}

#[test]
fn existing_files_need_force() {
    let dir = tempfile::tempdir().unwrap();
    let files = plan_all();

    let first = generate::write(dir.path(), &files, WriteOptions::default()).unwrap();
    assert!(first.iter().all(|o| o.action == Action::Created));

    let model = dir.path().join("backend/app/models/blog_post.py");
    fs::write(&model, "# edited by hand\n").unwrap();

    let second = generate::write(dir.path(), &files, WriteOptions::default()).unwrap();
    assert!(second.iter().all(|o| o.action == Action::Skipped));
    assert_eq!(fs::read_to_string(&model).unwrap(), "# edited by hand\n");

    let forced = generate::write(
        dir.path(),
        &files,
        WriteOptions {
            force: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(forced.iter().all(|o| o.action == Action::Overwritten));
    assert!(fs::read_to_string(&model).unwrap().contains("class BlogPost(Base):"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let outcomes = generate::write(
        dir.path(),
        &plan_all(),
        WriteOptions {
            dry_run: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(outcomes.len(), 5);
    assert!(outcomes.iter().all(|o| o.action == Action::DryRun));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn project_config_redirects_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{"backend_dir": "api", "frontend_dir": "web/src"}"#,
    )
    .unwrap();

    let config = config::resolve(dir.path(), None).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(
        Artifact::Endpoint.output_path(&blog_post(), &config),
        PathBuf::from("api/api/routes/blog_posts.py")
    );

    let saved = dir.path().join("nested").join(CONFIG_FILE);
    config::save_config(&saved, &config).unwrap();
    assert_eq!(config::load_config(&saved).unwrap(), config);
}

#[test]
fn unreadable_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "not json").unwrap();

    let err = config::resolve(dir.path(), None).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE));
}
