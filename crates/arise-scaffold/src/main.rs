use std::path::PathBuf;

use arise_scaffold::config::{self, CONFIG_FILE, ScaffoldConfig};
use arise_scaffold::generate::{self, Action, Artifact, WriteOptions};
use arise_scaffold::render::Renderer;
use arise_scaffold::resource::Resource;
use clap::{Args, Parser, Subcommand};
use eyre::Result;

#[derive(Parser)]
#[command(
    name = "arise-scaffold",
    about = "Generate CRUD boilerplate (SQLAlchemy, Pydantic, FastAPI, Next.js, TypeScript)",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long, global = true, env = "ARISE_PROJECT_ROOT")]
    root: Option<PathBuf>,

    /// Config file (default: {root}/arise-scaffold.json, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON logs and a JSON summary
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// SQLAlchemy model
    Model(ResourceArgs),
    /// Pydantic schemas
    Schema(ResourceArgs),
    /// FastAPI router
    Endpoint(ResourceArgs),
    /// Next.js page
    Page(ResourceArgs),
    /// TypeScript types
    Types(ResourceArgs),
    /// All of the above
    All(ResourceArgs),
    /// Write a config file with the default output directories
    InitConfig {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ResourceArgs {
    /// Resource name, e.g. `blog_post` or `BlogPost`
    name: String,

    /// Comma-separated `name:type[?]` list; `?` marks a nullable field
    #[arg(long, short = 'f', default_value = "")]
    fields: String,

    /// Comma-separated `name:kind:target` list (many-to-one, one-to-many, many-to-many)
    #[arg(long, short = 'r', default_value = "")]
    relations: String,

    /// Print what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Overwrite existing files
    #[arg(long)]
    force: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.json);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let (artifacts, args): (Vec<Artifact>, ResourceArgs) = match cli.command {
        Commands::Model(args) => (vec![Artifact::Model], args),
        Commands::Schema(args) => (vec![Artifact::Schema], args),
        Commands::Endpoint(args) => (vec![Artifact::Endpoint], args),
        Commands::Page(args) => (vec![Artifact::Page], args),
        Commands::Types(args) => (vec![Artifact::Types], args),
        Commands::All(args) => (Artifact::ALL.to_vec(), args),
        Commands::InitConfig { force } => {
            let path = cli.config.unwrap_or_else(|| root.join(CONFIG_FILE));
            if path.exists() && !force {
                eyre::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            config::save_config(&path, &ScaffoldConfig::default())?;
            println!("wrote {}", path.display());
            return Ok(());
        }
    };

    let config = config::resolve(&root, cli.config.as_deref())?;
    let resource = Resource::parse(&args.name, &args.fields, &args.relations)?;
    let renderer = Renderer::new()?;

    let files = generate::plan(&renderer, &artifacts, &resource, &config)?;
    let outcomes = generate::write(
        &root,
        &files,
        WriteOptions {
            dry_run: args.dry_run,
            force: args.force,
        },
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            let label = match outcome.action {
                Action::Created => "create",
                Action::Overwritten => "overwrite",
                Action::Skipped => "skip",
                Action::DryRun => "would write",
            };
            println!("{label:>12}  {}", outcome.path.display());
        }
    }

    let skipped = outcomes.iter().filter(|o| o.action == Action::Skipped).count();
    if skipped > 0 {
        eyre::bail!("{skipped} file(s) already exist; rerun with --force to overwrite");
    }
    Ok(())
}
