mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, PlanArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "playbook",
    about = "SEO roadmap builder — turn a play pack into a client action plan",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from playbook.yaml)
    #[arg(long, global = true, env = "PLAYBOOK_ROOT")]
    root: Option<PathBuf>,

    /// Use this workbook instead of the pre-loaded play pack
    #[arg(long, global = true, value_name = "XLSX")]
    playpack: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the client profiles in the play pack
    Profiles,

    /// Show a profile's play table after audit overrides
    Plan {
        #[command(flatten)]
        args: PlanArgs,

        /// Write the adjusted table as YAML for editing
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },

    /// Generate the DOCX action plan
    Render {
        #[command(flatten)]
        args: PlanArgs,

        /// Client name used in the title and file name
        #[arg(long)]
        client: Option<String>,

        /// Edited play table (YAML, as written by `plan --export`)
        #[arg(long, value_name = "FILE")]
        plays: Option<PathBuf>,

        /// Keyword/topic CSV to include as enrichment
        #[arg(long, value_name = "CSV")]
        topics: Option<PathBuf>,

        /// Output directory (default: output_dir from playbook.yaml)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Preview a keyword/topic CSV
    Topics {
        /// Path to the CSV file
        path: PathBuf,
    },

    /// Show or validate the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let ctx = cmd::Context::new(root, cli.playpack, cli.json);
    let result = match cli.command {
        Commands::Profiles => cmd::profiles::run(&ctx),
        Commands::Plan { args, export } => cmd::plan::run(&ctx, &args, export.as_deref()),
        Commands::Render {
            args,
            client,
            plays,
            topics,
            out,
        } => cmd::render::run(
            &ctx,
            &args,
            cmd::render::RenderInputs {
                client,
                plays,
                topics,
                out,
            },
        ),
        Commands::Topics { path } => cmd::topics::run(&ctx, &path),
        Commands::Config { subcommand } => cmd::config::run(&ctx, subcommand),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
