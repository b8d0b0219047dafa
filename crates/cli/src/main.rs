use crate::{error::CliError, output::OutputFormat};
use clap::Parser;
use commands::Commands;
use filter_compiler::{
    ClassificationPolicy, CompileSettingsBuilder, FilterCompiler, GrpcFilterCompiler,
    RestFilterCompiler,
};
use model::FilterTree;
use prost::Message;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "filterc",
    version = "0.0.1",
    about = "Compile filter trees into search service wire formats"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so compiled output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            input,
            format,
            policy,
            pretty,
        } => {
            let format = OutputFormat::from_str(&format)
                .map_err(|_| CliError::InvalidOutputFormat(format.clone()))?;
            let policy = ClassificationPolicy::from_str(&policy)
                .map_err(|_| CliError::InvalidPolicy(policy.clone()))?;

            let tree = load_filter_tree(&input).await?;
            info!(
                "Compiling filter from {}: {} leaves, depth {}, policy {}",
                input,
                tree.leaf_count(),
                tree.depth(),
                policy
            );

            let settings = CompileSettingsBuilder::new().policy(policy).build();

            if format.includes_grpc() {
                let compiler = GrpcFilterCompiler::new(settings);
                if let Some(filters) = compiler.compile(Some(&tree))? {
                    let bytes = filters.encode_to_vec();
                    println!("{}", output::render_grpc(&filters, &bytes));
                }
            }

            if format.includes_rest() {
                let compiler = RestFilterCompiler::new(settings);
                if let Some(filter) = compiler.compile(Some(&tree))? {
                    println!("{}", output::render_rest(&filter, pretty)?);
                }
            }
        }
        Commands::Check { input } => {
            let tree = load_filter_tree(&input).await?;
            println!("{:<16} {}", "Leaves", tree.leaf_count());
            println!("{:<16} {}", "Composites", tree.composite_count());
            println!("{:<16} {}", "Depth", tree.depth());
        }
    }

    Ok(())
}

async fn load_filter_tree(path: &str) -> Result<FilterTree, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let tree = serde_json::from_str(&source)?;
    Ok(tree)
}
