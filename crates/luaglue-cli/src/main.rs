//! luaglue CLI - LuaJIT FFI binding generator
//!
//! Commands:
//! - `luaglue generate` - Render class definitions to glue source or wrapper modules
//! - `luaglue list` - Enumerate resource files under a bindings tree

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod generate;
mod list;

#[derive(Parser)]
#[command(name = "luaglue")]
#[command(author, version, about = "LuaJIT FFI binding generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render class definitions to C glue source or Lua wrapper modules
    Generate {
        /// Directory holding the schema documents (default: bindings)
        #[arg(short, long, default_value = "bindings")]
        bindings_dir: PathBuf,

        /// Output format (native, wrapper)
        #[arg(short, long, default_value = "native")]
        format: String,

        /// Output root; omit with a single file to print to stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Shared library name the wrapper module opens
        #[arg(short, long, default_value = "luabot-wpic")]
        lib: String,

        /// Schema documents to process; a single directory reroots the
        /// bindings tree, none processes the whole bindings directory
        files: Vec<PathBuf>,
    },

    /// Print every resource file under a directory, one per line, sorted
    List {
        /// Directory to enumerate (default: bindings)
        #[arg(default_value = "bindings")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            bindings_dir,
            format,
            out,
            lib,
            files,
        } => {
            let options = generate::Options {
                bindings_dir,
                format: format.parse()?,
                out,
                library: lib,
                files,
            };
            generate::run(&options)?;
        }
        Commands::List { dir } => {
            list::run(&dir)?;
        }
    }

    Ok(())
}
