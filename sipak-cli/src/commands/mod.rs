use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod extract;
pub mod list;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a package to a scenario JSON directory
    Convert {
        /// Source package file (.siq appended when the extension is omitted)
        #[arg(short, long)]
        source: PathBuf,
    },

    /// Extract a package without converting
    Extract {
        /// Source package file
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory
        #[arg(short, long)]
        destination: PathBuf,
    },

    /// List package entries by recovered filename
    List {
        /// Source package file
        #[arg(short, long)]
        source: PathBuf,
    },
}

impl Commands {
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Commands::Convert { source } => convert::execute(&source),
            Commands::Extract {
                source,
                destination,
            } => extract::execute(&source, &destination),
            Commands::List { source } => list::execute(&source),
        }
    }
}
