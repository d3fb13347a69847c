use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staff")]
#[command(about = "Keep a list of trains in a JSON data file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// `--data` only exists on subcommands, so a bare call has no flag
    pub fn data_flag(&self) -> Option<PathBuf> {
        self.command.as_ref().and_then(Commands::data_flag)
    }
}

/// Data file option shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// The data file name (falls back to the SHOPS_DATA environment variable)
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add new train
    Add {
        /// The station's name
        #[arg(short, long)]
        name: String,

        /// Train departure time
        #[arg(short, long, allow_negative_numbers = true)]
        time: i64,

        /// The type of train
        #[arg(short = 'p', long)]
        typ: Option<String>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Display all trains
    Display {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Select the trains of a given type
    Select {
        /// The selected trains
        #[arg(short, long = "selected-trains")]
        selected_trains: String,

        #[command(flatten)]
        data: DataArgs,
    },
}

impl Commands {
    /// Value of `--data` for whichever subcommand was given
    pub fn data_flag(&self) -> Option<PathBuf> {
        match self {
            Self::Add { data, .. } | Self::Display { data } | Self::Select { data, .. } => {
                data.data.clone()
            }
        }
    }

    /// Only `add` changes the data file
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Add { .. })
    }
}
