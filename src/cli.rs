use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::calculator::constants::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_STORE_TIMEOUT_MS, DEFAULT_STORE_URI,
};

/// Recipe calculator — estimates calories and cost, writes a report and stores the result.
#[derive(Parser, Debug)]
#[command(name = "recipe_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory for report files.
    #[arg(short, long, default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// MongoDB connection string.
    #[arg(long, default_value = DEFAULT_STORE_URI, global = true)]
    pub mongo_uri: String,

    /// Database that receives records.
    #[arg(long, default_value = DEFAULT_DATABASE, global = true)]
    pub database: String,

    /// Collection that receives records.
    #[arg(long, default_value = DEFAULT_COLLECTION, global = true)]
    pub collection: String,

    /// Milliseconds to wait for the record store before giving up.
    #[arg(long, default_value_t = DEFAULT_STORE_TIMEOUT_MS, global = true)]
    pub store_timeout_ms: u64,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Fill in the recipe form interactively.
    #[default]
    Form,

    /// Run a single calculation from command-line values.
    Calc {
        /// Recipe: Бургер, Пицца, Вок (or burger, pizza, wok).
        #[arg(short, long)]
        recipe: String,

        #[arg(long, allow_hyphen_values = true)]
        meat: String,

        #[arg(long, allow_hyphen_values = true)]
        cheese: String,

        #[arg(long, allow_hyphen_values = true)]
        vegetables: String,

        #[arg(long, allow_hyphen_values = true)]
        sauce: String,

        /// Report format: docx or xlsx. Omit to skip the report file.
        #[arg(short, long, default_value = "")]
        format: String,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
}
