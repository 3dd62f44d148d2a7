use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod bulk;
pub mod delete;
pub mod display;
pub mod import;
pub mod list;
pub mod menu;
pub mod ui;
pub mod update;

pub use add::run_add;
pub use bulk::run_bulk;
pub use delete::run_delete;
pub use import::run_import;
pub use list::{run_list, run_page, run_search};
pub use menu::run_menu;
pub use update::run_update;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Phonebook contact manager for the command line")]
#[command(version)]
pub struct Cli {
    /// Database file (overrides PHONEBOOK_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the contacts table if it does not exist
    Init,
    /// Load contacts from a CSV file (first_name,last_name,phone)
    Import(ImportArgs),
    /// Add a contact, or update the one with the same first name
    Add(AddArgs),
    /// Add or update many contacts from name/phone pairs
    Bulk(BulkArgs),
    /// Change the first name or phone of a contact by ID
    Update(UpdateArgs),
    /// List all contacts
    List(OutputArgs),
    /// Search first name, last name and phone for a pattern
    Search(SearchArgs),
    /// List one page of contacts
    Page(PageArgs),
    /// Delete contacts by first name or phone
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ImportArgs {
    pub file: String,
    /// Validate and report without writing
    #[arg(short, long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub first: Option<String>,
    #[arg(short, long)]
    pub last: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
}

#[derive(Args)]
pub struct BulkArgs {
    /// Alternating names and phones; prompts for a line when empty
    pub tokens: Vec<String>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("field").required(true).args(["first", "phone"])))]
pub struct UpdateArgs {
    pub id: i64,
    #[arg(short, long)]
    pub first: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Print contacts as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    pub pattern: String,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct PageArgs {
    /// Records per page (defaults to PHONEBOOK_PAGE_SIZE or 20)
    #[arg(short, long)]
    pub limit: Option<u32>,
    #[arg(short, long, default_value = "0")]
    pub offset: u32,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
#[command(group(ArgGroup::new("key").required(true).args(["name", "phone"])))]
pub struct DeleteArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
}
