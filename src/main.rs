use clap::Parser;
use phonebook::cli::{
    run_add, run_bulk, run_delete, run_import, run_list, run_menu, run_page, run_search,
    run_update, Cli, Commands,
};
use phonebook::config::Config;
use phonebook::db::Database;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so they never mix with contact output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.db)?;
    let db = Database::open_at(&config.db_path)?;

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&db, &config)?;
        }
        Some(Commands::Init) => {
            println!("Table contacts ready at {}", config.db_path.display());
        }
        Some(Commands::Import(args)) => {
            run_import(&db, &args.file, args.dry_run)?;
        }
        Some(Commands::Add(args)) => {
            run_add(&db, args.first, args.last, args.phone)?;
        }
        Some(Commands::Bulk(args)) => {
            run_bulk(&db, args.tokens)?;
        }
        Some(Commands::Update(args)) => {
            run_update(&db, args.id, args.first, args.phone)?;
        }
        Some(Commands::List(args)) => {
            run_list(&db, args.json)?;
        }
        Some(Commands::Search(args)) => {
            run_search(&db, &args.pattern, args.output.json)?;
        }
        Some(Commands::Page(args)) => {
            run_page(&db, args.limit.unwrap_or(config.page_size), args.offset, args.output.json)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&db, args.name, args.phone)?;
        }
    }

    Ok(())
}
