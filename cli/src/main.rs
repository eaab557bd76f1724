mod commands;
mod terminal;

use commands::{CommandLine, Commands, add, list, menu, review, reviews, search};
use localconnect_common::models::business::{BusinessId, NewBusiness, SearchFilter};
use localconnect_core::{DirectoryStore, SqliteStore};
use terminal::{logging, print};
use terminal::prompt::Prompt;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(commands.verbose);
    print::banner(cfg.no_banner, cfg.quiet);

    let store = SqliteStore::new(&cfg);
    store.initialize()?;

    match commands.command {
        None | Some(Commands::Menu) => menu::menu(&store, &mut Prompt::stdio(), &cfg),
        Some(Commands::Add {
            name,
            category,
            location,
            contact,
            website,
        }) => {
            let business = NewBusiness::new(name, category, &location, contact, website.as_deref());
            add::add(&store, &business, &cfg)
        }
        Some(Commands::List) => list::list(&store, &cfg),
        Some(Commands::Search { location, category }) => {
            let mut filter = SearchFilter::location(&location);
            if let Some(category) = category {
                filter = filter.with_category(&category);
            }
            search::search(&store, &filter, &cfg)
        }
        Some(Commands::Review) => review::review(&store, &mut Prompt::stdio(), &cfg),
        Some(Commands::Reviews { id }) => reviews::reviews(&store, BusinessId(id), &cfg),
    }
}
