use std::io::{BufRead, Write};

use localconnect_common::config::Config;
use localconnect_common::models::business::SearchFilter;
use localconnect_core::{DirectoryStore, QueryEngine};

use crate::commands::list::print_listings;
use crate::terminal::print;
use crate::terminal::prompt::Prompt;

pub fn search(store: &dyn DirectoryStore, filter: &SearchFilter, cfg: &Config) -> anyhow::Result<()> {
    let results = QueryEngine::new(store).search(filter)?;
    print::header("search results", cfg.quiet);
    print_listings(&results, cfg);
    Ok(())
}

pub fn search_interactive<R: BufRead, W: Write>(
    store: &dyn DirectoryStore,
    prompt: &mut Prompt<R, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("search for businesses", cfg.quiet);
    let location = prompt.ask("Enter location (city or area):")?;
    let mut filter = SearchFilter::location(&location);
    if prompt.confirm("Would you like to filter by category?")? {
        let category = prompt.ask("Enter category (e.g., Salon, Restaurant):")?;
        filter = filter.with_category(&category);
    }
    search(store, &filter, cfg)
}
