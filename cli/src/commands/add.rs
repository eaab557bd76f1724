use std::io::{BufRead, Write};

use localconnect_common::config::Config;
use localconnect_common::models::business::NewBusiness;
use localconnect_common::success;
use localconnect_core::{DirectoryStore, QueryEngine};

use crate::terminal::print;
use crate::terminal::prompt::Prompt;

pub fn add(store: &dyn DirectoryStore, business: &NewBusiness, cfg: &Config) -> anyhow::Result<()> {
    print::header("add a new business", cfg.quiet);
    let created = QueryEngine::new(store).add(business)?;
    success!("{} has been added successfully! (ID {})", created.name, created.id);
    Ok(())
}

pub fn add_interactive<R: BufRead, W: Write>(
    store: &dyn DirectoryStore,
    prompt: &mut Prompt<R, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("add a new business", cfg.quiet);
    let name = prompt.ask("Enter business name:")?;
    let category = prompt.ask("Enter category (e.g., Restaurant, Salon):")?;
    let location = prompt.ask("Enter location (city or area):")?;
    let contact = prompt.ask("Enter contact (Phone or Email):")?;
    let website = prompt.ask("Enter website (optional):")?;

    let business = NewBusiness::new(name, category, &location, contact, Some(website.as_str()));
    let created = QueryEngine::new(store).add(&business)?;
    success!("{} has been added successfully!", created.name);
    Ok(())
}
