use colored::*;

use localconnect_common::config::Config;
use localconnect_common::models::business::BusinessListing;
use localconnect_core::{DirectoryStore, QueryEngine};

use crate::lprint;
use crate::terminal::{format, print};

pub fn list(store: &dyn DirectoryStore, cfg: &Config) -> anyhow::Result<()> {
    print::header("available businesses", cfg.quiet);
    let listings: Vec<BusinessListing> = QueryEngine::new(store).list()?;
    print_listings(&listings, cfg);
    Ok(())
}

pub fn print_listings(listings: &[BusinessListing], cfg: &Config) {
    if listings.is_empty() {
        print::no_results();
        return;
    }

    for (idx, listing) in listings.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&format::listing_to_line(listing)),
            _ => {
                print::tree_head(listing.id.0, &listing.name);
                print::as_tree_one_level(format::listing_to_details(listing));
                if idx + 1 != listings.len() {
                    lprint!();
                }
            }
        }
    }

    if cfg.quiet == 0 {
        let rated = listings.iter().filter(|l| l.rating.is_rated()).count();
        let total: ColoredString = format!("{} businesses", listings.len()).bold().green();
        let rated: ColoredString = format!("{rated} rated").bold().yellow();
        print::fat_separator();
        print::centerln(&format!("{total}, {rated}"));
    }
}
