use localconnect_common::config::Config;
use localconnect_common::models::business::BusinessId;
use localconnect_common::warn;
use localconnect_core::{DirectoryStore, QueryEngine, RatingAggregator};

use crate::lprint;
use crate::terminal::{format, print};

pub fn reviews(store: &dyn DirectoryStore, id: BusinessId, cfg: &Config) -> anyhow::Result<()> {
    let Some(business) = store.business(id)? else {
        warn!("No business with ID {id}.");
        return Ok(());
    };

    print::header(&format!("reviews of {}", business.display_name()), cfg.quiet);
    let reviews = QueryEngine::new(store).reviews(id)?;
    if reviews.is_empty() {
        print::print_status("No reviews yet.");
        return Ok(());
    }

    for (idx, review) in reviews.iter().enumerate() {
        print::tree_head(review.id.0, &review.reviewer_name);
        print::as_tree_one_level(format::review_to_details(review));
        if idx + 1 != reviews.len() {
            lprint!();
        }
    }

    if cfg.quiet == 0 {
        let average = RatingAggregator::new(store).average(id)?;
        print::fat_separator();
        print::centerln(&format!("Average {}", format::rating_to_colored(average)));
    }
    Ok(())
}
