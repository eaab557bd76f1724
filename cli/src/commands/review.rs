use std::io::{BufRead, Write};

use localconnect_common::config::Config;
use localconnect_common::{info, success, warn};
use localconnect_core::{DirectoryStore, ReviewOutcome, ReviewRequest, ReviewWorkflow};

use crate::terminal::print;
use crate::terminal::prompt::{Prompt, TerminalPrompter};

pub fn review<R: BufRead, W: Write>(
    store: &dyn DirectoryStore,
    prompt: &mut Prompt<R, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    print::header("leave a review", cfg.quiet);
    let reviewer = prompt.ask("Enter your name as a reviewer:")?;
    let name = prompt.ask("Enter the business name:")?;
    let location = prompt.ask("Enter the business location:")?;
    let request = ReviewRequest::new(&reviewer, &name, &location);

    let workflow = ReviewWorkflow::new(store);
    let mut prompter = TerminalPrompter::new(prompt);

    match workflow.leave_review(&request, &mut prompter) {
        Ok(ReviewOutcome::Recorded { review, business, average }) => {
            success!("Thank you, {}! Your review has been added.", review.reviewer_name);
            print::print_status(format!("{} is now rated {}", business.display_name(), average));
        }
        Ok(ReviewOutcome::Cancelled) => info!("Review cancelled."),
        Ok(ReviewOutcome::NotFound) => warn!("No matching business found."),
        Err(err) if err.is_validation() => warn!("Invalid input: {err}"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
