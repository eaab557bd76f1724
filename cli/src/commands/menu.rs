use std::io::{self, BufRead, Write};
use std::str::FromStr;

use localconnect_common::config::Config;
use localconnect_common::error::DirectoryError;
use localconnect_common::{error, info, warn};
use localconnect_core::DirectoryStore;

use crate::commands::{add, list, review, search};
use crate::lprint;
use crate::terminal::print;
use crate::terminal::prompt::Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Search,
    Review,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::ViewAll),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Review),
            "5" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid menu choice: {other}")),
        }
    }
}

/// Runs until the operator picks Exit or input ends.
///
/// A failing action is reported and the menu comes back; only a failure to
/// read the menu choice itself ends the loop with an error.
pub fn menu<R: BufRead, W: Write>(
    store: &dyn DirectoryStore,
    prompt: &mut Prompt<R, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    loop {
        print_menu(cfg);
        let answer = match prompt.ask("Choose (1/2/3/4/5):") {
            Ok(answer) => answer,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        };

        let result = match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => add::add_interactive(store, prompt, cfg),
            Ok(MenuChoice::ViewAll) => list::list(store, cfg),
            Ok(MenuChoice::Search) => search::search_interactive(store, prompt, cfg),
            Ok(MenuChoice::Review) => review::review(store, prompt, cfg),
            Ok(MenuChoice::Exit) => break,
            Err(_) => {
                warn!("Invalid choice. Please select 1-5.");
                continue;
            }
        };

        if let Err(err) = result {
            if is_end_of_input(&err) {
                break;
            }
            error!("{err:#}");
        }
    }

    info!("Goodbye!");
    Ok(())
}

fn print_menu(cfg: &Config) {
    lprint!();
    print::header("welcome to local connect", cfg.quiet);
    print::print_status("1. Add Business");
    print::print_status("2. View All Businesses");
    print::print_status("3. Search Businesses");
    print::print_status("4. Leave Review");
    print::print_status("5. Exit");
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    let io_err = err.downcast_ref::<io::Error>().or_else(|| match err.downcast_ref::<DirectoryError>() {
        Some(DirectoryError::Io(io_err)) => Some(io_err),
        _ => None,
    });
    io_err.is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::logging::ShellFormatter;
    use localconnect_common::PRINT_TARGET;
    use localconnect_common::models::business::NewBusiness;
    use localconnect_common::models::rating::AverageRating;
    use localconnect_core::SqliteStore;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs the menu and returns what was typed back at the operator and
    /// what went through the shell formatter.
    fn run_captured(store: &SqliteStore, script: &str) -> (String, String) {
        colored::control::set_override(false);
        let shown = Captured::default();
        let writer = shown.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(format!("warn,{PRINT_TARGET}=info")))
            .event_format(ShellFormatter)
            .with_writer(move || writer.clone())
            .finish();

        let cfg = Config::with_db_path(store.db_path());
        let mut prompt = Prompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        tracing::subscriber::with_default(subscriber, || menu(store, &mut prompt, &cfg)).unwrap();

        let (_, output) = prompt.into_parts();
        let printed = shown.0.lock().unwrap().clone();
        (String::from_utf8(output).unwrap(), String::from_utf8(printed).unwrap())
    }

    fn run(store: &SqliteStore, script: &str) -> String {
        run_captured(store, script).0
    }

    fn store_in(dir: &tempfile::TempDir) -> SqliteStore {
        let store = SqliteStore::open(&dir.path().join("menu.db"));
        store.initialize().unwrap();
        store
    }

    #[test]
    fn menu_choice_parses_digits_only() {
        assert_eq!(" 1 ".parse::<MenuChoice>(), Ok(MenuChoice::Add));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("add".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn add_then_review_through_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let script = "1\nJoe's Diner\nRestaurant\nSpringfield\n555-1234\n\n\
                      4\nmarge\njoe\nSPRINGFIELD\ny\n4\nlovely\n\
                      5\n";

        let output = run(&store, script);

        assert!(output.contains("Found: Joe's Diner located in Springfield"));
        let businesses = store.all_businesses().unwrap();
        assert_eq!(businesses.len(), 1);
        assert_eq!(businesses[0].location, "springfield");
        assert_eq!(businesses[0].website, None);
        assert_eq!(businesses[0].average_rating, AverageRating::Score(4.0));
        let reviews = store.reviews_for(businesses[0].id).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].reviewer_name, "Marge");
    }

    #[test]
    fn invalid_rating_keeps_menu_running_without_writes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let script = "1\nJoe's Diner\nRestaurant\nSpringfield\n555-1234\n\n\
                      4\nmarge\njoe\nspringfield\ny\nseven\n\
                      2\n5\n";

        run(&store, script);

        let businesses = store.all_businesses().unwrap();
        assert!(store.reviews_for(businesses[0].id).unwrap().is_empty());
        assert_eq!(businesses[0].average_rating, AverageRating::NoRatings);
    }

    #[test]
    fn invalid_choice_and_end_of_input_exit_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        run(&store, "9\n");
        run(&store, "1\nhalf a business\n");
        assert!(store.all_businesses().unwrap().is_empty());
    }

    fn springfield_store(dir: &tempfile::TempDir) -> SqliteStore {
        let store = store_in(dir);
        store
            .insert_business(&NewBusiness::new("Joe's Diner", "Restaurant", "Springfield", "555-1234", None))
            .unwrap();
        store
            .insert_business(&NewBusiness::new("Spring Beans", "Cafe", "Springfield", "555-1111", None))
            .unwrap();
        store
    }

    #[test]
    fn search_without_category_filter_shows_every_location_match() {
        let dir = tempfile::tempdir().unwrap();
        let store = springfield_store(&dir);

        let (asked, printed) = run_captured(&store, "3\nspringfield\nn\n5\n");

        assert!(asked.contains("Would you like to filter by category? (Y/N):"));
        assert!(!asked.contains("Enter category"));
        assert!(printed.contains("Joe's Diner"));
        assert!(printed.contains("Spring Beans"));
    }

    #[test]
    fn search_with_category_filter_narrows_results() {
        let dir = tempfile::tempdir().unwrap();
        let store = springfield_store(&dir);

        let (asked, printed) = run_captured(&store, "3\nspringfield\ny\ncafe\n5\n");

        assert!(asked.contains("Enter category"));
        assert!(printed.contains("Spring Beans"));
        assert!(!printed.contains("Joe's Diner"));
    }

    #[test]
    fn empty_search_reports_no_businesses() {
        let dir = tempfile::tempdir().unwrap();
        let store = springfield_store(&dir);

        let (_, printed) = run_captured(&store, "3\nshelbyville\nn\n5\n");

        assert!(printed.contains("No businesses found."));
        assert!(printed.contains("Goodbye!"));
    }

    #[test]
    fn storage_failure_is_reported_and_menu_carries_on() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("missing").join("menu.db"));

        let (asked, printed) = run_captured(&store, "2\n5\n");

        assert!(printed.contains("[-] storage failure"));
        assert_eq!(asked.matches("Choose (1/2/3/4/5):").count(), 2);
        assert!(printed.contains("Goodbye!"));
    }
}
