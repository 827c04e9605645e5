// UI layer: the numbered menu loop. Each choice runs one watch-list
// operation, reports the outcome, then waits for Enter and clears the screen
// before the menu comes back. Store errors are reported and the loop goes on.

use std::io;

use anyhow::{Context, Result};
use log::{error, info};

use crate::console::Console;
use crate::error::WatchlistError;
use crate::random::RandomSource;
use crate::store::ListKind;
use crate::watchlist::{parse_position, Watchlist};

const MENU_ITEMS: [&str; 7] = [
    "Add a movie",
    "Get a random unseen movie",
    "Display unseen movies",
    "Display seen movies",
    "Mark a movie as seen",
    "Delete a movie",
    "Exit",
];

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Random,
    ShowUnseen,
    ShowSeen,
    MarkSeen,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Random),
            "3" => Some(Self::ShowUnseen),
            "4" => Some(Self::ShowSeen),
            "5" => Some(Self::MarkSeen),
            "6" => Some(Self::Delete),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Target chosen in the delete sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteTarget {
    List(ListKind),
    Back,
}

impl DeleteTarget {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "u" => Some(Self::List(ListKind::Unseen)),
            "s" => Some(Self::List(ListKind::Seen)),
            "n" => Some(Self::Back),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu over a console, a watch-list and a random source.
pub struct App<C, R> {
    console: C,
    watchlist: Watchlist,
    rng: R,
}

impl<C: Console, R: RandomSource> App<C, R> {
    pub fn new(console: C, watchlist: Watchlist, rng: R) -> Self {
        Self {
            console,
            watchlist,
            rng,
        }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("Input closed, leaving the menu");
                    return Ok(());
                }
                Err(e) => return Err(e).context("Terminal I/O failed"),
            }
        }
    }

    fn step(&mut self) -> io::Result<Flow> {
        self.render_menu()?;
        let input = self.console.prompt("Enter your choice (1-7): ")?;
        self.console.say("")?;

        let Some(choice) = MenuChoice::parse(&input) else {
            self.console.say("Invalid choice. Please try again.")?;
            return Ok(Flow::Continue);
        };

        match choice {
            MenuChoice::Add => self.add_movie()?,
            MenuChoice::Random => self.random_movie()?,
            MenuChoice::ShowUnseen => {
                self.show_list(ListKind::Unseen)?;
            }
            MenuChoice::ShowSeen => {
                self.show_list(ListKind::Seen)?;
            }
            MenuChoice::MarkSeen => self.mark_seen()?,
            MenuChoice::Delete => self.delete_movie()?,
            MenuChoice::Exit => {
                self.console.say("Exiting the program.")?;
                return Ok(Flow::Exit);
            }
        }

        self.console.pause()?;
        self.console.clear()?;
        Ok(Flow::Continue)
    }

    fn render_menu(&mut self) -> io::Result<()> {
        self.console.say("\nMovie Watch List Menu\n")?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, item))?;
        }
        self.console.say("")
    }

    fn add_movie(&mut self) -> io::Result<()> {
        let title = self.console.prompt("Enter the movie name: ")?;
        match self.watchlist.add(&title) {
            Ok(title) => self.console.say(&format!(
                "'{}' has been added to the unseen movies list.",
                title
            )),
            Err(e) => self.report(e),
        }
    }

    fn random_movie(&mut self) -> io::Result<()> {
        match self.watchlist.pick_random(&mut self.rng) {
            Ok(Some(title)) => self
                .console
                .say(&format!("Randomly selected unseen movie: {}", title)),
            Ok(None) => self.console.say("No unseen movies found."),
            Err(e) => self.report(e),
        }
    }

    /// Print a numbered list. Returns its length, or `None` if it could not
    /// be loaded.
    fn show_list(&mut self, kind: ListKind) -> io::Result<Option<usize>> {
        let titles = match self.watchlist.titles(kind) {
            Ok(titles) => titles,
            Err(e) => {
                self.report(e)?;
                return Ok(None);
            }
        };

        if titles.is_empty() {
            self.console.say(&format!("No {} movies found.", kind))?;
            return Ok(Some(0));
        }

        self.console.say(&format!("{} Movies:", heading(kind)))?;
        for (i, title) in titles.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, title))?;
        }
        Ok(Some(titles.len()))
    }

    fn mark_seen(&mut self) -> io::Result<()> {
        if !matches!(self.show_list(ListKind::Unseen)?, Some(len) if len > 0) {
            return Ok(());
        }

        let input = self
            .console
            .prompt("Enter the number of the movie you have seen: ")?;
        let Some(position) = parse_position(&input) else {
            return self.console.say("Invalid selection.");
        };

        match self.watchlist.mark_seen(position) {
            Ok(title) => self.console.say(&format!(
                "'{}' has been moved to the seen movies list.",
                title
            )),
            Err(e) => self.report(e),
        }
    }

    fn delete_movie(&mut self) -> io::Result<()> {
        // An empty list sends the user back to the list question.
        let kind = loop {
            let input = self.console.prompt(
                "Do you want to delete from unseen (u) or seen (s) list? you can also press (n) if you want to go back: ",
            )?;
            self.console.say("")?;
            let kind = match DeleteTarget::parse(&input) {
                Some(DeleteTarget::List(kind)) => kind,
                Some(DeleteTarget::Back) => return Ok(()),
                None => {
                    self.console
                        .say("Invalid choice. Please enter 'u' or 's' or 'n'")?;
                    continue;
                }
            };
            match self.show_list(kind)? {
                Some(0) => continue,
                Some(_) => break kind,
                None => return Ok(()),
            }
        };

        let input = self
            .console
            .prompt("Enter the number of the movie to delete: ")?;
        let Some(position) = parse_position(&input) else {
            return self.console.say("Invalid selection.");
        };

        match self.watchlist.delete(kind, position) {
            Ok(title) => self.console.say(&format!(
                "'{}' has been deleted from the {} movies list.",
                title, kind
            )),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: WatchlistError) -> io::Result<()> {
        if err.is_invalid_selection() {
            return self.console.say("Invalid selection.");
        }
        error!("{}", err);
        self.console.say(&format!("Error: {}", err))
    }
}

fn heading(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Unseen => "Unseen",
        ListKind::Seen => "Seen",
    }
}
