// Entrypoint for the watch-list CLI.
// - Keeps `main` small: set up logging, build the store config and hand a
//   watch-list to the menu loop.
// - Uses the terminal console when stdin is a TTY, plain line input otherwise.

use std::io::{self, IsTerminal, Write};

use log::info;
use movie_watchlist::{
    config::StoreConfig,
    console::{LineConsole, TerminalConsole},
    random::wall_clock_rng,
    store::MovieStore,
    ui::App,
    watchlist::Watchlist,
};

/// Log to stderr at `warn` by default so lines do not mix with the menu;
/// `RUST_LOG` overrides.
fn init_logger() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = StoreConfig::default();
    info!("Using stores {:?} and {:?}", config.unseen, config.seen);
    let watchlist = Watchlist::new(MovieStore::new(config));

    // Start the interactive menu. This call blocks until the user exits.
    if io::stdin().is_terminal() {
        App::new(TerminalConsole::new(), watchlist, wall_clock_rng()).run()?;
    } else {
        let console = LineConsole::new(io::stdin().lock(), io::stdout().lock());
        App::new(console, watchlist, wall_clock_rng()).run()?;
    }
    Ok(())
}
