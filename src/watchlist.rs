//! Watch-list operations.
//!
//! Every operation reloads the stores it touches, validates the request,
//! mutates in memory and writes the result back. A rejected selection never
//! reaches a save, so no store is partially updated.

use log::info;

use crate::error::{Result, WatchlistError};
use crate::random::RandomSource;
use crate::store::{ListKind, MovieStore};

/// Parse a 1-based list position typed by the user.
pub fn parse_position(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&p| p >= 1)
}

/// Unseen/seen list operations over a [`MovieStore`].
#[derive(Debug, Clone)]
pub struct Watchlist {
    store: MovieStore,
}

impl Watchlist {
    pub fn new(store: MovieStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    /// Current contents of one list.
    pub fn titles(&self, kind: ListKind) -> Result<Vec<String>> {
        self.store.load(kind)
    }

    /// Append a title to the unseen list and return it as stored.
    pub fn add(&self, title: &str) -> Result<String> {
        let title = title.trim().to_string();
        let mut unseen = self.store.load(ListKind::Unseen)?;
        unseen.push(title.clone());
        self.store.save(ListKind::Unseen, &unseen)?;
        info!("Added {:?} to unseen list", title);
        Ok(title)
    }

    /// Move the unseen title at `position` (1-based) to the end of the
    /// seen list. Seen is written first, so a failed second write leaves a
    /// duplicate rather than losing the title.
    pub fn mark_seen(&self, position: usize) -> Result<String> {
        let mut unseen = self.store.load(ListKind::Unseen)?;
        let mut seen = self.store.load(ListKind::Seen)?;
        let title = take(&mut unseen, position)?;
        seen.push(title.clone());
        self.store.save(ListKind::Seen, &seen)?;
        self.store.save(ListKind::Unseen, &unseen)?;
        info!("Marked {:?} as seen", title);
        Ok(title)
    }

    /// Remove the title at `position` (1-based) from one list.
    pub fn delete(&self, kind: ListKind, position: usize) -> Result<String> {
        let mut titles = self.store.load(kind)?;
        let title = take(&mut titles, position)?;
        self.store.save(kind, &titles)?;
        info!("Deleted {:?} from {} list", title, kind);
        Ok(title)
    }

    /// A uniformly chosen unseen title, or `None` when the list is empty.
    pub fn pick_random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Option<String>> {
        let mut unseen = self.store.load(ListKind::Unseen)?;
        if unseen.is_empty() {
            return Ok(None);
        }
        let index = rng.pick(unseen.len());
        Ok(Some(unseen.swap_remove(index)))
    }
}

/// Order-preserving removal by 1-based position.
fn take(titles: &mut Vec<String>, position: usize) -> Result<String> {
    let len = titles.len();
    if position == 0 || position > len {
        return Err(WatchlistError::InvalidSelection { position, len });
    }
    Ok(titles.remove(position - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::fs;
    use tempfile::TempDir;

    fn temp_watchlist() -> (TempDir, Watchlist) {
        let dir = TempDir::new().unwrap();
        let list = Watchlist::new(MovieStore::new(StoreConfig::in_dir(dir.path())));
        (dir, list)
    }

    fn seed(list: &Watchlist, kind: ListKind, items: &[&str]) {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        list.store().save(kind, &items).unwrap();
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1"), Some(1));
        assert_eq!(parse_position(" 12 \n"), Some(12));
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_position("-1"), None);
        assert_eq!(parse_position("two"), None);
        assert_eq!(parse_position(""), None);
    }

    #[test]
    fn test_add_trims_and_appends() {
        let (_dir, list) = temp_watchlist();
        assert_eq!(list.add("  Dune \n").unwrap(), "Dune");
        list.add("Arrival").unwrap();
        assert_eq!(list.titles(ListKind::Unseen).unwrap(), vec!["Dune", "Arrival"]);
        assert!(list.titles(ListKind::Seen).unwrap().is_empty());
    }

    #[test]
    fn test_add_allows_duplicates_and_empty() {
        let (_dir, list) = temp_watchlist();
        list.add("Heat").unwrap();
        list.add("Heat").unwrap();
        list.add("   ").unwrap();
        assert_eq!(list.titles(ListKind::Unseen).unwrap(), vec!["Heat", "Heat", ""]);
    }

    #[test]
    fn test_mark_seen_moves_title() {
        let (_dir, list) = temp_watchlist();
        seed(&list, ListKind::Unseen, &["Alien", "Heat", "Ronin"]);
        seed(&list, ListKind::Seen, &["Jaws"]);

        assert_eq!(list.mark_seen(2).unwrap(), "Heat");
        assert_eq!(list.titles(ListKind::Unseen).unwrap(), vec!["Alien", "Ronin"]);
        assert_eq!(list.titles(ListKind::Seen).unwrap(), vec!["Jaws", "Heat"]);
    }

    #[test]
    fn test_mark_seen_out_of_range_changes_nothing() {
        let (_dir, list) = temp_watchlist();
        seed(&list, ListKind::Unseen, &["Alien", "Heat", "Ronin"]);
        let before = fs::read(list.store().path(ListKind::Unseen)).unwrap();

        let err = list.mark_seen(99).unwrap_err();
        assert!(err.is_invalid_selection());
        assert!(list.mark_seen(0).unwrap_err().is_invalid_selection());

        assert_eq!(fs::read(list.store().path(ListKind::Unseen)).unwrap(), before);
        assert!(!list.store().path(ListKind::Seen).exists());
    }

    #[test]
    fn test_mark_seen_failed_seen_write_keeps_unseen() {
        let dir = TempDir::new().unwrap();
        let list = Watchlist::new(MovieStore::new(StoreConfig {
            unseen: dir.path().join("unseen_movies.json"),
            seen: dir.path().join("missing").join("seen_movies.json"),
        }));
        seed(&list, ListKind::Unseen, &["Heat"]);

        let err = list.mark_seen(1).unwrap_err();
        assert!(matches!(err, WatchlistError::Io { .. }));
        assert_eq!(list.titles(ListKind::Unseen).unwrap(), vec!["Heat"]);
    }

    #[test]
    fn test_delete_leaves_other_list_alone() {
        let (_dir, list) = temp_watchlist();
        seed(&list, ListKind::Unseen, &["Alien"]);
        seed(&list, ListKind::Seen, &["Jaws", "Heat", "Ronin"]);

        assert_eq!(list.delete(ListKind::Seen, 1).unwrap(), "Jaws");
        assert_eq!(list.titles(ListKind::Seen).unwrap(), vec!["Heat", "Ronin"]);
        assert_eq!(list.titles(ListKind::Unseen).unwrap(), vec!["Alien"]);
    }

    #[test]
    fn test_delete_from_empty_list_is_invalid() {
        let (_dir, list) = temp_watchlist();
        let err = list.delete(ListKind::Unseen, 1).unwrap_err();
        assert!(matches!(err, WatchlistError::InvalidSelection { position: 1, len: 0 }));
    }

    #[test]
    fn test_corrupt_store_is_never_overwritten() {
        let (_dir, list) = temp_watchlist();
        let path = list.store().path(ListKind::Unseen).to_path_buf();
        fs::write(&path, "not json").unwrap();

        let err = list.add("Dune").unwrap_err();
        assert!(matches!(err, WatchlistError::CorruptStore { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_pick_random_on_empty_list() {
        let (_dir, list) = temp_watchlist();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(list.pick_random(&mut rng).unwrap(), None);
        assert!(!list.store().path(ListKind::Unseen).exists());
    }

    #[test]
    fn test_pick_random_is_repeatable_and_read_only() {
        let (_dir, list) = temp_watchlist();
        seed(&list, ListKind::Unseen, &["Alien", "Heat", "Ronin", "Jaws"]);

        let first = list.pick_random(&mut Pcg32::seed_from_u64(9)).unwrap();
        let second = list.pick_random(&mut Pcg32::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);

        let picked = first.unwrap();
        assert!(["Alien", "Heat", "Ronin", "Jaws"].contains(&picked.as_str()));
        assert_eq!(list.titles(ListKind::Unseen).unwrap().len(), 4);
    }

    proptest! {
        #[test]
        fn prop_adds_append_in_order(names in prop::collection::vec("[A-Za-z0-9 ]{0,20}", 0..8)) {
            let (_dir, list) = temp_watchlist();
            for (i, name) in names.iter().enumerate() {
                list.add(name).unwrap();
                prop_assert_eq!(list.titles(ListKind::Unseen).unwrap().len(), i + 1);
            }
            let expected: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
            prop_assert_eq!(list.titles(ListKind::Unseen).unwrap(), expected);
        }
    }
}
