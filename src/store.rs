use rustc_hash::FxHashSet;

use crate::{Board, SolveError};

/// How [`SearchStore::contains`] decides whether a board was seen before.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum VisitedCheck {
    /// Scan every stored board, oldest first.
    #[default]
    Linear,
    /// Look the board up in a hash set kept alongside the entries.
    Hashed,
}

/// A stored board and the index of the board it was generated from.
/// The root is the only entry without a parent.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Entry {
    pub board: Board,
    pub parent: Option<usize>,
}

/// Append-only record of every board the search has generated. It is both
/// the BFS queue (entries past the cursor) and the visited set.
#[derive(Clone, Debug, Default)]
pub struct SearchStore {
    entries: Vec<Entry>,
    seen: Option<FxHashSet<Board>>,
}

impl SearchStore {
    pub fn new(visited: VisitedCheck) -> SearchStore {
        SearchStore {
            entries: Vec::new(),
            seen: match visited {
                VisitedCheck::Linear => None,
                VisitedCheck::Hashed => Some(FxHashSet::default()),
            },
        }
    }

    /// A store holding just `root` at index 0.
    pub fn with_root(root: Board, visited: VisitedCheck) -> SearchStore {
        let mut store = SearchStore::new(visited);
        if let Some(seen) = &mut store.seen {
            seen.insert(root);
        }
        store.entries.push(Entry {
            board: root,
            parent: None,
        });
        store
    }

    /// Stores `board` at the end and returns its index.
    ///
    /// A parent must already be stored, so parent indices always point
    /// backwards.
    pub fn append(&mut self, board: Board, parent: Option<usize>) -> Result<usize, SolveError> {
        let index = self.entries.len();
        if let Some(parent) = parent.filter(|&p| p >= index) {
            return Err(SolveError::BrokenParentChain { index, parent });
        }

        if let Some(seen) = &mut self.seen {
            seen.insert(board);
        }
        self.entries.push(Entry { board, parent });
        Ok(index)
    }

    pub fn contains(&self, board: &Board) -> bool {
        match &self.seen {
            Some(seen) => seen.contains(board),
            None => self.entries.iter().any(|e| e.board == *board),
        }
    }

    pub fn get(&self, index: usize) -> Result<&Entry, SolveError> {
        self.entries.get(index).ok_or(SolveError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse_board;

    #[test]
    fn append_returns_consecutive_indices() {
        for visited in [VisitedCheck::Linear, VisitedCheck::Hashed] {
            let mut store = SearchStore::new(visited);
            assert!(store.is_empty());

            let root = parse_board("123\n4 6\n758").unwrap();
            let child = parse_board("123\n46 \n758").unwrap();

            assert_eq!(store.append(root, None).unwrap(), 0);
            assert_eq!(store.append(child, Some(0)).unwrap(), 1);
            assert_eq!(store.len(), 2);

            assert_eq!(store.get(1).unwrap().board, child);
            assert_eq!(store.get(1).unwrap().parent, Some(0));
            assert_eq!(store.get(0).unwrap().parent, None);
        }
    }

    #[test]
    fn contains_after_append() {
        for visited in [VisitedCheck::Linear, VisitedCheck::Hashed] {
            let mut store = SearchStore::new(visited);
            let board = Board::goal();

            assert!(!store.contains(&board));
            store.append(board, None).unwrap();
            assert!(store.contains(&board));
            assert!(!store.contains(&parse_board("123\n456\n7 8").unwrap()));
        }
    }

    #[test]
    fn with_root_starts_at_index_zero() {
        let store = SearchStore::with_root(Board::goal(), VisitedCheck::Hashed);

        assert_eq!(store.len(), 1);
        assert!(store.contains(&Board::goal()));
        assert_eq!(store.get(0).unwrap().parent, None);
    }

    #[test]
    fn get_out_of_range() {
        let mut store = SearchStore::new(VisitedCheck::Linear);
        store.append(Board::goal(), None).unwrap();

        assert!(matches!(
            store.get(3),
            Err(SolveError::IndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn parent_must_already_be_stored() {
        for visited in [VisitedCheck::Linear, VisitedCheck::Hashed] {
            let mut store = SearchStore::new(visited);
            let child = parse_board("123\n45 \n786").unwrap();

            // the root cannot name itself
            assert!(matches!(
                store.append(Board::goal(), Some(0)),
                Err(SolveError::BrokenParentChain { index: 0, parent: 0 })
            ));
            assert!(store.is_empty());

            store.append(Board::goal(), None).unwrap();
            assert!(matches!(
                store.append(child, Some(4)),
                Err(SolveError::BrokenParentChain { index: 1, parent: 4 })
            ));
            assert_eq!(store.len(), 1);
            assert!(!store.contains(&child));
        }
    }
}
