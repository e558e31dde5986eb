//! In-memory album storage shared across request handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::album::{seed_albums, Album};

/// Ordered, process-lifetime album storage.
///
/// Cloning the store clones the handle, not the albums: every clone observes
/// the same sequence. Reads take a shared lock and appends an exclusive one,
/// so concurrent creates never lose an entry.
#[derive(Debug, Clone, Default)]
pub struct AlbumStore {
    albums: Arc<RwLock<Vec<Album>>>,
}

impl AlbumStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `albums` in the given order.
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: Arc::new(RwLock::new(albums)),
        }
    }

    /// Create a store holding the fixed startup catalog.
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    /// Snapshot of every album in insertion order.
    pub fn list(&self) -> Vec<Album> {
        self.read().clone()
    }

    /// First album whose id matches exactly.
    pub fn find(&self, id: &str) -> Option<Album> {
        self.read().iter().find(|album| album.id == id).cloned()
    }

    /// Append to the end of the sequence. Returns the new length.
    pub fn append(&self, album: Album) -> usize {
        let mut albums = self.write();
        albums.push(album);
        albums.len()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-pushed, so a
    // poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Album>> {
        self.albums.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Album>> {
        self.albums.write().unwrap_or_else(PoisonError::into_inner)
    }
}
