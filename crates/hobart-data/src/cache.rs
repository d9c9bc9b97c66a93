//! Explicit memoization of panel loads.

use crate::error::Result;
use crate::panel::BetaPanel;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Cache of parsed panels keyed by source path.
///
/// A panel is parsed at most once per path; repeated [`load`](Self::load)
/// calls return the same shared panel without touching the file again.
/// There is no implicit invalidation: if the underlying file changes, the
/// caller drops the stale entry with [`invalidate`](Self::invalidate).
#[derive(Debug, Default)]
pub struct PanelCache {
    panels: HashMap<PathBuf, Arc<BetaPanel>>,
}

impl PanelCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a panel, reusing a previously parsed one for the same path.
    ///
    /// # Errors
    ///
    /// Propagates [`BetaPanel::from_path`] errors; a failed load caches
    /// nothing, so the next call retries the parse.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<BetaPanel>> {
        let path = path.as_ref();
        if let Some(panel) = self.panels.get(path) {
            return Ok(Arc::clone(panel));
        }
        let panel = Arc::new(BetaPanel::from_path(path)?);
        self.panels.insert(path.to_path_buf(), Arc::clone(&panel));
        Ok(panel)
    }

    /// Drop the cached panel for a path, forcing the next load to re-parse.
    ///
    /// Returns whether an entry was present.
    pub fn invalidate<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.panels.remove(path.as_ref()).is_some()
    }

    /// Drop all cached panels.
    pub fn clear(&mut self) {
        self.panels.clear();
    }

    /// Number of cached panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
