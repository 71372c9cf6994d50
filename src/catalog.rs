//! Action catalog: the process-wide registry of action definitions.
//!
//! The host builds one catalog during startup and treats it as immutable for
//! the rest of the process. Each export call borrows it read-only; nothing in
//! this crate mutates or retains it.
//!
//! Every definition gets a [`DefId`] the moment it enters the catalog. That
//! handle, not the definition's `id` field, is what actions reference and
//! what the exporter keys its descriptor table on; `id` values may collide
//! across libraries.

use crate::model::{ActionKind, ExecType};

/// Stable handle to one definition within a catalog. Unique across the whole
/// catalog, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefId(u32);

/// Handle to one library within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryId(usize);

/// One action definition as supplied by the host's library loader.
#[derive(Debug, Clone)]
pub struct ActionDefinition {
    pub id: i32,
    pub parent_id: i32,
    pub kind: ActionKind,
    pub question: bool,
    pub allow_relative: bool,
    pub exec: ExecType,
    pub exec_code: String,
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub def_id: DefId,
    pub def: ActionDefinition,
}

#[derive(Debug, Clone)]
pub struct ActionLibrary {
    pub name: String,
    entries: Vec<CatalogEntry>,
}

impl ActionLibrary {
    /// Definitions in library order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    libraries: Vec<ActionLibrary>,
    next_def: u32,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_library(&mut self, name: impl Into<String>) -> LibraryId {
        self.libraries.push(ActionLibrary {
            name: name.into(),
            entries: Vec::new(),
        });
        LibraryId(self.libraries.len() - 1)
    }

    pub fn add_definition(&mut self, library: LibraryId, def: ActionDefinition) -> DefId {
        let def_id = DefId(self.next_def);
        self.next_def += 1;
        self.libraries[library.0]
            .entries
            .push(CatalogEntry { def_id, def });
        def_id
    }

    /// Libraries in load order.
    pub fn libraries(&self) -> &[ActionLibrary] {
        &self.libraries
    }
}
