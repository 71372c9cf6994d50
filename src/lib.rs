//! # Game Export (Flat IR for the Native Compiler)
//!
//! Flattens an in-memory game project (scripts, objects, events, actions,
//! arguments) plus the catalog of action definitions into the
//! reference-resolved [`FlatGameModel`] the native compiler consumes.
//!
//! ## Export Invariants
//!
//! 1. **Counts match arrays**: every serialized count field is derived from
//!    the vector actually emitted, including per-event action counts after
//!    unsupported actions were skipped.
//!
//! 2. **Action types come first**: the action-type table and its
//!    definition→index map are built before any action is flattened. The map
//!    is keyed by definition handle, never by the definition's `id` field.
//!
//! 3. **References never fail**: an absent or dangling reference resolves to
//!    its field's sentinel (-1 for "no resource"; -100 only for "object has
//!    no parent").
//!
//! 4. **Collision sub-ids are overridden**: events in the collision group
//!    carry the resolved "other object" id, never their nominal sub-id.
//!
//! 5. **Unsupported actions are omitted**: an action without a resolvable
//!    definition is dropped with one diagnostic line; the surviving actions
//!    keep their relative order and export continues.
//!
//! 6. **The pass is pure**: no I/O, no mutation of the project or catalog,
//!    no state carried between exports.

mod catalog;
mod driver;
mod export;
mod log;
mod model;
mod resources;

pub use catalog::{ActionCatalog, ActionDefinition, ActionLibrary, CatalogEntry, DefId, LibraryId};
pub use driver::{build, BuildError, NativeCompiler};
pub use export::export;
pub use log::{LogSink, MemoryLog, NullLog};
pub use model::{
    ActionKind, ActionRecord, ActionTypeDescriptor, ArgumentKind, ArgumentRecord, EventRecord,
    ExecType, FlatGameModel, ObjectRecord, ScriptRecord, NO_PARENT, NO_RESOURCE, TARGET_ALL,
    TARGET_GLOBAL, TARGET_LOCAL, TARGET_NOONE, TARGET_OTHER, TARGET_SELF,
};
pub use resources::{
    event_group_name, resource_entry, ActionInstance, Argument, Event, EventGroup, ObjectResource,
    Project, ResourceEntry, ResourceHandle, ResourceRef, ScriptResource, COLLISION_GROUP,
    EVENT_GROUP_COUNT,
};

#[cfg(test)]
mod model_tests;
