//! Read-only resource graph: the host's in-memory project model.
//!
//! The exporter borrows a [`Project`] for the duration of one call and never
//! mutates it. References between resources are weak handles, so a deleted
//! resource leaves a dangling reference behind rather than keeping the entry
//! alive. Resolution never fails; absent and dangling references substitute
//! the caller's sentinel.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use lazy_static::lazy_static;

use crate::catalog::DefId;
use crate::model::ArgumentKind;

// ═══════════════════════════════════════════════════════════════════════════════
// EVENT GROUPS
// ═══════════════════════════════════════════════════════════════════════════════

/// Every object carries this fixed set of event groups; a group's position is
/// its main-id.
pub const EVENT_GROUP_COUNT: usize = 12;

/// The group whose events carry a resolved "other object" id in place of a
/// nominal sub-id.
pub const COLLISION_GROUP: usize = 4;

lazy_static! {
    static ref EVENT_GROUP_NAMES: HashMap<usize, &'static str> = {
        let mut m = HashMap::new();
        m.insert(0, "create");
        m.insert(1, "destroy");
        m.insert(2, "alarm");
        m.insert(3, "step");
        m.insert(4, "collision");
        m.insert(5, "keyboard");
        m.insert(6, "mouse");
        m.insert(7, "other");
        m.insert(8, "draw");
        m.insert(9, "key press");
        m.insert(10, "key release");
        m.insert(11, "trigger");
        m
    };
}

pub fn event_group_name(main_id: usize) -> &'static str {
    EVENT_GROUP_NAMES.get(&main_id).copied().unwrap_or("unknown")
}

// ═══════════════════════════════════════════════════════════════════════════════
// REFERENCES
// ═══════════════════════════════════════════════════════════════════════════════

/// Identity of a referencable resource. Shared ownership lives with the host;
/// references hold it weakly so a deleted resource leaves danglers, not leaks.
#[derive(Debug)]
pub struct ResourceEntry {
    pub id: i32,
}

pub type ResourceHandle = Arc<ResourceEntry>;

pub fn resource_entry(id: i32) -> ResourceHandle {
    Arc::new(ResourceEntry { id })
}

/// A possibly-absent, possibly-dangling reference to a resource.
#[derive(Debug, Clone, Default)]
pub struct ResourceRef(Option<Weak<ResourceEntry>>);

impl ResourceRef {
    pub fn none() -> Self {
        ResourceRef(None)
    }

    pub fn to(handle: &ResourceHandle) -> Self {
        ResourceRef(Some(Arc::downgrade(handle)))
    }

    /// Whether a target was ever assigned. True for dangling references.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The referenced entity's id if it is still live, otherwise `sentinel`.
    /// Total: absent and dangling references are steady state, not errors.
    pub fn resolve(&self, sentinel: i32) -> i32 {
        match &self.0 {
            Some(weak) => weak.upgrade().map(|entry| entry.id).unwrap_or(sentinel),
            None => sentinel,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROJECT MODEL
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct ScriptResource {
    pub id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct Argument {
    pub kind: ArgumentKind,
    pub value: String,
    pub resource: ResourceRef,
}

#[derive(Debug, Clone)]
pub struct ActionInstance {
    /// The catalog definition this action instantiates. `None`, or a handle
    /// the current catalog no longer knows, makes the action unsupported.
    pub def: Option<DefId>,
    pub relative: bool,
    pub negated: bool,
    /// "Applies to" object. Absent means self.
    pub target: ResourceRef,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone)]
pub struct Event {
    pub sub_id: i32,
    /// Collision partner; only meaningful for events in the collision group.
    pub other: ResourceRef,
    pub actions: Vec<ActionInstance>,
}

#[derive(Debug, Clone, Default)]
pub struct EventGroup {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone)]
pub struct ObjectResource {
    handle: ResourceHandle,
    pub name: String,
    pub sprite: ResourceRef,
    pub mask: ResourceRef,
    pub parent: ResourceRef,
    pub solid: bool,
    pub visible: bool,
    pub persistent: bool,
    pub depth: i32,
    /// Always [`EVENT_GROUP_COUNT`] groups, indexed by main-id.
    pub event_groups: Vec<EventGroup>,
}

impl ObjectResource {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        ObjectResource {
            handle: resource_entry(id),
            name: name.into(),
            sprite: ResourceRef::none(),
            mask: ResourceRef::none(),
            parent: ResourceRef::none(),
            solid: false,
            visible: true,
            persistent: false,
            depth: 0,
            event_groups: vec![EventGroup::default(); EVENT_GROUP_COUNT],
        }
    }

    pub fn id(&self) -> i32 {
        self.handle.id
    }

    /// The handle other resources use to reference this object (as a parent
    /// or collision partner).
    pub fn handle(&self) -> &ResourceHandle {
        &self.handle
    }
}

/// Snapshot of a project. The host must freeze edits before handing it to an
/// export call; the exporter assumes exclusive read access for the duration.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub format_version: Option<i32>,
    pub location: Option<String>,
    pub scripts: Vec<ScriptResource>,
    pub objects: Vec<ObjectResource>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }
}
