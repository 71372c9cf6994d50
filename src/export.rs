//! The export pass: flattens a project snapshot plus the action catalog into
//! one [`FlatGameModel`].
//!
//! The pass is a single-threaded, synchronous pure transform. It performs no
//! I/O, never fails, and absorbs every per-entity problem locally: a dangling
//! reference becomes its field's sentinel, an action without a resolvable
//! definition is dropped from the output with one diagnostic line. The
//! action-type table is always written first, since everything downstream needs
//! its definition→index map.

use std::collections::HashMap;

use crate::catalog::{ActionCatalog, DefId};
use crate::log::LogSink;
use crate::model::{
    ActionRecord, ActionTypeDescriptor, ArgumentRecord, EventRecord, FlatGameModel, ObjectRecord,
    ScriptRecord, NO_PARENT, NO_RESOURCE,
};
use crate::resources::{
    event_group_name, ActionInstance, Argument, Event, ObjectResource, Project, COLLISION_GROUP,
};

/// Flatten `project` against `catalog`. Both are borrowed read-only for the
/// duration of the call; the returned model is owned by the caller.
pub fn export(project: &Project, catalog: &ActionCatalog, log: &dyn LogSink) -> FlatGameModel {
    Exporter {
        project,
        catalog,
        log,
        type_index: HashMap::new(),
    }
    .run()
}

struct Exporter<'a> {
    project: &'a Project,
    catalog: &'a ActionCatalog,
    log: &'a dyn LogSink,
    /// Definition handle → position in the action-type table. Fresh per
    /// export, discarded afterwards.
    type_index: HashMap<DefId, usize>,
}

impl<'a> Exporter<'a> {
    fn run(mut self) -> FlatGameModel {
        let action_types = self.write_action_types();
        FlatGameModel {
            version: self.project.format_version.unwrap_or(-1),
            name: self
                .project
                .location
                .clone()
                .unwrap_or_else(|| "<untitled>".to_string()),
            action_types,
            scripts: self.write_scripts(),
            objects: self.write_objects(),
        }
    }

    /// One descriptor per definition, in catalog-library-then-in-library
    /// order. Keyed by definition handle, never by the `id` field; ids may
    /// collide across libraries and must not be merged.
    fn write_action_types(&mut self) -> Vec<ActionTypeDescriptor> {
        let mut out = Vec::new();
        for library in self.catalog.libraries() {
            for entry in library.entries() {
                self.type_index.insert(entry.def_id, out.len());
                let def = &entry.def;
                out.push(ActionTypeDescriptor {
                    id: def.id,
                    parent: def.parent_id,
                    kind: def.kind,
                    question: def.question,
                    relative: def.allow_relative,
                    exec: def.exec,
                    code: def.exec_code.clone(),
                });
            }
        }
        out
    }

    fn write_scripts(&self) -> Vec<ScriptRecord> {
        self.project
            .scripts
            .iter()
            .map(|script| ScriptRecord {
                id: script.id,
                name: script.name.clone(),
                code: script.code.clone(),
            })
            .collect()
    }

    fn write_objects(&self) -> Vec<ObjectRecord> {
        self.project
            .objects
            .iter()
            .map(|object| ObjectRecord {
                id: object.id(),
                name: object.name.clone(),
                sprite: object.sprite.resolve(NO_RESOURCE),
                mask: object.mask.resolve(NO_RESOURCE),
                // No parent at all is NO_PARENT; a parent reference that no
                // longer resolves is NO_RESOURCE, keeping the cases apart.
                parent: if object.parent.is_set() {
                    object.parent.resolve(NO_RESOURCE)
                } else {
                    NO_PARENT
                },
                solid: object.solid,
                visible: object.visible,
                persistent: object.persistent,
                depth: object.depth,
                events: self.write_events(object),
            })
            .collect()
    }

    fn write_events(&self, object: &ObjectResource) -> Vec<EventRecord> {
        let mut out = Vec::new();
        for (main_id, group) in object.event_groups.iter().enumerate() {
            for event in &group.events {
                // Collision events carry the resolved partner id in sub_id;
                // the nominal sub-id is meaningless there.
                let sub_id = if main_id == COLLISION_GROUP {
                    event.other.resolve(NO_RESOURCE)
                } else {
                    event.sub_id
                };
                out.push(EventRecord {
                    main_id: main_id as u32,
                    sub_id,
                    actions: self.write_actions(object, main_id, event),
                });
            }
        }
        out
    }

    /// Surviving actions keep their original relative order; an action whose
    /// definition the catalog does not know is omitted, not nulled.
    fn write_actions(
        &self,
        object: &ObjectResource,
        main_id: usize,
        event: &Event,
    ) -> Vec<ActionRecord> {
        let mut out = Vec::new();
        for action in &event.actions {
            let found = action
                .def
                .and_then(|def_id| self.type_index.get(&def_id).copied());
            let type_index = match found {
                Some(index) => index,
                None => {
                    self.log_unsupported(object, main_id, action);
                    continue;
                }
            };
            out.push(ActionRecord {
                type_index,
                relative: action.relative,
                inv: action.negated,
                target: action.target.resolve(NO_RESOURCE),
                args: self.write_arguments(&action.arguments),
            });
        }
        out
    }

    fn write_arguments(&self, arguments: &[Argument]) -> Vec<ArgumentRecord> {
        arguments
            .iter()
            .map(|argument| ArgumentRecord {
                kind: argument.kind,
                val: argument.value.clone(),
                resource: argument.resource.resolve(NO_RESOURCE),
            })
            .collect()
    }

    fn log_unsupported(&self, object: &ObjectResource, main_id: usize, action: &ActionInstance) {
        let reason = if action.def.is_some() {
            "unknown definition"
        } else {
            "no definition"
        };
        self.log.append(&format!(
            "skipping unsupported action ({}) in {} {} event\n",
            reason,
            object.name,
            event_group_name(main_id)
        ));
    }
}
