//! Flat game model: the reference-resolved IR handed to the native compiler.
//!
//! Every list in the model crosses the boundary together with an explicit
//! count field. Counts are never stored; they are derived from the vector
//! actually produced at serialization time, so a declared count can never
//! disagree with the array it accompanies.
//!
//! Serialized field names follow the consumer's struct layout (`nscripts`,
//! `nactions`, `main_id`, `inv`, ...), so the handoff form is recognizable
//! on the native side.

use serde::ser::{Serialize, SerializeStruct, Serializer};

// ═══════════════════════════════════════════════════════════════════════════════
// SENTINELS
// ═══════════════════════════════════════════════════════════════════════════════

/// Stands in for "no particular resource" wherever a reference is absent or
/// no longer resolves.
pub const NO_RESOURCE: i32 = -1;

/// Reserved solely for "object has no parent". A dangling parent reference
/// resolves to [`NO_RESOURCE`] instead, so the two cases stay distinguishable.
pub const NO_PARENT: i32 = -100;

// Well-known `target` values understood by the consumer.
pub const TARGET_SELF: i32 = -1;
pub const TARGET_OTHER: i32 = -2;
pub const TARGET_ALL: i32 = -3;
pub const TARGET_NOONE: i32 = -4;
pub const TARGET_GLOBAL: i32 = -5;
pub const TARGET_LOCAL: i32 = -6;

// ═══════════════════════════════════════════════════════════════════════════════
// VOCABULARY ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Behavioral category of an action definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Normal,
    Begin,
    End,
    Else,
    Exit,
    Repeat,
    Variable,
    Code,
    Placeholder,
    Separator,
    Label,
}

/// How an action definition executes on the native side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecType {
    None,
    Function,
    Code,
}

/// Kind of an action argument, which tells the consumer how to interpret the
/// raw value string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    Expr,
    String,
    Both,
    Bool,
    Menu,
    Color,
    FontStr,
    Sprite,
    Sound,
    Background,
    Path,
    Script,
    Object,
    Room,
    Font,
    Timeline,
}

// The consumer reads these as plain integers, in declaration order.
impl Serialize for ActionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*self as u32)
    }
}

impl Serialize for ExecType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*self as u32)
    }
}

impl Serialize for ArgumentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*self as u32)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Flattened form of one action definition from the catalog.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActionTypeDescriptor {
    pub id: i32,
    pub parent: i32,
    pub kind: ActionKind,
    pub question: bool,
    /// Whether instances of this action may be applied relatively.
    pub relative: bool,
    pub exec: ExecType,
    pub code: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ScriptRecord {
    pub id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ArgumentRecord {
    pub kind: ArgumentKind,
    pub val: String,
    pub resource: i32,
}

#[derive(Debug, Clone)]
pub struct ActionRecord {
    /// Index into the action-type table of [`FlatGameModel`].
    pub type_index: usize,
    pub relative: bool,
    /// The action's condition is negated ("NOT").
    pub inv: bool,
    pub target: i32,
    pub args: Vec<ArgumentRecord>,
}

#[derive(Debug, Clone)]
pub struct EventRecord {
    /// Position of the owning event group among the object's groups.
    pub main_id: u32,
    /// Nominal sub-id, except in the collision group where it carries the
    /// resolved id of the "other" object.
    pub sub_id: i32,
    pub actions: Vec<ActionRecord>,
}

#[derive(Debug, Clone)]
pub struct ObjectRecord {
    pub id: i32,
    pub name: String,
    pub sprite: i32,
    pub mask: i32,
    pub parent: i32,
    pub solid: bool,
    pub visible: bool,
    pub persistent: bool,
    pub depth: i32,
    pub events: Vec<EventRecord>,
}

/// The aggregate IR: version/name metadata plus the flattened tables.
///
/// Owned exclusively by the export call that produced it; the source graph
/// and catalog are not retained.
#[derive(Debug, Clone)]
pub struct FlatGameModel {
    pub version: i32,
    pub name: String,
    pub action_types: Vec<ActionTypeDescriptor>,
    pub scripts: Vec<ScriptRecord>,
    pub objects: Vec<ObjectRecord>,
}

impl Serialize for ActionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("action", 6)?;
        st.serialize_field("type", &self.type_index)?;
        st.serialize_field("relative", &self.relative)?;
        st.serialize_field("inv", &self.inv)?;
        st.serialize_field("target", &self.target)?;
        st.serialize_field("nargs", &self.args.len())?;
        st.serialize_field("args", &self.args)?;
        st.end()
    }
}

impl Serialize for EventRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("event", 4)?;
        st.serialize_field("main_id", &self.main_id)?;
        st.serialize_field("sub_id", &self.sub_id)?;
        st.serialize_field("nactions", &self.actions.len())?;
        st.serialize_field("actions", &self.actions)?;
        st.end()
    }
}

impl Serialize for ObjectRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("object", 11)?;
        st.serialize_field("id", &self.id)?;
        st.serialize_field("name", &self.name)?;
        st.serialize_field("sprite", &self.sprite)?;
        st.serialize_field("mask", &self.mask)?;
        st.serialize_field("parent", &self.parent)?;
        st.serialize_field("solid", &self.solid)?;
        st.serialize_field("visible", &self.visible)?;
        st.serialize_field("persistent", &self.persistent)?;
        st.serialize_field("depth", &self.depth)?;
        st.serialize_field("nevents", &self.events.len())?;
        st.serialize_field("events", &self.events)?;
        st.end()
    }
}

impl Serialize for FlatGameModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("game", 8)?;
        st.serialize_field("version", &self.version)?;
        st.serialize_field("name", &self.name)?;
        st.serialize_field("nactions", &self.action_types.len())?;
        st.serialize_field("actions", &self.action_types)?;
        st.serialize_field("nscripts", &self.scripts.len())?;
        st.serialize_field("scripts", &self.scripts)?;
        st.serialize_field("nobjects", &self.objects.len())?;
        st.serialize_field("objects", &self.objects)?;
        st.end()
    }
}
