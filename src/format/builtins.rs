//! Built-in node kinds and value kinds.
//!
//! The type-index fields of the format are a single byte with a split range:
//! low values index into the document's own tables (node paths or value-type
//! names), while values at or above a reserved threshold select a member of
//! one of two fixed enumerations baked into the compiler. The enumerations
//! count down from `0xFF`, so the threshold for each is `0xFF - COUNT + 1`
//! and the two ranges can never overlap.
//!
//! The decoder stores the raw byte on [`crate::format::instance::Instance`]
//! and [`crate::format::socket::Socket`] and resolves it on demand through
//! [`NodeTypeRef::from_raw`] and [`ValueTypeRef::from_raw`]. Whether a
//! document-table index is actually in range for the document's tables is
//! deliberately not checked here; that is left to consumers.

use strum::{EnumCount, FromRepr, IntoStaticStr};

/// Nodes whose prototype is pre-defined within the compiler.
///
/// Raw instance type bytes at or above [`BuiltinNodeKind::START`] denote one
/// of these instead of an index into the document's node-path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum BuiltinNodeKind {
    /// `builtin:port`
    #[strum(serialize = "builtin:port")]
    Port = 0xFF,
    /// `builtin:settings`
    #[strum(serialize = "builtin:settings")]
    Settings = 0xFE,
    /// `builtin:path`
    #[strum(serialize = "builtin:path")]
    Path = 0xFD,
    /// `builtin:bytes`
    #[strum(serialize = "builtin:bytes")]
    Bytes = 0xFC,
    /// `builtin:join`
    #[strum(serialize = "builtin:join")]
    Join = 0xFB,
    /// `builtin:option`
    #[strum(serialize = "builtin:option")]
    Option = 0xFA,
    /// `builtin:condition`
    #[strum(serialize = "builtin:condition")]
    Condition = 0xF9,
    /// `builtin:format`
    #[strum(serialize = "builtin:format")]
    Format = 0xF8,
    /// `builtin:type`
    #[strum(serialize = "builtin:type")]
    Type = 0xF7,
    /// `builtin:apply`
    #[strum(serialize = "builtin:apply")]
    Apply = 0xF6,
    /// `builtin:size`
    #[strum(serialize = "builtin:size")]
    Size = 0xF5,
    /// `builtin:file`
    #[strum(serialize = "builtin:file")]
    File = 0xF4,
    /// `builtin:reverse`
    #[strum(serialize = "builtin:reverse")]
    Reverse = 0xF3,
    /// `builtin:value`
    #[strum(serialize = "builtin:value")]
    Value = 0xF2,
    /// `builtin:math`
    #[strum(serialize = "builtin:math")]
    Math = 0xF1,
    /// `builtin:repeat`
    #[strum(serialize = "builtin:repeat")]
    Repeat = 0xF0,
    /// `builtin:time`
    #[strum(serialize = "builtin:time")]
    Time = 0xEF,
    /// `builtin:split`
    #[strum(serialize = "builtin:split")]
    Split = 0xEE,
    /// `builtin:collect`
    #[strum(serialize = "builtin:collect")]
    Collect = 0xED,
}

impl BuiltinNodeKind {
    /// Lowest raw type byte reserved for built-in node kinds.
    pub const START: u8 = 0xFF - (Self::COUNT as u8) + 1;

    /// The `builtin:`-prefixed display name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Value types that built-in nodes output.
///
/// Raw value-type bytes at or above [`BuiltinValueKind::START`] denote one of
/// these instead of an index into the document's value-type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum BuiltinValueKind {
    /// `builtin-type:none`
    #[strum(serialize = "builtin-type:none")]
    None = 0xFF,
    /// `builtin-type:any`
    #[strum(serialize = "builtin-type:any")]
    Any = 0xFE,
    /// `builtin-type:repetition`
    #[strum(serialize = "builtin-type:repetition")]
    Repetition = 0xFD,
    /// `builtin-type:settings`
    #[strum(serialize = "builtin-type:settings")]
    Settings = 0xFC,
    /// `builtin-type:option then`
    #[strum(serialize = "builtin-type:option then")]
    OptionThen = 0xFB,
    /// `builtin-type:option when`
    #[strum(serialize = "builtin-type:option when")]
    OptionWhen = 0xFA,
    /// `builtin-type:selection`
    #[strum(serialize = "builtin-type:selection")]
    Selection = 0xF9,
    /// `builtin-type:bytes`
    #[strum(serialize = "builtin-type:bytes")]
    Bytes = 0xF8,
    /// `builtin-type:truth`
    #[strum(serialize = "builtin-type:truth")]
    Truth = 0xF7,
    /// `builtin-type:number`
    #[strum(serialize = "builtin-type:number")]
    Number = 0xF6,
    /// `builtin-type:text`
    #[strum(serialize = "builtin-type:text")]
    Text = 0xF5,
    /// `builtin-type:repetitive selection`
    #[strum(serialize = "builtin-type:repetitive selection")]
    RepetitiveSelection = 0xF4,
    /// `builtin-type:repetitive bytes`
    #[strum(serialize = "builtin-type:repetitive bytes")]
    RepetitiveBytes = 0xF3,
    /// `builtin-type:repetitive truth`
    #[strum(serialize = "builtin-type:repetitive truth")]
    RepetitiveTruth = 0xF2,
    /// `builtin-type:repetitive number`
    #[strum(serialize = "builtin-type:repetitive number")]
    RepetitiveNumber = 0xF1,
    /// `builtin-type:repetitive text`
    #[strum(serialize = "builtin-type:repetitive text")]
    RepetitiveText = 0xF0,
    /// `builtin-type:repetitive port default`
    #[strum(serialize = "builtin-type:repetitive port default")]
    RepetitivePortDefault = 0xEF,
    /// `builtin-type:repetitive port value`
    #[strum(serialize = "builtin-type:repetitive port value")]
    RepetitivePortValue = 0xEE,
    /// `builtin-type:port default`
    #[strum(serialize = "builtin-type:port default")]
    PortDefault = 0xED,
    /// `builtin-type:port channel`
    #[strum(serialize = "builtin-type:port channel")]
    PortChannel = 0xEC,
    /// `builtin-type:port value`
    #[strum(serialize = "builtin-type:port value")]
    PortValue = 0xEB,
    /// `builtin-type:path module`
    #[strum(serialize = "builtin-type:path module")]
    PathModule = 0xEA,
    /// `builtin-type:path absolute`
    #[strum(serialize = "builtin-type:path absolute")]
    PathAbsolute = 0xE9,
    /// `builtin-type:root output`
    #[strum(serialize = "builtin-type:root output")]
    RootOutput = 0xE8,
    /// `builtin-type:root input`
    #[strum(serialize = "builtin-type:root input")]
    RootInput = 0xE7,
}

impl BuiltinValueKind {
    /// Lowest raw value-type byte reserved for built-in value kinds.
    pub const START: u8 = 0xFF - (Self::COUNT as u8) + 1;

    /// The `builtin-type:`-prefixed display name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Resolution of an instance's raw type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTypeRef {
    /// Index into the document's node-path table.
    Path(usize),
    /// One of the compiler's built-in node kinds.
    Builtin(BuiltinNodeKind),
}

impl NodeTypeRef {
    /// Classify a raw type byte. Bytes below [`BuiltinNodeKind::START`] are
    /// table indices; the rest map onto the built-in enumeration.
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        match BuiltinNodeKind::from_repr(raw) {
            Some(kind) => NodeTypeRef::Builtin(kind),
            None => NodeTypeRef::Path(usize::from(raw)),
        }
    }
}

/// Resolution of a socket's raw value-type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTypeRef {
    /// Index into the document's value-type table.
    Table(usize),
    /// One of the compiler's built-in value kinds.
    Builtin(BuiltinValueKind),
}

impl ValueTypeRef {
    /// Classify a raw value-type byte. Bytes below [`BuiltinValueKind::START`]
    /// are table indices; the rest map onto the built-in enumeration.
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        match BuiltinValueKind::from_repr(raw) {
            Some(kind) => ValueTypeRef::Builtin(kind),
            None => ValueTypeRef::Table(usize::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_thresholds() {
        assert_eq!(BuiltinNodeKind::COUNT, 19);
        assert_eq!(BuiltinNodeKind::START, 0xED);
        assert_eq!(BuiltinValueKind::COUNT, 25);
        assert_eq!(BuiltinValueKind::START, 0xE7);
    }

    #[test]
    fn node_type_threshold_boundary() {
        // One below the threshold: a document-table index.
        assert_eq!(
            NodeTypeRef::from_raw(BuiltinNodeKind::START - 1),
            NodeTypeRef::Path(0xEC)
        );
        // At the threshold and above: built-ins.
        assert_eq!(
            NodeTypeRef::from_raw(BuiltinNodeKind::START),
            NodeTypeRef::Builtin(BuiltinNodeKind::Collect)
        );
        assert_eq!(
            NodeTypeRef::from_raw(0xFF),
            NodeTypeRef::Builtin(BuiltinNodeKind::Port)
        );
    }

    #[test]
    fn value_type_threshold_boundary() {
        assert_eq!(
            ValueTypeRef::from_raw(BuiltinValueKind::START - 1),
            ValueTypeRef::Table(0xE6)
        );
        assert_eq!(
            ValueTypeRef::from_raw(BuiltinValueKind::START),
            ValueTypeRef::Builtin(BuiltinValueKind::RootInput)
        );
        assert_eq!(
            ValueTypeRef::from_raw(0xFF),
            ValueTypeRef::Builtin(BuiltinValueKind::None)
        );
    }

    #[test]
    fn every_reserved_byte_resolves_to_a_builtin() {
        for raw in BuiltinNodeKind::START..=0xFF {
            assert!(BuiltinNodeKind::from_repr(raw).is_some(), "gap at {raw:#x}");
        }
        for raw in BuiltinValueKind::START..=0xFF {
            assert!(
                BuiltinValueKind::from_repr(raw).is_some(),
                "gap at {raw:#x}"
            );
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(BuiltinNodeKind::Port.name(), "builtin:port");
        assert_eq!(BuiltinNodeKind::Collect.name(), "builtin:collect");
        assert_eq!(BuiltinValueKind::None.name(), "builtin-type:none");
        assert_eq!(
            BuiltinValueKind::RepetitivePortDefault.name(),
            "builtin-type:repetitive port default"
        );
        assert_eq!(BuiltinValueKind::RootInput.name(), "builtin-type:root input");
    }
}
