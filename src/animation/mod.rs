//! Animation archive model (RLAN)
//!
//! An animation archive carries an optional tag-info section naming the
//! animation and the pane groups it binds to, and an optional info section
//! holding per-pane and per-material keyframe tracks.

use crate::document::ArchiveHeader;
use crate::notification::NotificationCollection;
use std::fmt;

/// Interpolation used between the keys of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveType {
    Constant,
    #[default]
    Step,
    Hermite,
    /// A value this library does not know; keys use the step layout
    Other(u8),
}

impl CurveType {
    /// Whether keys carry a slope (`frame, value, slope` as floats)
    pub fn is_hermite(self) -> bool {
        self == CurveType::Hermite
    }
}

impl From<u8> for CurveType {
    fn from(value: u8) -> Self {
        match value {
            0 => CurveType::Constant,
            1 => CurveType::Step,
            2 => CurveType::Hermite,
            other => CurveType::Other(other),
        }
    }
}

impl From<CurveType> for u8 {
    fn from(curve: CurveType) -> u8 {
        match curve {
            CurveType::Constant => 0,
            CurveType::Step => 1,
            CurveType::Hermite => 2,
            CurveType::Other(v) => v,
        }
    }
}

/// What an animation entry drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationTarget {
    #[default]
    Pane,
    Material,
    Other(u8),
}

impl AnimationTarget {
    /// Raw target whose tags are preceded by an extra word
    pub const PREFIXED_TAGS: u8 = 2;

    /// Whether each tag of an entry with this target starts with an
    /// extra u32
    pub fn has_tag_prefix(self) -> bool {
        u8::from(self) == Self::PREFIXED_TAGS
    }
}

impl From<u8> for AnimationTarget {
    fn from(value: u8) -> Self {
        match value {
            0 => AnimationTarget::Pane,
            1 => AnimationTarget::Material,
            other => AnimationTarget::Other(other),
        }
    }
}

impl From<AnimationTarget> for u8 {
    fn from(target: AnimationTarget) -> u8 {
        match target {
            AnimationTarget::Pane => 0,
            AnimationTarget::Material => 1,
            AnimationTarget::Other(v) => v,
        }
    }
}

// ---------------------------------------------------------------
// Keyframes
// ---------------------------------------------------------------

/// Key of a Hermite curve
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HermiteKey {
    pub frame: f32,
    pub value: f32,
    pub slope: f32,
}

/// Key of a constant or step curve
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepKey {
    pub frame: f32,
    pub value: u16,
}

/// The keys of one track; the layout follows the track's curve type
#[derive(Debug, Clone, PartialEq)]
pub enum KeyFrames {
    Hermite(Vec<HermiteKey>),
    Step(Vec<StepKey>),
}

impl KeyFrames {
    /// Empty key list matching `curve`
    pub fn for_curve(curve: CurveType) -> Self {
        if curve.is_hermite() {
            KeyFrames::Hermite(Vec::new())
        } else {
            KeyFrames::Step(Vec::new())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            KeyFrames::Hermite(keys) => keys.len(),
            KeyFrames::Step(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this key list uses the layout `curve` requires
    pub fn matches(&self, curve: CurveType) -> bool {
        matches!(self, KeyFrames::Hermite(_)) == curve.is_hermite()
    }
}

// ---------------------------------------------------------------
// Tracks, tags, entries
// ---------------------------------------------------------------

/// One animated parameter
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTrack {
    /// Index of the animated element (texture map, color register, ...)
    pub index: u8,
    /// Parameter within the element
    pub target: u8,
    pub curve: CurveType,
    pub keys: KeyFrames,
}

impl AnimationTrack {
    pub fn new(index: u8, target: u8, curve: CurveType) -> Self {
        AnimationTrack {
            index,
            target,
            curve,
            keys: KeyFrames::for_curve(curve),
        }
    }

    pub fn with_hermite_keys(mut self, keys: impl IntoIterator<Item = HermiteKey>) -> Self {
        self.curve = CurveType::Hermite;
        self.keys = KeyFrames::Hermite(keys.into_iter().collect());
        self
    }

    pub fn with_step_keys(mut self, keys: impl IntoIterator<Item = StepKey>) -> Self {
        if self.curve.is_hermite() {
            self.curve = CurveType::Step;
        }
        self.keys = KeyFrames::Step(keys.into_iter().collect());
        self
    }
}

/// A group of tracks of one kind, e.g. `RLPA` (pane SRT) or `RLMC`
/// (material color)
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTag {
    /// Four-character kind
    pub kind: String,
    /// Leading word present when the owning entry's target is prefixed
    pub unknown: Option<u32>,
    pub tracks: Vec<AnimationTrack>,
}

impl AnimationTag {
    pub const KIND_LEN: usize = 4;

    pub fn new(kind: impl Into<String>) -> Self {
        AnimationTag {
            kind: kind.into(),
            unknown: None,
            tracks: Vec::new(),
        }
    }

    pub fn with_track(mut self, track: AnimationTrack) -> Self {
        self.tracks.push(track);
        self
    }
}

/// Animation of one named pane or material
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEntry {
    pub name: String,
    pub target: AnimationTarget,
    pub tags: Vec<AnimationTag>,
}

impl AnimationEntry {
    pub const NAME_LEN: usize = 20;

    pub fn new(name: impl Into<String>, target: AnimationTarget) -> Self {
        AnimationEntry {
            name: name.into(),
            target,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: AnimationTag) -> Self {
        self.tags.push(tag);
        self
    }
}

// ---------------------------------------------------------------
// Sections
// ---------------------------------------------------------------

/// Animation name, frame range and bound groups (`pat1`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationTagInfo {
    pub order: u16,
    pub name: String,
    pub groups: Vec<String>,
    pub start_frame: i16,
    pub end_frame: i16,
    pub child_binding: bool,
    /// Bytes between the fixed fields and the name, kept as read
    pub extra: Vec<u8>,
}

impl AnimationTagInfo {
    pub const GROUP_NAME_LEN: usize = 20;
}

/// Frame count, textures and entries (`pai1`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationInfo {
    pub frame_size: u16,
    pub looping: bool,
    /// Texture names referenced by texture-pattern tracks
    pub textures: Vec<String>,
    pub entries: Vec<AnimationEntry>,
}

impl AnimationInfo {
    pub fn entry(&self, name: &str) -> Option<&AnimationEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// An in-memory animation archive
#[derive(Debug, Clone)]
pub struct AnimationDocument {
    pub header: ArchiveHeader,
    pub tag_info: Option<AnimationTagInfo>,
    pub info: Option<AnimationInfo>,
    /// Diagnostics collected while reading
    pub notifications: NotificationCollection,
}

impl AnimationDocument {
    /// Version written for new documents
    pub const DEFAULT_VERSION: u16 = 0x0008;

    pub fn new() -> Self {
        AnimationDocument {
            header: ArchiveHeader::new(Self::DEFAULT_VERSION),
            tag_info: None,
            info: None,
            notifications: NotificationCollection::new(),
        }
    }

    /// Total number of keys across all tracks
    pub fn key_count(&self) -> usize {
        self.info
            .iter()
            .flat_map(|info| &info.entries)
            .flat_map(|entry| &entry.tags)
            .flat_map(|tag| &tag.tracks)
            .map(|track| track.keys.len())
            .sum()
    }
}

impl Default for AnimationDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AnimationDocument {
    /// Structural equality; notifications are not compared
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.tag_info == other.tag_info && self.info == other.info
    }
}

impl fmt::Display for AnimationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.tag_info.as_ref().map_or("", |t| t.name.as_str());
        let entries = self.info.as_ref().map_or(0, |i| i.entries.len());
        write!(f, "animation '{}' ({} entries)", name, entries)
    }
}
