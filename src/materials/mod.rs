//! Materials and the document's material list

pub mod blend;
pub mod tev;
pub mod texture;

pub use blend::{AlphaCompare, AlphaFunction, AlphaOp, BlendFactor, BlendMode, BlendOp};
pub use tev::{ChannelControl, IndirectStage, SwapChannel, SwapMode, TevStage, TevSwapModeTable};
pub use texture::{TexCoordGen, TextureRef, TextureTransform, WrapMode};

use crate::types::{BitField, Color16, Color8, MaterialId};
use indexmap::IndexMap;

/// Packed material flags word.
///
/// Presence bits and counts of the optional material substructures. Bits
/// outside the known fields are kept as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaterialFlags(u32);

impl MaterialFlags {
    pub const MATERIAL_COLOR: BitField = BitField::new(4, 1);
    pub const CHANNEL_CONTROL: BitField = BitField::new(6, 1);
    pub const BLEND_MODE: BitField = BitField::new(7, 1);
    pub const ALPHA_COMPARE: BitField = BitField::new(8, 1);
    pub const TEV_STAGE_COUNT: BitField = BitField::new(9, 5);
    pub const INDIRECT_STAGE_COUNT: BitField = BitField::new(14, 3);
    pub const INDIRECT_TRANSFORM_COUNT: BitField = BitField::new(17, 2);
    pub const SWAP_TABLE: BitField = BitField::new(19, 1);
    pub const TEX_COORD_GEN_COUNT: BitField = BitField::new(20, 4);
    pub const TEXTURE_TRANSFORM_COUNT: BitField = BitField::new(24, 4);
    pub const TEXTURE_MAP_COUNT: BitField = BitField::new(28, 4);

    pub const fn from_bits(bits: u32) -> Self {
        MaterialFlags(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Value of a count field
    pub const fn count(&self, field: BitField) -> usize {
        field.get(self.0) as usize
    }

    pub const fn has(&self, field: BitField) -> bool {
        field.get_flag(self.0)
    }

    /// Replace a field; `None` if the value does not fit its width
    pub fn with_count(self, field: BitField, count: usize) -> Option<Self> {
        let value = u32::try_from(count).ok().filter(|v| *v <= field.max_value())?;
        Some(MaterialFlags(field.set(self.0, value)))
    }

    pub fn with_flag(self, field: BitField, value: bool) -> Self {
        MaterialFlags(field.set_flag(self.0, value))
    }

    /// Bits outside every known count and presence field
    pub fn unknown_bits(&self) -> u32 {
        const KNOWN: [BitField; 11] = [
            MaterialFlags::MATERIAL_COLOR,
            MaterialFlags::CHANNEL_CONTROL,
            MaterialFlags::BLEND_MODE,
            MaterialFlags::ALPHA_COMPARE,
            MaterialFlags::TEV_STAGE_COUNT,
            MaterialFlags::INDIRECT_STAGE_COUNT,
            MaterialFlags::INDIRECT_TRANSFORM_COUNT,
            MaterialFlags::SWAP_TABLE,
            MaterialFlags::TEX_COORD_GEN_COUNT,
            MaterialFlags::TEXTURE_TRANSFORM_COUNT,
            MaterialFlags::TEXTURE_MAP_COUNT,
        ];
        KNOWN.iter().fold(self.0, |bits, field| field.set(bits, 0))
    }

    pub fn texture_map_count(&self) -> usize {
        self.count(Self::TEXTURE_MAP_COUNT)
    }

    pub fn texture_transform_count(&self) -> usize {
        self.count(Self::TEXTURE_TRANSFORM_COUNT)
    }

    pub fn tex_coord_gen_count(&self) -> usize {
        self.count(Self::TEX_COORD_GEN_COUNT)
    }

    pub fn indirect_transform_count(&self) -> usize {
        self.count(Self::INDIRECT_TRANSFORM_COUNT)
    }

    pub fn indirect_stage_count(&self) -> usize {
        self.count(Self::INDIRECT_STAGE_COUNT)
    }

    pub fn tev_stage_count(&self) -> usize {
        self.count(Self::TEV_STAGE_COUNT)
    }

    pub fn has_channel_control(&self) -> bool {
        self.has(Self::CHANNEL_CONTROL)
    }

    pub fn has_material_color(&self) -> bool {
        self.has(Self::MATERIAL_COLOR)
    }

    pub fn has_swap_table(&self) -> bool {
        self.has(Self::SWAP_TABLE)
    }

    pub fn has_alpha_compare(&self) -> bool {
        self.has(Self::ALPHA_COMPARE)
    }

    pub fn has_blend_mode(&self) -> bool {
        self.has(Self::BLEND_MODE)
    }
}

/// A rendering-parameter record referenced by panes
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub black_color: Color16,
    pub white_color: Color16,
    pub color_register3: Color16,
    pub tev_colors: [Color8; 4],
    /// Flags word as last read; counts are refreshed from the
    /// sequences below on write
    pub flags: MaterialFlags,
    pub texture_maps: Vec<TextureRef>,
    pub texture_transforms: Vec<TextureTransform>,
    pub tex_coord_gens: Vec<TexCoordGen>,
    pub channel_control: Option<ChannelControl>,
    pub material_color: Option<Color8>,
    pub swap_table: Option<TevSwapModeTable>,
    pub indirect_transforms: Vec<TextureTransform>,
    pub indirect_stages: Vec<IndirectStage>,
    pub tev_stages: Vec<TevStage>,
    pub alpha_compare: Option<AlphaCompare>,
    pub blend_mode: Option<BlendMode>,
}

impl Material {
    /// Width of the on-disk name slot
    pub const NAME_LEN: usize = 20;

    pub fn new(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            black_color: Color16::new(0, 0, 0, 0),
            white_color: Color16::new(255, 255, 255, 255),
            color_register3: Color16::new(255, 255, 255, 255),
            tev_colors: [Color8::WHITE; 4],
            flags: MaterialFlags::default(),
            texture_maps: Vec::new(),
            texture_transforms: Vec::new(),
            tex_coord_gens: Vec::new(),
            channel_control: None,
            material_color: None,
            swap_table: None,
            indirect_transforms: Vec::new(),
            indirect_stages: Vec::new(),
            tev_stages: Vec::new(),
            alpha_compare: None,
            blend_mode: None,
        }
    }

    /// Bind a texture with a default transform and coordinate generator
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture_maps.push(TextureRef::new(texture));
        self.texture_transforms.push(TextureTransform::default());
        self.tex_coord_gens.push(TexCoordGen::default());
        self
    }

    /// The flags word describing this material's current contents.
    ///
    /// Bits outside the known fields are taken from `self.flags`. Returns
    /// the name of the first sequence that is too long for its field.
    pub fn packed_flags(&self) -> Result<MaterialFlags, &'static str> {
        let counts = [
            (MaterialFlags::TEXTURE_MAP_COUNT, self.texture_maps.len(), "texture maps"),
            (
                MaterialFlags::TEXTURE_TRANSFORM_COUNT,
                self.texture_transforms.len(),
                "texture transforms",
            ),
            (
                MaterialFlags::TEX_COORD_GEN_COUNT,
                self.tex_coord_gens.len(),
                "texture coordinate generators",
            ),
            (
                MaterialFlags::INDIRECT_TRANSFORM_COUNT,
                self.indirect_transforms.len(),
                "indirect transforms",
            ),
            (
                MaterialFlags::INDIRECT_STAGE_COUNT,
                self.indirect_stages.len(),
                "indirect stages",
            ),
            (MaterialFlags::TEV_STAGE_COUNT, self.tev_stages.len(), "TEV stages"),
        ];

        let mut flags = self.flags;
        for (field, count, what) in counts {
            flags = flags.with_count(field, count).ok_or(what)?;
        }

        Ok(flags
            .with_flag(MaterialFlags::CHANNEL_CONTROL, self.channel_control.is_some())
            .with_flag(MaterialFlags::MATERIAL_COLOR, self.material_color.is_some())
            .with_flag(MaterialFlags::SWAP_TABLE, self.swap_table.is_some())
            .with_flag(MaterialFlags::ALPHA_COMPARE, self.alpha_compare.is_some())
            .with_flag(MaterialFlags::BLEND_MODE, self.blend_mode.is_some()))
    }
}

impl PartialEq for Material {
    /// Counts and presence bits in `flags` are derived from the contents,
    /// so only the unknown flag bits take part in the comparison.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.black_color == other.black_color
            && self.white_color == other.white_color
            && self.color_register3 == other.color_register3
            && self.tev_colors == other.tev_colors
            && self.flags.unknown_bits() == other.flags.unknown_bits()
            && self.texture_maps == other.texture_maps
            && self.texture_transforms == other.texture_transforms
            && self.tex_coord_gens == other.tex_coord_gens
            && self.channel_control == other.channel_control
            && self.material_color == other.material_color
            && self.swap_table == other.swap_table
            && self.indirect_transforms == other.indirect_transforms
            && self.indirect_stages == other.indirect_stages
            && self.tev_stages == other.tev_stages
            && self.alpha_compare == other.alpha_compare
            && self.blend_mode == other.blend_mode
    }
}

/// Ordered material list addressed by stable [`MaterialId`]s.
///
/// The on-disk index of a material is its position in this list; panes
/// hold the id, so the index is recomputed whenever the document is written.
#[derive(Debug, Clone, Default)]
pub struct MaterialList {
    entries: IndexMap<MaterialId, Material>,
    next_id: u32,
}

impl MaterialList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material and return its id
    pub fn add(&mut self, material: Material) -> MaterialId {
        let id = MaterialId::new(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, material);
        id
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.entries.get_mut(&id)
    }

    /// Remove a material, keeping the order of the others
    pub fn remove(&mut self, id: MaterialId) -> Option<Material> {
        self.entries.shift_remove(&id)
    }

    pub fn contains(&self, id: MaterialId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Current on-disk index of `id`
    pub fn index_of(&self, id: MaterialId) -> Option<usize> {
        self.entries.get_index_of(&id)
    }

    /// Id of the material at on-disk index `index`
    pub fn id_at(&self, index: usize) -> Option<MaterialId> {
        self.entries.get_index(index).map(|(id, _)| *id)
    }

    /// First material named `name`
    pub fn find_by_name(&self, name: &str) -> Option<(MaterialId, &Material)> {
        self.entries
            .iter()
            .find(|(_, m)| m.name == name)
            .map(|(id, m)| (*id, m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in on-disk order
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.entries.iter().map(|(id, m)| (*id, m))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (MaterialId, &mut Material)> {
        self.entries.iter_mut().map(|(id, m)| (*id, m))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl PartialEq for MaterialList {
    /// Same ids and materials in the same order
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}
