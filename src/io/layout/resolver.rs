//! Index <-> reference translation for textures, fonts and materials
//!
//! On disk, references are small indices into the texture table, the font
//! table and the material list. In memory, textures and fonts are referenced
//! by name and materials by [`MaterialId`].

use crate::error::{LayoutError, Result};
use crate::materials::MaterialList;
use crate::tables::NameTable;
use crate::types::MaterialId;

/// Borrowed view of a document's tables used while decoding or encoding
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    textures: &'a NameTable,
    fonts: &'a NameTable,
    materials: &'a MaterialList,
}

impl<'a> Resolver<'a> {
    pub fn new(textures: &'a NameTable, fonts: &'a NameTable, materials: &'a MaterialList) -> Self {
        Resolver {
            textures,
            fonts,
            materials,
        }
    }

    // ---------------------------------------------------------------
    // Read direction
    // ---------------------------------------------------------------

    pub fn texture_name(&self, index: u16) -> Result<String> {
        self.textures
            .get(index as usize)
            .map(str::to_owned)
            .ok_or_else(|| out_of_range("texture", index, self.textures.len()))
    }

    pub fn font_name(&self, index: u16) -> Result<String> {
        self.fonts
            .get(index as usize)
            .map(str::to_owned)
            .ok_or_else(|| out_of_range("font", index, self.fonts.len()))
    }

    pub fn material_id(&self, index: u16) -> Result<MaterialId> {
        self.materials
            .id_at(index as usize)
            .ok_or_else(|| out_of_range("material", index, self.materials.len()))
    }

    // ---------------------------------------------------------------
    // Write direction
    // ---------------------------------------------------------------

    pub fn texture_index(&self, name: &str) -> Result<u16> {
        let index = self.textures.index_of(name).ok_or_else(|| {
            LayoutError::UnresolvedReference(format!("texture '{name}' is not in the texture table"))
        })?;
        to_u16("texture", index)
    }

    pub fn font_index(&self, name: &str) -> Result<u16> {
        let index = self.fonts.index_of(name).ok_or_else(|| {
            LayoutError::UnresolvedReference(format!("font '{name}' is not in the font table"))
        })?;
        to_u16("font", index)
    }

    pub fn material_index(&self, id: MaterialId) -> Result<u16> {
        let index = self.materials.index_of(id).ok_or_else(|| {
            LayoutError::UnresolvedReference(format!("{id} is not in the material list"))
        })?;
        to_u16("material", index)
    }
}

fn out_of_range(what: &str, index: u16, len: usize) -> LayoutError {
    LayoutError::UnresolvedReference(format!("{what} index {index} out of range ({len} entries)"))
}

fn to_u16(what: &str, index: usize) -> Result<u16> {
    u16::try_from(index)
        .map_err(|_| LayoutError::UnresolvedReference(format!("{what} index {index} exceeds u16")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;

    #[test]
    fn test_both_directions() {
        let textures: NameTable = ["a.tpl", "b.tpl"].into_iter().collect();
        let fonts: NameTable = ["font.brfnt"].into_iter().collect();
        let mut materials = MaterialList::new();
        let m0 = materials.add(Material::new("m0"));
        let m1 = materials.add(Material::new("m1"));

        let resolver = Resolver::new(&textures, &fonts, &materials);
        assert_eq!(resolver.texture_name(1).unwrap(), "b.tpl");
        assert_eq!(resolver.texture_index("b.tpl").unwrap(), 1);
        assert_eq!(resolver.font_name(0).unwrap(), "font.brfnt");
        assert_eq!(resolver.material_id(1).unwrap(), m1);
        assert_eq!(resolver.material_index(m0).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range_index() {
        let empty = NameTable::new();
        let materials = MaterialList::new();
        let resolver = Resolver::new(&empty, &empty, &materials);
        assert!(matches!(
            resolver.texture_name(0),
            Err(LayoutError::UnresolvedReference(_))
        ));
        assert!(matches!(
            resolver.material_id(3),
            Err(LayoutError::UnresolvedReference(_))
        ));
    }

    #[test]
    fn test_missing_object_on_write() {
        let empty = NameTable::new();
        let mut other = MaterialList::new();
        let foreign = other.add(Material::new("elsewhere"));
        let materials = MaterialList::new();
        let resolver = Resolver::new(&empty, &empty, &materials);
        assert!(matches!(
            resolver.material_index(foreign),
            Err(LayoutError::UnresolvedReference(_))
        ));
        assert!(matches!(
            resolver.font_index("missing"),
            Err(LayoutError::UnresolvedReference(_))
        ));
    }
}
