//! RLYT writer

use super::material_codec::write_material_list;
use super::pane_codec::{pane_tag, write_group, write_layout_info, write_pane};
use super::resolver::Resolver;
use crate::document::LayoutDocument;
use crate::error::{LayoutError, Result};
use crate::io::header::{begin_archive, finish_archive, SectionCounter};
use crate::io::section::write_section;
use crate::io::stream::{EndianWriter, SeekWrite};
use crate::io::string_table::write_string_table;
use crate::io::tags;
use crate::types::NodeId;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Layout archive writer
///
/// Sections are emitted in a fixed order: `lyt1`, the texture, font and
/// material lists when non-empty, the pane tree and finally the group tree.
pub struct LayoutWriter<'a> {
    document: &'a LayoutDocument,
}

impl<'a> LayoutWriter<'a> {
    pub fn new(document: &'a LayoutDocument) -> Self {
        Self { document }
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    /// Write to a byte vector
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to_writer(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Write to any seekable writer, starting at its current position.
    /// Returns the number of bytes in the archive.
    pub fn write_to_writer<W: SeekWrite>(&self, writer: W) -> Result<u64> {
        let doc = self.document;
        let mut writer = EndianWriter::new(writer, doc.header.byte_order);
        let slots = begin_archive(&mut writer, &tags::LAYOUT_MAGIC, &doc.header)?;
        let resolver = Resolver::new(&doc.textures, &doc.fonts, &doc.materials);
        let mut sections = SectionCounter::default();

        write_section(&mut writer, &tags::LAYOUT_INFO, |w, _| {
            write_layout_info(w, &doc.layout)
        })?;
        sections.bump();

        if !doc.textures.is_empty() {
            write_section(&mut writer, &tags::TEXTURE_LIST, |w, _| {
                write_string_table(w, doc.textures.as_slice())
            })?;
            sections.bump();
        }
        if !doc.fonts.is_empty() {
            write_section(&mut writer, &tags::FONT_LIST, |w, _| {
                write_string_table(w, doc.fonts.as_slice())
            })?;
            sections.bump();
        }
        if !doc.materials.is_empty() {
            write_section(&mut writer, &tags::MATERIAL_LIST, |w, start| {
                write_material_list(w, start, &doc.materials, &resolver)
            })?;
            sections.bump();
        }

        if let Some(root) = doc.root_pane {
            self.write_pane_subtree(&mut writer, root, &resolver, &mut sections)?;
        }
        if let Some(root) = doc.root_group {
            self.write_group_subtree(&mut writer, root, &mut sections)?;
        }

        let size = finish_archive(&mut writer, slots, sections.get()?)?;
        writer.flush()?;
        Ok(size)
    }

    fn write_pane_subtree<W: SeekWrite>(
        &self,
        writer: &mut EndianWriter<W>,
        id: NodeId,
        resolver: &Resolver<'_>,
        sections: &mut SectionCounter,
    ) -> Result<()> {
        let panes = &self.document.panes;
        let pane = panes
            .get(id)
            .ok_or_else(|| LayoutError::UnresolvedReference(format!("pane {id} not in tree")))?;

        write_section(writer, &pane_tag(&pane.kind), |w, start| {
            write_pane(w, start, pane, resolver)
        })?;
        sections.bump();

        if let Some(data) = &pane.user_data {
            write_section(writer, &tags::USER_DATA, |w, _| w.write_bytes(data))?;
            sections.bump();
        }

        let children = panes.children(id);
        if !children.is_empty() {
            write_section(writer, &tags::PANE_START, |_, _| Ok(()))?;
            sections.bump();
            for &child in children {
                self.write_pane_subtree(writer, child, resolver, sections)?;
            }
            write_section(writer, &tags::PANE_END, |_, _| Ok(()))?;
            sections.bump();
        }
        Ok(())
    }

    fn write_group_subtree<W: SeekWrite>(
        &self,
        writer: &mut EndianWriter<W>,
        id: NodeId,
        sections: &mut SectionCounter,
    ) -> Result<()> {
        let groups = &self.document.groups;
        let group = groups
            .get(id)
            .ok_or_else(|| LayoutError::UnresolvedReference(format!("group {id} not in tree")))?;

        write_section(writer, &tags::GROUP, |w, _| write_group(w, group))?;
        sections.bump();

        let children = groups.children(id);
        if !children.is_empty() {
            write_section(writer, &tags::GROUP_START, |_, _| Ok(()))?;
            sections.bump();
            for &child in children {
                self.write_group_subtree(writer, child, sections)?;
            }
            write_section(writer, &tags::GROUP_END, |_, _| Ok(()))?;
            sections.bump();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::Group;
    use crate::materials::Material;
    use crate::panes::{Pane, Picture};
    use crate::types::ByteOrder;

    fn tags_in(bytes: &[u8]) -> Vec<String> {
        let mut tags = Vec::new();
        let mut at = 16;
        while at + 8 <= bytes.len() {
            tags.push(String::from_utf8_lossy(&bytes[at..at + 4]).into_owned());
            let len = u32::from_be_bytes([bytes[at + 4], bytes[at + 5], bytes[at + 6], bytes[at + 7]]);
            at += len as usize;
        }
        tags
    }

    #[test]
    fn test_empty_document() {
        let doc = LayoutDocument::new();
        let bytes = LayoutWriter::new(&doc).write_to_vec().unwrap();
        assert_eq!(bytes.len(), 16 + 20);
        assert_eq!(&bytes[0..8], b"RLYT\xFE\xFF\x00\x0A");
        assert_eq!(&bytes[8..12], &[0, 0, 0, 36]);
        assert_eq!(&bytes[12..16], &[0, 16, 0, 1]);
        assert_eq!(tags_in(&bytes), vec!["lyt1"]);
    }

    #[test]
    fn test_section_order() {
        let mut doc = LayoutDocument::new();
        doc.add_texture("a.tpl");
        let mat = doc.add_material(Material::new("m").with_texture("a.tpl"));
        let root = doc.set_root_pane(Pane::bound("RootPane"));
        let mut pic = Pane::picture("pic", Picture::new(mat));
        pic.user_data = Some(vec![1, 2, 3, 4]);
        doc.add_child_pane(root, pic).unwrap();
        let group = doc.set_root_group(Group::new("RootGroup"));
        doc.add_child_group(group, Group::new("g").with_panes(["pic"]))
            .unwrap();

        let bytes = LayoutWriter::new(&doc).write_to_vec().unwrap();
        assert_eq!(
            tags_in(&bytes),
            vec![
                "lyt1", "txl1", "mat1", "bnd1", "pas1", "pic1", "usd1", "pae1", "grp1", "grs1",
                "grp1", "gre1"
            ]
        );
        assert_eq!(&bytes[14..16], &[0, 12]);
    }

    #[test]
    fn test_dangling_material_fails() {
        let mut doc = LayoutDocument::new();
        let mat = doc.add_material(Material::new("m"));
        doc.set_root_pane(Pane::picture("pic", Picture::new(mat)));
        doc.materials.remove(mat);
        let err = LayoutWriter::new(&doc).write_to_vec().unwrap_err();
        assert!(matches!(err, LayoutError::UnresolvedReference(_)));
    }

    #[test]
    fn test_little_endian_marker() {
        let doc = LayoutDocument::with_byte_order(ByteOrder::Little);
        let bytes = LayoutWriter::new(&doc).write_to_vec().unwrap();
        assert_eq!(&bytes[4..8], &[0xFF, 0xFE, 0x0A, 0x00]);
    }
}
