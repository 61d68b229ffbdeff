//! RLAN writer

use super::info_codec::write_info;
use super::tag_info_codec::write_tag_info;
use crate::animation::AnimationDocument;
use crate::error::Result;
use crate::io::header::{begin_archive, finish_archive, SectionCounter};
use crate::io::section::write_section;
use crate::io::stream::{EndianWriter, SeekWrite};
use crate::io::tags;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Animation archive writer; emits `pat1` then `pai1`, each when present
pub struct AnimationWriter<'a> {
    document: &'a AnimationDocument,
}

impl<'a> AnimationWriter<'a> {
    pub fn new(document: &'a AnimationDocument) -> Self {
        Self { document }
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to_writer(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    pub fn write_to_writer<W: SeekWrite>(&self, writer: W) -> Result<u64> {
        let doc = self.document;
        let mut writer = EndianWriter::new(writer, doc.header.byte_order);
        let slots = begin_archive(&mut writer, &tags::ANIMATION_MAGIC, &doc.header)?;
        let mut sections = SectionCounter::default();

        if let Some(tag_info) = &doc.tag_info {
            write_section(&mut writer, &tags::ANIMATION_TAG_INFO, |w, start| {
                write_tag_info(w, start, tag_info)
            })?;
            sections.bump();
        }
        if let Some(info) = &doc.info {
            write_section(&mut writer, &tags::ANIMATION_INFO, |w, start| {
                write_info(w, start, info)
            })?;
            sections.bump();
        }

        let size = finish_archive(&mut writer, slots, sections.get()?)?;
        writer.flush()?;
        Ok(size)
    }
}
