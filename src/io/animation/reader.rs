//! RLAN reader

use super::info_codec::read_info;
use super::tag_info_codec::read_tag_info;
use crate::animation::AnimationDocument;
use crate::error::Result;
use crate::io::header::read_header;
use crate::io::section::SectionHeader;
use crate::io::stream::EndianReader;
use crate::io::tags;
use crate::notification::NotificationType;
use crate::types::ByteOrder;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Configuration for the animation reader.
#[derive(Debug, Clone, Default)]
pub struct AnimationReaderConfiguration {
    /// When `true`, recoverable errors within a section are reported as
    /// notifications and the section is skipped.
    ///
    /// Default: `false`
    pub failsafe: bool,
}

/// Animation archive reader
pub struct AnimationReader<R: Read + Seek> {
    reader: EndianReader<R>,
    config: AnimationReaderConfiguration,
}

impl<R: Read + Seek> AnimationReader<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        Ok(Self {
            reader: EndianReader::new(reader, ByteOrder::Big),
            config: AnimationReaderConfiguration::default(),
        })
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: AnimationReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn read(mut self) -> Result<AnimationDocument> {
        let info = read_header(&mut self.reader, &tags::ANIMATION_MAGIC)?;
        let mut document = AnimationDocument::new();
        document.header = info.header;

        for _ in 0..info.section_count {
            let section = SectionHeader::read(&mut self.reader)?;
            tracing::trace!(tag = %section.tag_name(), start = section.start, "reading section");

            let result = match section.tag {
                tags::ANIMATION_TAG_INFO => read_tag_info(&mut self.reader, &section)
                    .map(|tag_info| document.tag_info = Some(tag_info)),
                tags::ANIMATION_INFO => read_info(&mut self.reader, section.start)
                    .map(|info| document.info = Some(info)),
                _ => {
                    document.notifications.notify_at(
                        NotificationType::NotSupported,
                        section.start,
                        format!("Unknown section '{}' skipped", section.tag_name()),
                    );
                    Ok(())
                }
            };

            if let Err(e) = result {
                if self.config.failsafe && e.is_recoverable() {
                    document.notifications.notify_at(
                        NotificationType::Error,
                        section.start,
                        format!("Error reading {} section: {}", section.tag_name(), e),
                    );
                } else {
                    return Err(e);
                }
            }

            section.skip_to_end(&mut self.reader)?;
        }

        tracing::debug!(keys = document.key_count(), "animation read");
        Ok(document)
    }
}

impl AnimationReader<BufReader<File>> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
