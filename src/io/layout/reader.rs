//! RLYT reader

use super::material_codec::read_material_list;
use super::pane_codec::{is_pane_tag, read_group, read_layout_info, read_pane};
use super::resolver::Resolver;
use super::tree_builder::TreeBuilder;
use crate::document::LayoutDocument;
use crate::error::Result;
use crate::groups::Group;
use crate::io::header::read_header;
use crate::io::section::SectionHeader;
use crate::io::stream::EndianReader;
use crate::io::string_table::read_string_table;
use crate::io::tags;
use crate::notification::NotificationType;
use crate::panes::Pane;
use crate::tables::NameTable;
use crate::types::{ByteOrder, NodeId};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Configuration for the layout reader.
#[derive(Debug, Clone, Default)]
pub struct LayoutReaderConfiguration {
    /// When `true`, a section whose body is malformed, truncated or refers
    /// to a missing table entry is reported as an `Error` notification and
    /// skipped instead of aborting the read.
    ///
    /// Bad magic and unbalanced scopes are always fatal.
    ///
    /// Default: `false`
    pub failsafe: bool,
}

/// Layout archive reader
pub struct LayoutReader<R: Read + Seek> {
    reader: EndianReader<R>,
    config: LayoutReaderConfiguration,
}

/// Trees under construction while sections stream past
struct Hierarchy {
    panes: TreeBuilder<Pane>,
    groups: TreeBuilder<Group>,
    /// Pane decoded by the previous section; `usd1` attaches only here
    user_data_target: Option<NodeId>,
}

impl<R: Read + Seek> LayoutReader<R> {
    /// Create a layout reader over any seekable stream
    pub fn from_reader(reader: R) -> Result<Self> {
        Ok(Self {
            reader: EndianReader::new(reader, ByteOrder::Big),
            config: LayoutReaderConfiguration::default(),
        })
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: LayoutReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Decode the whole archive
    pub fn read(mut self) -> Result<LayoutDocument> {
        let info = read_header(&mut self.reader, &tags::LAYOUT_MAGIC)?;

        let mut document = LayoutDocument::new();
        document.header = info.header;

        let mut hierarchy = Hierarchy {
            panes: TreeBuilder::new("pane"),
            groups: TreeBuilder::new("group"),
            user_data_target: None,
        };

        let failsafe = self.config.failsafe;
        for _ in 0..info.section_count {
            let section = SectionHeader::read(&mut self.reader)?;
            tracing::trace!(
                tag = %section.tag_name(),
                start = section.start,
                length = section.length,
                "reading section"
            );

            let attach_to = hierarchy.user_data_target.take();
            let result = self.read_section(&section, attach_to, &mut document, &mut hierarchy);

            // In failsafe mode, report recoverable errors and continue
            if let Err(e) = result {
                if failsafe && e.is_recoverable() {
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

        let end = self.reader.position()?;
        let (panes, root_pane) = hierarchy.panes.finish("pas1", end)?;
        let (groups, root_group) = hierarchy.groups.finish("grs1", end)?;
        document.panes = panes;
        document.root_pane = root_pane;
        document.groups = groups;
        document.root_group = root_group;

        tracing::debug!(
            panes = document.panes.len(),
            materials = document.materials.len(),
            notifications = document.notifications.len(),
            "layout read"
        );
        Ok(document)
    }

    fn read_section(
        &mut self,
        section: &SectionHeader,
        attach_to: Option<NodeId>,
        document: &mut LayoutDocument,
        hierarchy: &mut Hierarchy,
    ) -> Result<()> {
        let reader = &mut self.reader;
        match section.tag {
            tags::LAYOUT_INFO => {
                document.layout = read_layout_info(reader)?;
            }
            tags::TEXTURE_LIST => {
                document.textures = NameTable::from(read_string_table(reader)?);
            }
            tags::FONT_LIST => {
                document.fonts = NameTable::from(read_string_table(reader)?);
            }
            tags::MATERIAL_LIST => {
                let materials = {
                    let resolver =
                        Resolver::new(&document.textures, &document.fonts, &document.materials);
                    read_material_list(reader, section.start, &resolver)?
                };
                document.materials.clear();
                for material in materials {
                    document.materials.add(material);
                }
            }
            tag if is_pane_tag(&tag) => {
                let pane = {
                    let resolver =
                        Resolver::new(&document.textures, &document.fonts, &document.materials);
                    read_pane(reader, section, &resolver)?
                };
                let id = hierarchy
                    .panes
                    .insert(pane, section.start, &mut document.notifications)?;
                hierarchy.user_data_target = Some(id);
            }
            tags::PANE_START => hierarchy.panes.open("pas1", section.start)?,
            tags::PANE_END => hierarchy.panes.close("pae1", section.start)?,
            tags::USER_DATA => {
                let data = reader.read_bytes(section.body_len())?;
                match attach_to.and_then(|id| hierarchy.panes.get_mut(id)) {
                    Some(pane) => pane.user_data = Some(data),
                    None => document.notifications.notify_at(
                        NotificationType::Warning,
                        section.start,
                        "user data section not directly after a pane ignored",
                    ),
                }
            }
            tags::GROUP => {
                let group = read_group(reader)?;
                hierarchy
                    .groups
                    .insert(group, section.start, &mut document.notifications)?;
            }
            tags::GROUP_START => hierarchy.groups.open("grs1", section.start)?,
            tags::GROUP_END => hierarchy.groups.close("gre1", section.start)?,
            _ => {
                document.notifications.notify_at(
                    NotificationType::NotSupported,
                    section.start,
                    format!("Unknown section '{}' skipped", section.tag_name()),
                );
            }
        }
        Ok(())
    }
}

impl LayoutReader<BufReader<File>> {
    /// Create a layout reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
