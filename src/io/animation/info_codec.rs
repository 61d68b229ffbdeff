//! `pai1` body: textures and the entry / tag / track / key hierarchy
//!
//! Texture and entry offsets are relative to the section start, tag offsets
//! to their entry, track offsets to their tag and key offsets to their
//! track.

use crate::animation::*;
use crate::error::{LayoutError, Result};
use crate::io::offsets::{read_entries, OffsetTable};
use crate::io::stream::{EndianReader, EndianWriter, SeekWrite};
use std::io::{Read, Seek};

/// Size of a track header; keys follow immediately
const TRACK_HEADER_SIZE: u32 = 0x0C;

fn count_u8(what: &str, len: usize) -> Result<u8> {
    u8::try_from(len).map_err(|_| LayoutError::InvalidFormat(format!("{len} {what}")))
}

fn count_u16(what: &str, len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| LayoutError::InvalidFormat(format!("{len} {what}")))
}

// ---------------------------------------------------------------
// Read
// ---------------------------------------------------------------

pub fn read_info<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    section_start: u64,
) -> Result<AnimationInfo> {
    let frame_size = reader.read_u16()?;
    let looping = reader.read_bool()?;
    reader.skip(1)?;
    let texture_count = reader.read_u16()? as usize;
    let entry_count = reader.read_u16()? as usize;
    let entry_table = reader.read_u32()? as u64;

    let textures = read_entries(reader, texture_count, section_start, false, |r| {
        r.read_cstring()
    })?;

    reader.seek_to(section_start + entry_table)?;
    let entries = read_entries(reader, entry_count, section_start, false, read_entry)?;

    Ok(AnimationInfo {
        frame_size,
        looping,
        textures,
        entries,
    })
}

fn read_entry<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<AnimationEntry> {
    let start = reader.position()?;
    let name = reader.read_fixed_string(AnimationEntry::NAME_LEN)?;
    let tag_count = reader.read_u8()? as usize;
    let target = AnimationTarget::from(reader.read_u8()?);
    reader.skip(2)?;
    let tags = read_entries(reader, tag_count, start, false, |r| read_tag(r, target))?;
    Ok(AnimationEntry { name, target, tags })
}

fn read_tag<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    target: AnimationTarget,
) -> Result<AnimationTag> {
    let unknown = if target.has_tag_prefix() {
        Some(reader.read_u32()?)
    } else {
        None
    };
    let start = reader.position()?;
    let kind = reader.read_fixed_string(AnimationTag::KIND_LEN)?;
    let track_count = reader.read_u8()? as usize;
    reader.skip(3)?;
    let tracks = read_entries(reader, track_count, start, false, read_track)?;
    Ok(AnimationTag {
        kind,
        unknown,
        tracks,
    })
}

fn read_track<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<AnimationTrack> {
    let start = reader.position()?;
    let index = reader.read_u8()?;
    let target = reader.read_u8()?;
    let curve = CurveType::from(reader.read_u8()?);
    reader.skip(1)?;
    let key_count = reader.read_u16()? as usize;
    reader.skip(2)?;
    let key_offset = reader.read_u32()? as u64;

    reader.seek_to(start + key_offset)?;
    let keys = if curve.is_hermite() {
        let keys = (0..key_count)
            .map(|_| {
                Ok(HermiteKey {
                    frame: reader.read_f32()?,
                    value: reader.read_f32()?,
                    slope: reader.read_f32()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        KeyFrames::Hermite(keys)
    } else {
        let keys = (0..key_count)
            .map(|_| {
                let key = StepKey {
                    frame: reader.read_f32()?,
                    value: reader.read_u16()?,
                };
                reader.skip(2)?;
                Ok(key)
            })
            .collect::<Result<Vec<_>>>()?;
        KeyFrames::Step(keys)
    };

    Ok(AnimationTrack {
        index,
        target,
        curve,
        keys,
    })
}

// ---------------------------------------------------------------
// Write
// ---------------------------------------------------------------

pub fn write_info<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    section_start: u64,
    info: &AnimationInfo,
) -> Result<()> {
    writer.write_u16(info.frame_size)?;
    writer.write_bool(info.looping)?;
    writer.write_u8(0)?;
    writer.write_u16(count_u16("textures", info.textures.len())?)?;
    writer.write_u16(count_u16("animation entries", info.entries.len())?)?;
    let entry_table_slot = OffsetTable::reserve(writer, 1, section_start, false)?;

    let textures = OffsetTable::reserve(writer, info.textures.len(), section_start, false)?;
    for (index, texture) in info.textures.iter().enumerate() {
        textures.patch_here(writer, index)?;
        writer.write_cstring(texture)?;
    }
    writer.align(4)?;

    entry_table_slot.patch_here(writer, 0)?;
    let entries = OffsetTable::reserve(writer, info.entries.len(), section_start, false)?;
    for (index, entry) in info.entries.iter().enumerate() {
        entries.patch_here(writer, index)?;
        write_entry(writer, entry)?;
    }
    Ok(())
}

fn write_entry<W: SeekWrite>(writer: &mut EndianWriter<W>, entry: &AnimationEntry) -> Result<()> {
    let start = writer.position()?;
    writer.write_fixed_string(&entry.name, AnimationEntry::NAME_LEN)?;
    writer.write_u8(count_u8("tags", entry.tags.len())?)?;
    writer.write_u8(entry.target.into())?;
    writer.write_u16(0)?;

    let tags = OffsetTable::reserve(writer, entry.tags.len(), start, false)?;
    for (index, tag) in entry.tags.iter().enumerate() {
        tags.patch_here(writer, index)?;
        if entry.target.has_tag_prefix() {
            writer.write_u32(tag.unknown.unwrap_or(0))?;
        }
        write_tag(writer, tag)?;
    }
    Ok(())
}

fn write_tag<W: SeekWrite>(writer: &mut EndianWriter<W>, tag: &AnimationTag) -> Result<()> {
    let start = writer.position()?;
    writer.write_fixed_string(&tag.kind, AnimationTag::KIND_LEN)?;
    writer.write_u8(count_u8("tracks", tag.tracks.len())?)?;
    writer.write_zeros(3)?;

    let tracks = OffsetTable::reserve(writer, tag.tracks.len(), start, false)?;
    for (index, track) in tag.tracks.iter().enumerate() {
        tracks.patch_here(writer, index)?;
        write_track(writer, track)?;
    }
    Ok(())
}

fn write_track<W: SeekWrite>(writer: &mut EndianWriter<W>, track: &AnimationTrack) -> Result<()> {
    if !track.keys.matches(track.curve) {
        return Err(LayoutError::InvalidFormat(format!(
            "track {}:{} keys do not match curve {:?}",
            track.index, track.target, track.curve
        )));
    }

    writer.write_u8(track.index)?;
    writer.write_u8(track.target)?;
    writer.write_u8(track.curve.into())?;
    writer.write_u8(0)?;
    writer.write_u16(count_u16("keys", track.keys.len())?)?;
    writer.write_u16(0)?;
    writer.write_u32(TRACK_HEADER_SIZE)?;

    match &track.keys {
        KeyFrames::Hermite(keys) => {
            for key in keys {
                writer.write_f32(key.frame)?;
                writer.write_f32(key.value)?;
                writer.write_f32(key.slope)?;
            }
        }
        KeyFrames::Step(keys) => {
            for key in keys {
                writer.write_f32(key.frame)?;
                writer.write_u16(key.value)?;
                writer.write_u16(0)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::section::{write_section, SectionHeader};
    use crate::io::tags;
    use crate::types::ByteOrder;
    use std::io::Cursor;

    fn sample() -> AnimationInfo {
        let srt = AnimationTag::new("RLPA")
            .with_track(AnimationTrack::new(0, 0, CurveType::Hermite).with_hermite_keys([
                HermiteKey {
                    frame: 0.0,
                    value: 0.0,
                    slope: 0.0,
                },
                HermiteKey {
                    frame: 10.0,
                    value: 32.0,
                    slope: 1.5,
                },
            ]))
            .with_track(AnimationTrack::new(1, 6, CurveType::Hermite));
        let pattern = AnimationTag::new("RLTP").with_track(
            AnimationTrack::new(0, 0, CurveType::Step).with_step_keys([
                StepKey { frame: 0.0, value: 0 },
                StepKey { frame: 5.0, value: 1 },
            ]),
        );
        let mut prefixed = AnimationTag::new("RLVC");
        prefixed.unknown = Some(0xDEAD_BEEF);

        AnimationInfo {
            frame_size: 30,
            looping: true,
            textures: vec!["a.tpl".into(), "bb.tpl".into()],
            entries: vec![
                AnimationEntry::new("pane", AnimationTarget::Pane).with_tag(srt),
                AnimationEntry::new("material", AnimationTarget::Material).with_tag(pattern),
                AnimationEntry::new("odd", AnimationTarget::Other(2)).with_tag(prefixed),
            ],
        }
    }

    fn encode(info: &AnimationInfo, order: ByteOrder) -> Vec<u8> {
        let mut w = EndianWriter::new(Cursor::new(Vec::new()), order);
        write_section(&mut w, &tags::ANIMATION_INFO, |w, start| write_info(w, start, info))
            .unwrap();
        w.into_inner().into_inner()
    }

    fn decode(bytes: Vec<u8>, order: ByteOrder) -> Result<AnimationInfo> {
        let mut r = EndianReader::new(Cursor::new(bytes), order);
        let header = SectionHeader::read(&mut r)?;
        read_info(&mut r, header.start)
    }

    #[test]
    fn test_roundtrip_both_orders() {
        let info = sample();
        for order in [ByteOrder::Big, ByteOrder::Little] {
            assert_eq!(decode(encode(&info, order), order).unwrap(), info);
        }
    }

    #[test]
    fn test_header_layout() {
        let bytes = encode(&sample(), ByteOrder::Big);
        assert_eq!(&bytes[8..12], &[0, 30, 1, 0]);
        assert_eq!(&bytes[12..16], &[0, 2, 0, 3]);
        // texture offsets, then names aligned to 4
        assert_eq!(&bytes[20..24], &[0, 0, 0, 28]);
        assert_eq!(&bytes[24..28], &[0, 0, 0, 34]);
        assert_eq!(&bytes[28..34], b"a.tpl\0");
        // entry table follows the aligned names
        assert_eq!(&bytes[16..20], &[0, 0, 0, 44]);
    }

    #[test]
    fn test_track_key_offset() {
        let info = AnimationInfo {
            entries: vec![AnimationEntry::new("p", AnimationTarget::Pane).with_tag(
                AnimationTag::new("RLPA").with_track(
                    AnimationTrack::new(2, 3, CurveType::Constant)
                        .with_step_keys([StepKey { frame: 1.0, value: 7 }]),
                ),
            )],
            ..Default::default()
        };
        let bytes = encode(&info, ByteOrder::Big);
        // section 8 + header 12, no textures; entry table at 20, entry at 24
        let entry = 24;
        let tag = entry + 24 + 4;
        let track = tag + 8 + 4;
        assert_eq!(&bytes[tag..tag + 5], b"RLPA\x01");
        assert_eq!(&bytes[track..track + 4], &[2, 3, 0, 0]);
        assert_eq!(&bytes[track + 8..track + 12], &[0, 0, 0, 0x0C]);
        assert_eq!(&bytes[track + 16..track + 18], &[0, 7]);
    }

    #[test]
    fn test_unknown_curve_uses_step_layout() {
        let mut track = AnimationTrack::new(0, 0, CurveType::Other(9));
        track.keys = KeyFrames::Step(vec![StepKey { frame: 2.0, value: 4 }]);
        let info = AnimationInfo {
            entries: vec![AnimationEntry::new("p", AnimationTarget::Pane)
                .with_tag(AnimationTag::new("RLPA").with_track(track))],
            ..Default::default()
        };
        assert_eq!(decode(encode(&info, ByteOrder::Big), ByteOrder::Big).unwrap(), info);
    }

    #[test]
    fn test_mismatched_keys_rejected() {
        let mut track = AnimationTrack::new(0, 0, CurveType::Hermite);
        track.keys = KeyFrames::Step(Vec::new());
        let info = AnimationInfo {
            entries: vec![AnimationEntry::new("p", AnimationTarget::Pane)
                .with_tag(AnimationTag::new("RLPA").with_track(track))],
            ..Default::default()
        };
        let mut w = EndianWriter::new(Cursor::new(Vec::new()), ByteOrder::Big);
        let err = write_section(&mut w, &tags::ANIMATION_INFO, |w, start| {
            write_info(w, start, &info)
        })
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidFormat(_)));
    }
}
