//! Shared test utilities for rlyt integration tests.
//!
//! Document builders live in [`builders`], raw archive assembly in
//! [`bytes`], the field-by-field byte swapper in [`swap`]. Test crates
//! import them via `mod common;`.

#![allow(dead_code)]

pub mod builders;
pub mod bytes;
pub mod swap;

use rlyt::{AnimationDocument, LayoutDocument, LayoutReader, LayoutWriter};
use rlyt::io::{AnimationReader, AnimationWriter, LayoutReaderConfiguration};
use std::io::Cursor;
use tracing_subscriber::EnvFilter;

// ===========================================================================
// Logging
// ===========================================================================

/// Route the library's `tracing` events to the test output.
///
/// Filtered by `RUST_LOG` (e.g. `RUST_LOG=rlyt=trace`); safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ===========================================================================
// Read / write helpers
// ===========================================================================

/// Encode a layout document, panicking on failure.
pub fn encode_layout(doc: &LayoutDocument) -> Vec<u8> {
    init_tracing();
    LayoutWriter::new(doc)
        .write_to_vec()
        .unwrap_or_else(|e| panic!("layout write failed: {e}"))
}

/// Decode a layout archive in strict mode, panicking on failure.
pub fn decode_layout(bytes: &[u8]) -> LayoutDocument {
    init_tracing();
    LayoutReader::from_reader(Cursor::new(bytes))
        .and_then(|r| r.read())
        .unwrap_or_else(|e| panic!("layout read failed: {e}"))
}

/// Decode a layout archive with failsafe enabled.
pub fn decode_layout_failsafe(bytes: &[u8]) -> LayoutDocument {
    init_tracing();
    LayoutReader::from_reader(Cursor::new(bytes))
        .map(|r| r.with_configuration(LayoutReaderConfiguration { failsafe: true }))
        .and_then(|r| r.read())
        .unwrap_or_else(|e| panic!("failsafe layout read failed: {e}"))
}

pub fn encode_animation(doc: &AnimationDocument) -> Vec<u8> {
    AnimationWriter::new(doc)
        .write_to_vec()
        .unwrap_or_else(|e| panic!("animation write failed: {e}"))
}

pub fn decode_animation(bytes: &[u8]) -> AnimationDocument {
    init_tracing();
    AnimationReader::from_reader(Cursor::new(bytes))
        .and_then(|r| r.read())
        .unwrap_or_else(|e| panic!("animation read failed: {e}"))
}

// ===========================================================================
// Roundtrip testing
// ===========================================================================

/// Write, read back, and return the decoded document with the fields that
/// only exist on decoded documents reset.
pub fn roundtrip_layout(doc: &LayoutDocument) -> LayoutDocument {
    let mut back = decode_layout(&encode_layout(doc));
    back.header.file_length = 0;
    back
}

pub fn roundtrip_animation(doc: &AnimationDocument) -> AnimationDocument {
    let mut back = decode_animation(&encode_animation(doc));
    back.header.file_length = 0;
    back
}

/// Names of every pane in depth-first order.
pub fn pane_names(doc: &LayoutDocument) -> Vec<String> {
    doc.walk_panes()
        .into_iter()
        .filter_map(|id| doc.pane(id).map(|p| p.name.clone()))
        .collect()
}

/// Section tags of an encoded archive in file order.
pub fn section_tags(bytes: &[u8]) -> Vec<String> {
    sections(bytes).into_iter().map(|(tag, _)| tag).collect()
}

/// Offset of the first section tagged `tag`, panicking when absent.
pub fn find_section(bytes: &[u8], tag: &str) -> usize {
    sections(bytes)
        .into_iter()
        .find(|(t, _)| t == tag)
        .map(|(_, at)| at)
        .unwrap_or_else(|| panic!("no {tag} section"))
}

/// Tag and absolute offset of every section in file order.
pub fn sections(bytes: &[u8]) -> Vec<(String, usize)> {
    let big = bytes[4..6] == [0xFE, 0xFF];
    let read_u32 = |at: usize| {
        let raw = [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]];
        if big {
            u32::from_be_bytes(raw)
        } else {
            u32::from_le_bytes(raw)
        }
    };

    let header_len = if big {
        u16::from_be_bytes([bytes[12], bytes[13]])
    } else {
        u16::from_le_bytes([bytes[12], bytes[13]])
    } as usize;

    let mut found = Vec::new();
    let mut at = header_len;
    while at + 8 <= bytes.len() {
        found.push((String::from_utf8_lossy(&bytes[at..at + 4]).into_owned(), at));
        let len = read_u32(at + 4) as usize;
        if len < 8 {
            break;
        }
        at += len;
    }
    found
}
