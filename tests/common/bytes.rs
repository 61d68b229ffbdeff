//! Hand-assembled big-endian archives for reader tests.

#![allow(dead_code)]

/// Assemble a big-endian layout archive from raw section bodies.
pub fn layout_archive(sections: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    archive(b"RLYT", 0x000A, sections)
}

/// Assemble a big-endian animation archive from raw section bodies.
pub fn animation_archive(sections: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    archive(b"RLAN", 0x0008, sections)
}

fn archive(magic: &[u8; 4], version: u16, sections: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut bytes = magic.to_vec();
    bytes.extend_from_slice(&[0xFE, 0xFF]);
    bytes.extend_from_slice(&version.to_be_bytes());
    bytes.extend_from_slice(&[0; 4]);
    bytes.extend_from_slice(&16u16.to_be_bytes());
    bytes.extend_from_slice(&(sections.len() as u16).to_be_bytes());
    for (tag, body) in sections {
        bytes.extend_from_slice(*tag);
        bytes.extend_from_slice(&(8 + body.len() as u32).to_be_bytes());
        bytes.extend_from_slice(body);
    }
    let len = bytes.len() as u32;
    bytes[8..12].copy_from_slice(&len.to_be_bytes());
    bytes
}

/// `lyt1` body
pub fn layout_info(width: f32, height: f32) -> Vec<u8> {
    let mut body = vec![1, 0, 0, 0];
    body.extend_from_slice(&width.to_be_bytes());
    body.extend_from_slice(&height.to_be_bytes());
    body
}

/// Common pane header (68 bytes) for a visible, centered pane
pub fn pane_header(name: &[u8]) -> Vec<u8> {
    pane_header_with_info(name, &[])
}

/// Common pane header with raw `user_info` bytes (at most 8)
pub fn pane_header_with_info(name: &[u8], user_info: &[u8]) -> Vec<u8> {
    let mut body = vec![0x01, 0x04, 0xFF, 0x00];
    let mut slot = [0u8; 16];
    slot[..name.len()].copy_from_slice(name);
    body.extend_from_slice(&slot);
    let mut info = [0u8; 8];
    info[..user_info.len()].copy_from_slice(user_info);
    body.extend_from_slice(&info);
    for v in [0.0f32, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 32.0, 32.0] {
        body.extend_from_slice(&v.to_be_bytes());
    }
    body
}

/// `pic1` body using material `material` with no texture coordinates
pub fn picture_body(name: &[u8], material: u16) -> Vec<u8> {
    let mut body = pane_header(name);
    body.extend_from_slice(&[0xFF; 16]);
    body.extend_from_slice(&material.to_be_bytes());
    body.extend_from_slice(&[0, 0]);
    body
}

/// `mat1` body with `count` plain materials named `m0`, `m1`, ...
pub fn plain_materials(count: u16) -> Vec<u8> {
    let mut body = count.to_be_bytes().to_vec();
    body.extend_from_slice(&[0, 0]);
    let first = 12 + 4 * count as u32;
    for i in 0..count as u32 {
        body.extend_from_slice(&(first + i * 64).to_be_bytes());
    }
    for i in 0..count {
        let mut name = [0u8; 20];
        let label = format!("m{i}");
        name[..label.len()].copy_from_slice(label.as_bytes());
        body.extend_from_slice(&name);
        // black, white and register 3 colors
        body.extend_from_slice(&[0; 8]);
        body.extend_from_slice(&[0, 0xFF, 0, 0xFF, 0, 0xFF, 0, 0xFF]);
        body.extend_from_slice(&[0, 0xFF, 0, 0xFF, 0, 0xFF, 0, 0xFF]);
        body.extend_from_slice(&[0xFF; 16]);
        body.extend_from_slice(&[0; 4]);
    }
    body
}

/// `txl1` / `fnl1` body with the string bodies stored in reverse order
pub fn reversed_name_table(names: &[&str]) -> Vec<u8> {
    let count = names.len();
    let mut body = (count as u16).to_be_bytes().to_vec();
    body.extend_from_slice(&[0, 0]);

    let mut strings = Vec::new();
    let mut offsets = vec![0u32; count];
    for (index, name) in names.iter().enumerate().rev() {
        offsets[index] = (count * 8 + strings.len()) as u32;
        strings.extend_from_slice(name.as_bytes());
        strings.push(0);
    }
    for offset in offsets {
        body.extend_from_slice(&offset.to_be_bytes());
        body.extend_from_slice(&[0; 4]);
    }
    body.extend_from_slice(&strings);
    body
}
