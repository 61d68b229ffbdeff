//! Field-by-field byte swap of a big-endian layout archive.
//!
//! Walks the sections the writer emits and reverses every multi-byte
//! field, leaving byte strings and `usd1` payloads alone. The result is
//! the little-endian encoding of the same document.

#![allow(dead_code)]

/// Big-endian reads against the untouched input
struct Source<'a>(&'a [u8]);

impl Source<'_> {
    fn u16(&self, at: usize) -> usize {
        u16::from_be_bytes([self.0[at], self.0[at + 1]]) as usize
    }

    fn u32(&self, at: usize) -> usize {
        u32::from_be_bytes([self.0[at], self.0[at + 1], self.0[at + 2], self.0[at + 3]]) as usize
    }
}

fn flip(out: &mut [u8], at: usize, width: usize) {
    out[at..at + width].reverse();
}

fn flip_run(out: &mut [u8], at: usize, width: usize, count: usize) {
    for i in 0..count {
        flip(out, at + i * width, width);
    }
}

/// Swap a big-endian layout archive to little-endian.
pub fn swap_layout_archive(bytes: &[u8]) -> Vec<u8> {
    assert_eq!(&bytes[4..6], &[0xFE, 0xFF], "input must be big-endian");
    let src = Source(bytes);
    let mut out = bytes.to_vec();

    out[4..6].copy_from_slice(&[0xFF, 0xFE]);
    flip(&mut out, 6, 2);
    flip(&mut out, 8, 4);
    flip(&mut out, 12, 2);
    flip(&mut out, 14, 2);

    let mut at = src.u16(12);
    for _ in 0..src.u16(14) {
        let tag: [u8; 4] = bytes[at..at + 4].try_into().unwrap();
        let len = src.u32(at + 4);
        flip(&mut out, at + 4, 4);
        swap_body(&src, &mut out, &tag, at, len);
        at += len;
    }
    assert_eq!(at, bytes.len());
    out
}

fn swap_body(src: &Source<'_>, out: &mut [u8], tag: &[u8; 4], section: usize, len: usize) {
    let body = section + 8;
    match tag {
        b"lyt1" => flip_run(out, body + 4, 4, 2),
        b"txl1" | b"fnl1" => {
            let count = src.u16(body);
            flip(out, body, 2);
            flip_run(out, body + 4, 8, count);
        }
        b"mat1" => {
            let count = src.u16(body);
            flip(out, body, 2);
            for i in 0..count {
                let slot = body + 4 + i * 4;
                let record = section + src.u32(slot);
                flip(out, slot, 4);
                swap_material(src, out, record);
            }
        }
        b"pan1" | b"bnd1" => swap_pane_header(out, body),
        b"pic1" => {
            swap_pane_header(out, body);
            swap_tex_coords(src, out, body + 68 + 16);
        }
        b"txt1" => {
            swap_pane_header(out, body);
            let fields = body + 68;
            flip_run(out, fields, 2, 4);
            let text = section + src.u32(fields + 12);
            flip(out, fields + 12, 4);
            flip_run(out, fields + 24, 4, 4);
            // UTF-16 text, terminator and zero padding up to the section end
            flip_run(out, text, 2, (section + len - text) / 2);
        }
        b"wnd1" => {
            swap_pane_header(out, body);
            let fields = body + 68;
            flip_run(out, fields, 4, 4);
            let frame_count = src.0[fields + 16] as usize;
            let content = section + src.u32(fields + 20);
            let frames = section + src.u32(fields + 24);
            flip_run(out, fields + 20, 4, 2);
            swap_tex_coords(src, out, content + 16);
            for i in 0..frame_count {
                let slot = frames + i * 4;
                flip(out, section + src.u32(slot), 2);
                flip(out, slot, 4);
            }
        }
        b"grp1" => flip(out, body + 16, 2),
        b"usd1" | b"pas1" | b"pae1" | b"grs1" | b"gre1" => {}
        other => panic!("no swap rule for {}", String::from_utf8_lossy(other)),
    }
}

/// Flags, position, rotation, scale and size after the name slots
fn swap_pane_header(out: &mut [u8], at: usize) {
    flip_run(out, at + 28, 4, 10);
}

/// Material index, count byte, pad, then the texture coordinate quads
fn swap_tex_coords(src: &Source<'_>, out: &mut [u8], at: usize) {
    let count = src.0[at + 2] as usize;
    flip(out, at, 2);
    flip_run(out, at + 4, 4, count * 8);
}

/// Count field `width` bits wide starting `start` bits from the MSB
fn field(flags: usize, start: u32, width: u32) -> usize {
    (flags >> (32 - start - width)) & ((1 << width) - 1)
}

fn swap_material(src: &Source<'_>, out: &mut [u8], record: usize) {
    // three 16-bit colors after the name
    flip_run(out, record + 20, 2, 12);
    let flags = src.u32(record + 60);
    flip(out, record + 60, 4);

    let mut at = record + 64;
    for _ in 0..field(flags, 28, 4) {
        flip(out, at, 2);
        at += 4;
    }
    let transforms = field(flags, 24, 4);
    flip_run(out, at, 4, transforms * 5);
    at += transforms * 20;
    at += field(flags, 20, 4) * 4;
    // channel control, material color and swap table are single bytes
    at += 4 * (field(flags, 6, 1) + field(flags, 4, 1) + field(flags, 19, 1));
    let indirect = field(flags, 17, 2);
    flip_run(out, at, 4, indirect * 5);
    at += indirect * 20;
    at += field(flags, 14, 3) * 4;
    for _ in 0..field(flags, 9, 5) {
        flip(out, at + 2, 2);
        at += 16;
    }
}
