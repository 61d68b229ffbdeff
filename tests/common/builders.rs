//! Test document builders.
//!
//! `create_menu_document()` produces a layout that exercises every pane
//! variant, a fully populated material, user data and nested groups. Panes
//! and groups are added in depth-first order so that a decoded document
//! assigns the same node ids.

#![allow(dead_code)]

use rlyt::animation::{
    AnimationEntry, AnimationInfo, AnimationTag, AnimationTagInfo, AnimationTarget,
    AnimationTrack, CurveType, HermiteKey, StepKey,
};
use rlyt::materials::{
    AlphaCompare, AlphaFunction, AlphaOp, BlendFactor, BlendMode, BlendOp, ChannelControl,
    IndirectStage, SwapChannel, SwapMode, TevStage, TevSwapModeTable, TextureTransform, WrapMode,
};
use rlyt::panes::{
    HorizontalOrigin, LineAlign, Origin, PaneFlags, TextureFlip, VerticalOrigin, WindowFrame,
    WindowInsets,
};
use rlyt::types::{ByteOrder, Color16, Color8, MaterialId, TexCoord, Vector2, Vector3};
use rlyt::{AnimationDocument, Group, LayoutDocument, Material, Pane, Picture, TextBox, Window};

/// A material using every optional block.
pub fn full_material(name: &str, texture: &str) -> Material {
    let mut m = Material::new(name).with_texture(texture);
    m.black_color = Color16::new(0, 0, 0, 0);
    m.white_color = Color16::new(255, 240, 200, 255);
    m.tev_colors[1] = Color8::new(12, 34, 56, 78);
    m.texture_maps[0].wrap_s = WrapMode::Repeat;
    m.texture_maps[0].wrap_t = WrapMode::Mirror;
    m.texture_transforms[0] = TextureTransform {
        translate: Vector2::new(0.25, 0.5),
        rotate: 90.0,
        scale: Vector2::new(2.0, 2.0),
    };
    m.channel_control = Some(ChannelControl {
        color_source: 1,
        alpha_source: 0,
        reserved: [0, 0],
    });
    m.material_color = Some(Color8::new(200, 100, 50, 255));
    m.swap_table = Some(TevSwapModeTable {
        modes: [
            SwapMode::IDENTITY,
            SwapMode {
                red: SwapChannel::Red,
                green: SwapChannel::Red,
                blue: SwapChannel::Red,
                alpha: SwapChannel::Alpha,
            },
            SwapMode::IDENTITY,
            SwapMode::IDENTITY,
        ],
    });
    m.indirect_transforms.push(TextureTransform::default());
    m.indirect_stages.push(IndirectStage {
        tex_coord: 0,
        tex_map: 0,
        scale_s: 1,
        scale_t: 1,
    });
    m.tev_stages.push(TevStage {
        tex_coord: 0,
        color_channel: 4,
        tex_map: 0,
        config: [0x0F, 0x08, 0x0A, 0x0F, 0x07, 0x04, 0x05, 0x07, 0, 0, 0, 0],
    });
    m.alpha_compare = Some(AlphaCompare {
        comp0: AlphaFunction::GreaterOrEqual,
        comp1: AlphaFunction::LessOrEqual,
        op: AlphaOp::And,
        ref0: 32,
        ref1: 224,
    });
    m.blend_mode = Some(BlendMode {
        op: BlendOp::Add,
        source: BlendFactor::SourceAlpha,
        destination: BlendFactor::SourceInvAlpha,
        logic_op: 0,
    });
    m
}

/// A material with a single texture and nothing else.
pub fn textured_material(name: &str, texture: &str) -> Material {
    Material::new(name).with_texture(texture)
}

/// Document with just a root pane.
pub fn create_minimal_document() -> LayoutDocument {
    let mut doc = LayoutDocument::new();
    doc.set_root_pane(Pane::null("RootPane").with_size(608.0, 456.0));
    doc
}

/// Document exercising every pane variant, material block, user data and
/// group nesting.
///
/// ```text
/// RootPane (null)
/// ├── bg (picture)
/// ├── title (text)
/// ├── frame (window)
/// │   └── hit (bound)
/// └── empty (text, empty label)
/// ```
pub fn create_menu_document(byte_order: ByteOrder) -> LayoutDocument {
    let mut doc = LayoutDocument::with_byte_order(byte_order);
    doc.layout.width = 640.0;
    doc.layout.height = 480.0;

    doc.add_texture("bg_a.tpl");
    doc.add_texture("frame_a.tpl");
    doc.add_font("menu_font.brfnt");

    let bg_mat = doc.add_material(full_material("bg_mat", "bg_a.tpl"));
    let frame_mat = doc.add_material(textured_material("frame_mat", "frame_a.tpl"));
    let text_mat = doc.add_material(Material::new("text_mat"));

    let root = doc.set_root_pane(Pane::null("RootPane").with_size(640.0, 480.0));

    let mut bg = Pane::picture("bg", picture(bg_mat)).with_size(640.0, 480.0);
    bg.alpha = 200;
    bg.user_info = "bgInfo".into();
    bg.user_data = Some(vec![0xDE, 0xAD, 0xBE, 0xEF, 0, 0, 0, 1]);
    doc.add_child_pane(root, bg).unwrap();

    let mut title = Pane::text("title", title_text(text_mat)).with_size(400.0, 40.0);
    title.translate = Vector3::new(0.0, 180.0, 0.0);
    title.origin = Origin::new(HorizontalOrigin::Left, VerticalOrigin::Top);
    doc.add_child_pane(root, title).unwrap();

    let mut frame = Pane::window("frame", window(frame_mat)).with_size(300.0, 200.0);
    frame.rotate = Vector3::new(0.0, 0.0, 45.0);
    frame.scale = Vector2::new(1.5, 0.5);
    frame.flags = PaneFlags::VISIBLE | PaneFlags::INFLUENCED_ALPHA;
    let frame = doc.add_child_pane(root, frame).unwrap();

    let mut hit = Pane::bound("hit").with_size(280.0, 180.0);
    hit.set_visible(false);
    doc.add_child_pane(frame, hit).unwrap();

    doc.add_child_pane(
        root,
        Pane::text("empty", TextBox::new(text_mat, "menu_font.brfnt", "")),
    )
    .unwrap();

    let root_group = doc.set_root_group(Group::new("RootGroup"));
    let visuals = doc
        .add_child_group(root_group, Group::new("visuals").with_panes(["bg", "frame"]))
        .unwrap();
    doc.add_child_group(visuals, Group::new("labels").with_panes(["title", "empty"]))
        .unwrap();

    doc
}

pub fn picture(material: MaterialId) -> Picture {
    let mut picture = Picture::new(material);
    picture.set_vertex_colors([
        Color8::WHITE,
        Color8::new(255, 0, 0, 255),
        Color8::new(0, 255, 0, 255),
        Color8::TRANSPARENT,
    ]);
    picture.tex_coords[0].top_right = Vector2::new(2.0, 0.0);
    picture
}

pub fn title_text(material: MaterialId) -> TextBox {
    let mut text = TextBox::new(material, "menu_font.brfnt", "Start Game");
    text.max_text_len = 64;
    text.line_align = LineAlign::Center;
    text.top_color = Color8::new(255, 255, 0, 255);
    text.char_space = 1.0;
    text.line_space = 4.0;
    text
}

pub fn window(material: MaterialId) -> Window {
    let mut window = Window::new(material);
    window.insets = WindowInsets {
        left: 8.0,
        right: 8.0,
        top: 6.0,
        bottom: 6.0,
    };
    window.content.tex_coords.push(TexCoord::default());
    window.frames.push(WindowFrame::new(material));
    window.frames.push(WindowFrame {
        material,
        flip: TextureFlip::Horizontal,
    });
    window
}

// ===========================================================================
// Animation
// ===========================================================================

/// Animation with one pane entry (hermite tracks) and one material entry
/// (step tracks).
pub fn create_fade_animation(byte_order: ByteOrder) -> AnimationDocument {
    let mut doc = AnimationDocument::new();
    doc.header.byte_order = byte_order;
    doc.tag_info = Some(AnimationTagInfo {
        order: 1,
        name: "fade_in".into(),
        groups: vec!["visuals".into(), "labels".into()],
        start_frame: 0,
        end_frame: 30,
        child_binding: true,
        extra: Vec::new(),
    });

    let alpha = AnimationTrack::new(0, 0x10, CurveType::Hermite).with_hermite_keys([
        HermiteKey {
            frame: 0.0,
            value: 0.0,
            slope: 0.0,
        },
        HermiteKey {
            frame: 30.0,
            value: 255.0,
            slope: 0.0,
        },
    ]);
    let pattern = AnimationTrack::new(0, 0, CurveType::Step).with_step_keys([
        StepKey {
            frame: 0.0,
            value: 0,
        },
        StepKey {
            frame: 15.0,
            value: 1,
        },
    ]);

    doc.info = Some(AnimationInfo {
        frame_size: 30,
        looping: false,
        textures: vec!["bg_a.tpl".into(), "bg_b.tpl".into()],
        entries: vec![
            AnimationEntry::new("bg", AnimationTarget::Pane)
                .with_tag(AnimationTag::new("RLVC").with_track(alpha)),
            AnimationEntry::new("bg_mat", AnimationTarget::Material)
                .with_tag(AnimationTag::new("RLTP").with_track(pattern)),
        ],
    });
    doc
}
