//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Speech bubble with a half-filled gauge, used for the sidebar logo and window icon
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><path d="M20 12h88a12 12 0 0 1 12 12v60a12 12 0 0 1-12 12H56l-26 22v-22H20A12 12 0 0 1 8 84V24a12 12 0 0 1 12-12z" fill="#a78bfa"/><path d="M36 70a28 28 0 0 1 28-28v28z" fill="#4caf50"/><path d="M64 42a28 28 0 0 1 28 28H64z" fill="#f44336"/><circle cx="64" cy="70" r="8" fill="#2e1065"/></svg>"##;

/// Rasterize the logo at the given width, returning straight-alpha RGBA.
pub fn rasterize_logo(width: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), width, height))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory holding settings.json and logs/
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
