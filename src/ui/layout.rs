use eframe::egui::{pos2, vec2, Rect, Vec2};

pub const GRID_GAP: f32 = 24.0;

/// Columns that fit `available` with each at least `min_width` wide.
pub fn grid_columns(available: f32, min_width: f32, gap: f32) -> usize {
    if available <= min_width || min_width <= 0.0 {
        return 1;
    }
    (((available + gap) / (min_width + gap)).floor() as usize).max(1)
}

/// Width of each column when `columns` share `available`.
pub fn column_width(available: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1) as f32;
    ((available - gap * (columns - 1.0)) / columns).max(1.0)
}

/// UV window that crops a texture to fill `target` without stretching.
pub fn cover_uv(texture: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if texture.x <= 0.0 || texture.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let texture_aspect = texture.x / texture.y;
    let target_aspect = target.x / target.y;
    if texture_aspect > target_aspect {
        let visible = target_aspect / texture_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(inset, 0.0), pos2(1.0 - inset, 1.0))
    } else {
        let visible = texture_aspect / target_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, inset), pos2(1.0, 1.0 - inset))
    }
}

/// Largest size with the texture's aspect that fits inside `bounds`.
pub fn contain_size(texture: Vec2, bounds: Vec2) -> Vec2 {
    if texture.x <= 0.0 || texture.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.x / texture.x).min(bounds.y / texture.y);
    vec2(texture.x * scale, texture.y * scale)
}
