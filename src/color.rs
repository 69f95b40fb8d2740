pub type Rgb = (u8, u8, u8);

pub const BACKGROUND: Rgb = (5, 5, 5);
pub const WHITE: Rgb = (255, 255, 255);
pub const GOLD: Rgb = (255, 215, 0);

/// Parses `RRGGBB` or `#RRGGBB`.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Hue in degrees, saturation and lightness in `0..=1`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Composites `top` over `base` at `alpha / 255`.
pub fn blend(base: Rgb, top: Rgb, alpha: u8) -> Rgb {
    let t = alpha as f32 / 255.0;
    (
        (base.0 as f32 * (1.0 - t) + top.0 as f32 * t) as u8,
        (base.1 as f32 * (1.0 - t) + top.1 as f32 * t) as u8,
        (base.2 as f32 * (1.0 - t) + top.2 as f32 * t) as u8,
    )
}
