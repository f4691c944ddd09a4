//! Colour helpers shared by the GPU scene and the DOM effects.

/// Split a `0xRRGGBB` value into normalized channels.
#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Format a `0xRRGGBB` value as a CSS hex colour.
#[inline]
pub fn css_hex(hex: u32) -> String {
    format!("#{:06x}", hex & 0x00ff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_channels() {
        assert_eq!(rgb_from_hex(0xff0000), [1.0, 0.0, 0.0]);
        let c = rgb_from_hex(0x00ff88);
        assert_eq!(c[0], 0.0);
        assert_eq!(c[1], 1.0);
        assert!((c[2] - 136.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn css_is_lowercase_and_padded() {
        assert_eq!(css_hex(0x00d4ff), "#00d4ff");
        assert_eq!(css_hex(0xff), "#0000ff");
    }
}
