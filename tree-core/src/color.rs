use rand::Rng;

/// Non-premultiplied RGBA color with `f32` channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Default foliage color.
    pub const SEA_GREEN: Self = Self::from_argb(0xFF2E_8B57);

    /// Fixed trunk color; not user-configurable.
    pub const TRUNK_BROWN: Self = Self::from_argb(0xFF8B_4513);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        let r = ((argb >> 16) & 0xFF) as f32 / 255.0;
        let g = ((argb >> 8) & 0xFF) as f32 / 255.0;
        let b = (argb & 0xFF) as f32 / 255.0;
        Self::new(r, g, b, a)
    }

    /// Draws an opaque color with red, green and blue sampled, in that
    /// order, uniformly from `[0, 1)`.
    ///
    /// ### Parameters
    /// - `rng` - Random source; pass a seeded generator for reproducible colors.
    pub fn random_opaque(rng: &mut impl Rng) -> Self {
        let r = rng.random::<f32>();
        let g = rng.random::<f32>();
        let b = rng.random::<f32>();
        Self::rgb(r, g, b)
    }

    /// Converts to 8-bit `[r, g, b, a]`, rounding and clamping each channel.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
