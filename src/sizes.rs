//! The fixed icon size table for a macOS `AppIcon.appiconset`.
//!
//! Xcode's mac icon set declares five logical sizes, each at `1x` and `2x`.
//! Every entry maps to one PNG on disk and one record in `Contents.json`,
//! and both the [`resample`](crate::resample) and
//! [`contents`](crate::contents) stages read this same table, so the two
//! outputs cannot disagree.
//!
//! | Pixels    | Size    | Scale | File                    |
//! |-----------|---------|-------|-------------------------|
//! | 16×16     | 16x16   | 1x    | `icon_16x16_1x.png`     |
//! | 32×32     | 16x16   | 2x    | `icon_16x16_2x.png`     |
//! | 32×32     | 32x32   | 1x    | `icon_32x32_1x.png`     |
//! | 64×64     | 32x32   | 2x    | `icon_32x32_2x.png`     |
//! | 128×128   | 128x128 | 1x    | `icon_128x128_1x.png`   |
//! | 256×256   | 128x128 | 2x    | `icon_128x128_2x.png`   |
//! | 256×256   | 256x256 | 1x    | `icon_256x256_1x.png`   |
//! | 512×512   | 256x256 | 2x    | `icon_256x256_2x.png`   |
//! | 512×512   | 512x512 | 1x    | `icon_512x512_1x.png`   |
//! | 1024×1024 | 512x512 | 2x    | `icon_512x512_2x.png`   |

/// One icon variant: pixel dimensions plus the labels Xcode expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
    /// Logical size in points, e.g. `"16x16"`.
    pub size_label: &'static str,
    /// Pixel density, e.g. `"2x"`.
    pub scale_label: &'static str,
}

impl SizeSpec {
    const fn new(
        width: u32,
        height: u32,
        size_label: &'static str,
        scale_label: &'static str,
    ) -> Self {
        Self {
            width,
            height,
            size_label,
            scale_label,
        }
    }

    /// Output filename: `icon_{size}_{scale}.png`.
    pub fn filename(&self) -> String {
        format!("icon_{}_{}.png", self.size_label, self.scale_label)
    }
}

/// Every variant of the mac icon set, in manifest order.
pub const ICON_SIZES: [SizeSpec; 10] = [
    SizeSpec::new(16, 16, "16x16", "1x"),
    SizeSpec::new(32, 32, "16x16", "2x"),
    SizeSpec::new(32, 32, "32x32", "1x"),
    SizeSpec::new(64, 64, "32x32", "2x"),
    SizeSpec::new(128, 128, "128x128", "1x"),
    SizeSpec::new(256, 256, "128x128", "2x"),
    SizeSpec::new(256, 256, "256x256", "1x"),
    SizeSpec::new(512, 512, "256x256", "2x"),
    SizeSpec::new(512, 512, "512x512", "1x"),
    SizeSpec::new(1024, 1024, "512x512", "2x"),
];

/// Largest pixel dimensions any entry of `sizes` asks for.
pub fn largest_target(sizes: &[SizeSpec]) -> (u32, u32) {
    sizes.iter().fold((0, 0), |(w, h), spec| {
        (w.max(spec.width), h.max(spec.height))
    })
}

/// Parse a `"WxH"` size label into point dimensions.
///
/// - `"16x16"` → `Some((16, 16))`
/// - `"512x512"` → `Some((512, 512))`
/// - `"16"` / `"axb"` → `None`
pub fn parse_size_label(label: &str) -> Option<(u32, u32)> {
    let (w, h) = label.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

/// Parse a `"Nx"` scale label into its integer factor.
///
/// - `"1x"` → `Some(1)`
/// - `"2x"` → `Some(2)`
/// - `"2"` / `"x"` → `None`
pub fn parse_scale_label(label: &str) -> Option<u32> {
    label.strip_suffix('x')?.parse().ok()
}

/// Expected pixel dimensions for a manifest entry's size and scale labels.
pub fn expected_pixels(size_label: &str, scale_label: &str) -> Option<(u32, u32)> {
    let (w, h) = parse_size_label(size_label)?;
    let factor = parse_scale_label(scale_label)?;
    Some((w * factor, h * factor))
}
