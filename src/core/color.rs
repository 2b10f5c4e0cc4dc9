use indexmap::IndexMap;

pub const FALLBACK_SATURATION: u8 = 70;
pub const FALLBACK_LIGHTNESS: u8 = 55;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Hue in `[0, 360)` seeded only by the label text.
#[must_use]
pub fn label_hue(label: &str) -> u16 {
    // Both operands fit in u16 after the modulo.
    (splitmix64(fnv1a64(label.as_bytes())) % 360) as u16
}

/// Stable fallback color for labels without an explicit or palette color.
#[must_use]
pub fn fallback_color(label: &str) -> String {
    format!(
        "hsl({}, {FALLBACK_SATURATION}%, {FALLBACK_LIGHTNESS}%)",
        label_hue(label)
    )
}

/// Resolves slice colors for one layout pass.
///
/// Priority: explicit status color, then the default palette cycled in
/// encounter order, then [`fallback_color`]. The palette cursor only advances
/// when a palette color is handed out.
#[derive(Debug, Clone)]
pub struct ColorResolver<'a> {
    status_colors: Option<&'a IndexMap<String, String>>,
    default_colors: &'a [String],
    palette_index: usize,
}

impl<'a> ColorResolver<'a> {
    #[must_use]
    pub fn new(
        status_colors: Option<&'a IndexMap<String, String>>,
        default_colors: Option<&'a [String]>,
    ) -> Self {
        Self {
            status_colors,
            default_colors: default_colors.unwrap_or(&[]),
            palette_index: 0,
        }
    }

    pub fn resolve(&mut self, label: &str) -> String {
        if let Some(explicit) = self.status_colors.and_then(|colors| colors.get(label)) {
            return explicit.clone();
        }

        if !self.default_colors.is_empty() {
            let color = self.default_colors[self.palette_index % self.default_colors.len()].clone();
            self.palette_index += 1;
            return color;
        }

        fallback_color(label)
    }

    /// Number of palette colors handed out so far.
    #[must_use]
    pub fn palette_cursor(&self) -> usize {
        self.palette_index
    }
}
