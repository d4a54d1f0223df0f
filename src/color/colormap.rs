//! Named colormaps.
//!
//! Two families are supported, mirroring the usual plotting conventions:
//!
//! - **Listed** (qualitative) maps are a short table of discrete colors (`tab20`, `Accent`, ...).
//! - **Segmented** maps are defined by per-channel anchor points and expanded into a 256-entry
//!   lookup table (`jet`, `hot`, ...).
//!
//! Any name may carry an `_r` suffix to reverse the map.

use crate::foundation::core::Rgb;

/// Lookup-table size for segmented maps.
pub const SEGMENTED_LUT_SIZE: usize = 256;

/// Per-channel anchor points `(x, y)` with `x` ascending from 0 to 1.
type Anchors = &'static [(f64, f64)];

struct Segments {
    red: Anchors,
    green: Anchors,
    blue: Anchors,
}

enum Source {
    Listed(&'static [[u8; 3]]),
    Segmented(&'static Segments),
}

/// A resolved colormap that maps `t ∈ [0, 1]` to a color.
#[derive(Clone, Debug)]
pub struct Colormap {
    name: String,
    lut: Vec<Rgb>,
}

impl Colormap {
    /// Look up a colormap by name (case-sensitive, `_r` suffix reverses).
    pub fn lookup(name: &str) -> Option<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let source = builtin(base)?;
        let mut lut = match source {
            Source::Listed(colors) => colors
                .iter()
                .map(|&[r, g, b]| Rgb::from_rgb8(r, g, b))
                .collect::<Vec<_>>(),
            Source::Segmented(seg) => build_lut(seg, SEGMENTED_LUT_SIZE),
        };
        if reversed {
            lut.reverse();
        }
        Some(Self {
            name: name.to_owned(),
            lut,
        })
    }

    /// Name this map was looked up with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of discrete entries in the lookup table.
    pub fn len(&self) -> usize {
        self.lut.len()
    }

    /// Always `false`; every built-in map has at least two entries.
    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// Color at `t ∈ [0, 1]`.
    ///
    /// `t` selects entry `floor(t * len)`, with `t == 1` mapping to the last entry. Out-of-range
    /// and NaN inputs are clamped to the nearest end.
    pub fn rgb(&self, t: f64) -> Rgb {
        let n = self.lut.len();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let idx = ((t * n as f64) as usize).min(n - 1);
        self.lut[idx]
    }
}

/// Names of all built-in colormaps (without `_r` variants).
pub fn builtin_names() -> &'static [&'static str] {
    &[
        "tab10", "tab20", "tab20b", "tab20c", "Accent", "Dark2", "Paired", "Pastel1", "Pastel2",
        "Set1", "Set2", "Set3", "jet", "hot", "cool", "gray", "binary", "spring", "summer",
        "autumn", "winter",
    ]
}

fn builtin(name: &str) -> Option<Source> {
    let src = match name {
        "tab10" => Source::Listed(TAB10),
        "tab20" => Source::Listed(TAB20),
        "tab20b" => Source::Listed(TAB20B),
        "tab20c" => Source::Listed(TAB20C),
        "Accent" => Source::Listed(ACCENT),
        "Dark2" => Source::Listed(DARK2),
        "Paired" => Source::Listed(PAIRED),
        "Pastel1" => Source::Listed(PASTEL1),
        "Pastel2" => Source::Listed(PASTEL2),
        "Set1" => Source::Listed(SET1),
        "Set2" => Source::Listed(SET2),
        "Set3" => Source::Listed(SET3),
        "jet" => Source::Segmented(&JET),
        "hot" => Source::Segmented(&HOT),
        "cool" => Source::Segmented(&COOL),
        "gray" | "grey" => Source::Segmented(&GRAY),
        "binary" => Source::Segmented(&BINARY),
        "spring" => Source::Segmented(&SPRING),
        "summer" => Source::Segmented(&SUMMER),
        "autumn" => Source::Segmented(&AUTUMN),
        "winter" => Source::Segmented(&WINTER),
        _ => return None,
    };
    Some(src)
}

fn build_lut(seg: &Segments, n: usize) -> Vec<Rgb> {
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = i as f64 / denom;
            Rgb::new(
                interp(seg.red, x),
                interp(seg.green, x),
                interp(seg.blue, x),
            )
        })
        .collect()
}

/// Piecewise-linear interpolation through `anchors` at `x`.
fn interp(anchors: Anchors, x: f64) -> f64 {
    let Some(&(x0, y0)) = anchors.first() else {
        return 0.0;
    };
    if x <= x0 {
        return y0;
    }
    for w in anchors.windows(2) {
        let (xa, ya) = w[0];
        let (xb, yb) = w[1];
        if x <= xb {
            if xb <= xa {
                return yb;
            }
            return ya + (yb - ya) * (x - xa) / (xb - xa);
        }
    }
    anchors.last().map(|&(_, y)| y).unwrap_or(0.0)
}

const TAB10: &[[u8; 3]] = &[
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

const TAB20: &[[u8; 3]] = &[
    [0x1f, 0x77, 0xb4],
    [0xae, 0xc7, 0xe8],
    [0xff, 0x7f, 0x0e],
    [0xff, 0xbb, 0x78],
    [0x2c, 0xa0, 0x2c],
    [0x98, 0xdf, 0x8a],
    [0xd6, 0x27, 0x28],
    [0xff, 0x98, 0x96],
    [0x94, 0x67, 0xbd],
    [0xc5, 0xb0, 0xd5],
    [0x8c, 0x56, 0x4b],
    [0xc4, 0x9c, 0x94],
    [0xe3, 0x77, 0xc2],
    [0xf7, 0xb6, 0xd2],
    [0x7f, 0x7f, 0x7f],
    [0xc7, 0xc7, 0xc7],
    [0xbc, 0xbd, 0x22],
    [0xdb, 0xdb, 0x8d],
    [0x17, 0xbe, 0xcf],
    [0x9e, 0xda, 0xe5],
];

const TAB20B: &[[u8; 3]] = &[
    [0x39, 0x3b, 0x79],
    [0x52, 0x54, 0xa3],
    [0x6b, 0x6e, 0xcf],
    [0x9c, 0x9e, 0xde],
    [0x63, 0x79, 0x39],
    [0x8c, 0xa2, 0x52],
    [0xb5, 0xcf, 0x6b],
    [0xce, 0xdb, 0x9c],
    [0x8c, 0x6d, 0x31],
    [0xbd, 0x9e, 0x39],
    [0xe7, 0xba, 0x52],
    [0xe7, 0xcb, 0x94],
    [0x84, 0x3c, 0x39],
    [0xad, 0x49, 0x4a],
    [0xd6, 0x61, 0x6b],
    [0xe7, 0x96, 0x9c],
    [0x7b, 0x41, 0x73],
    [0xa5, 0x51, 0x94],
    [0xce, 0x6d, 0xbd],
    [0xde, 0x9e, 0xd6],
];

const TAB20C: &[[u8; 3]] = &[
    [0x31, 0x82, 0xbd],
    [0x6b, 0xae, 0xd6],
    [0x9e, 0xca, 0xe1],
    [0xc6, 0xdb, 0xef],
    [0xe6, 0x55, 0x0d],
    [0xfd, 0x8d, 0x3c],
    [0xfd, 0xae, 0x6b],
    [0xfd, 0xd0, 0xa2],
    [0x31, 0xa3, 0x54],
    [0x74, 0xc4, 0x76],
    [0xa1, 0xd9, 0x9b],
    [0xc7, 0xe9, 0xc0],
    [0x75, 0x6b, 0xb1],
    [0x9e, 0x9a, 0xc8],
    [0xbc, 0xbd, 0xdc],
    [0xda, 0xda, 0xeb],
    [0x63, 0x63, 0x63],
    [0x96, 0x96, 0x96],
    [0xbd, 0xbd, 0xbd],
    [0xd9, 0xd9, 0xd9],
];

const ACCENT: &[[u8; 3]] = &[
    [0x7f, 0xc9, 0x7f],
    [0xbe, 0xae, 0xd4],
    [0xfd, 0xc0, 0x86],
    [0xff, 0xff, 0x99],
    [0x38, 0x6c, 0xb0],
    [0xf0, 0x02, 0x7f],
    [0xbf, 0x5b, 0x17],
    [0x66, 0x66, 0x66],
];

const DARK2: &[[u8; 3]] = &[
    [0x1b, 0x9e, 0x77],
    [0xd9, 0x5f, 0x02],
    [0x75, 0x70, 0xb3],
    [0xe7, 0x29, 0x8a],
    [0x66, 0xa6, 0x1e],
    [0xe6, 0xab, 0x02],
    [0xa6, 0x76, 0x1d],
    [0x66, 0x66, 0x66],
];

const PAIRED: &[[u8; 3]] = &[
    [0xa6, 0xce, 0xe3],
    [0x1f, 0x78, 0xb4],
    [0xb2, 0xdf, 0x8a],
    [0x33, 0xa0, 0x2c],
    [0xfb, 0x9a, 0x99],
    [0xe3, 0x1a, 0x1c],
    [0xfd, 0xbf, 0x6f],
    [0xff, 0x7f, 0x00],
    [0xca, 0xb2, 0xd6],
    [0x6a, 0x3d, 0x9a],
    [0xff, 0xff, 0x99],
    [0xb1, 0x59, 0x28],
];

const PASTEL1: &[[u8; 3]] = &[
    [0xfb, 0xb4, 0xae],
    [0xb3, 0xcd, 0xe3],
    [0xcc, 0xeb, 0xc5],
    [0xde, 0xcb, 0xe4],
    [0xfe, 0xd9, 0xa6],
    [0xff, 0xff, 0xcc],
    [0xe5, 0xd8, 0xbd],
    [0xfd, 0xda, 0xec],
    [0xf2, 0xf2, 0xf2],
];

const PASTEL2: &[[u8; 3]] = &[
    [0xb3, 0xe2, 0xcd],
    [0xfd, 0xcd, 0xac],
    [0xcb, 0xd5, 0xe8],
    [0xf4, 0xca, 0xe4],
    [0xe6, 0xf5, 0xc9],
    [0xff, 0xf2, 0xae],
    [0xf1, 0xe2, 0xcc],
    [0xcc, 0xcc, 0xcc],
];

const SET1: &[[u8; 3]] = &[
    [0xe4, 0x1a, 0x1c],
    [0x37, 0x7e, 0xb8],
    [0x4d, 0xaf, 0x4a],
    [0x98, 0x4e, 0xa3],
    [0xff, 0x7f, 0x00],
    [0xff, 0xff, 0x33],
    [0xa6, 0x56, 0x28],
    [0xf7, 0x81, 0xbf],
    [0x99, 0x99, 0x99],
];

const SET2: &[[u8; 3]] = &[
    [0x66, 0xc2, 0xa5],
    [0xfc, 0x8d, 0x62],
    [0x8d, 0xa0, 0xcb],
    [0xe7, 0x8a, 0xc3],
    [0xa6, 0xd8, 0x54],
    [0xff, 0xd9, 0x2f],
    [0xe5, 0xc4, 0x94],
    [0xb3, 0xb3, 0xb3],
];

const SET3: &[[u8; 3]] = &[
    [0x8d, 0xd3, 0xc7],
    [0xff, 0xff, 0xb3],
    [0xbe, 0xba, 0xda],
    [0xfb, 0x80, 0x72],
    [0x80, 0xb1, 0xd3],
    [0xfd, 0xb4, 0x62],
    [0xb3, 0xde, 0x69],
    [0xfc, 0xcd, 0xe5],
    [0xd9, 0xd9, 0xd9],
    [0xbc, 0x80, 0xbd],
    [0xcc, 0xeb, 0xc5],
    [0xff, 0xed, 0x6f],
];

static JET: Segments = Segments {
    red: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    green: &[
        (0.0, 0.0),
        (0.125, 0.0),
        (0.375, 1.0),
        (0.64, 1.0),
        (0.91, 0.0),
        (1.0, 0.0),
    ],
    blue: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
};

static HOT: Segments = Segments {
    red: &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
};

static COOL: Segments = Segments {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 1.0), (1.0, 0.0)],
    blue: &[(0.0, 1.0), (1.0, 1.0)],
};

static GRAY: Segments = Segments {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (1.0, 1.0)],
};

static BINARY: Segments = Segments {
    red: &[(0.0, 1.0), (1.0, 0.0)],
    green: &[(0.0, 1.0), (1.0, 0.0)],
    blue: &[(0.0, 1.0), (1.0, 0.0)],
};

static SPRING: Segments = Segments {
    red: &[(0.0, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 1.0), (1.0, 0.0)],
};

static SUMMER: Segments = Segments {
    red: &[(0.0, 0.0), (1.0, 1.0)],
    green: &[(0.0, 0.5), (1.0, 1.0)],
    blue: &[(0.0, 0.4), (1.0, 0.4)],
};

static AUTUMN: Segments = Segments {
    red: &[(0.0, 1.0), (1.0, 1.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 0.0), (1.0, 0.0)],
};

static WINTER: Segments = Segments {
    red: &[(0.0, 0.0), (1.0, 0.0)],
    green: &[(0.0, 0.0), (1.0, 1.0)],
    blue: &[(0.0, 1.0), (1.0, 0.5)],
};

#[cfg(test)]
#[path = "../../tests/unit/color/colormap.rs"]
mod tests;
