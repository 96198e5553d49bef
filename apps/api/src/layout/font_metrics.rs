//! Static font-metric tables for the three certificate typefaces.
//!
//! Character widths are in em units (relative to font size), so the natural width
//! of a string at `size` px is `Σ widths × size`. Widths approximate browser
//! rendering of each typeface.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Typefaces used on the certificate face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Old-style serif, bold. College name line.
    Garamond,
    /// Connected script. Recipient name line.
    BrushScript,
    /// Body serif. Event name line and running text.
    TimesNewRoman,
}

impl FontFamily {
    /// CSS `font-family` stack emitted into rendered documents.
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Garamond => "'Garamond', serif",
            FontFamily::BrushScript => "'Brush Script MT', cursive",
            FontFamily::TimesNewRoman => "'Times New Roman', serif",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Width measurement capability
// ────────────────────────────────────────────────────────────────────────────

/// Reports how wide a string renders at a given font size, in pixels.
///
/// The fitter only ever sees this capability, never a rendering surface, so any
/// source of widths (metric tables, a shaping engine, a test double) can back it.
/// Implementations should be monotonically non-decreasing in `font_size_px`.
pub trait TextMeasurer {
    fn natural_width(&self, text: &str, font_size_px: f32) -> f32;
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width in em of ASCII character `(i + 32)`, covering 0x20 (space)
/// through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`; control characters
    /// occupy no width.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else if c.is_control() {
                    0.0
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

impl TextMeasurer for FontMetricTable {
    fn natural_width(&self, text: &str, font_size_px: f32) -> f32 {
        self.measure_str(text) * font_size_px
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Garamond bold. Wide capitals, since the college line is upper-cased.
static GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.24, 0.29, 0.40, 0.52, 0.47, 0.80, 0.74, 0.20, 0.30, 0.30, 0.44, 0.56, 0.24, 0.30, 0.24, 0.40,
        // 0     1     2     3     4     5     6     7     8     9
        0.47, 0.47, 0.47, 0.47, 0.47, 0.47, 0.47, 0.47, 0.47, 0.47,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.56, 0.56, 0.56, 0.40, 0.86,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.70, 0.62, 0.68, 0.76, 0.62, 0.56, 0.74, 0.80, 0.36, 0.34, 0.72, 0.60, 0.92,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.78, 0.78, 0.58, 0.78, 0.66, 0.50, 0.64, 0.76, 0.70, 1.00, 0.70, 0.66, 0.64,
        // [     \     ]     ^     _     `
        0.30, 0.40, 0.30, 0.50, 0.50, 0.32,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.44, 0.50, 0.40, 0.52, 0.42, 0.30, 0.46, 0.54, 0.26, 0.26, 0.50, 0.26, 0.80,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.54, 0.50, 0.52, 0.50, 0.36, 0.36, 0.30, 0.54, 0.46, 0.70, 0.46, 0.46, 0.42,
        // {     |     }     ~
        0.40, 0.22, 0.40, 0.54,
    ],
    average_char_width: 0.48,
};

/// Brush Script MT. Narrow connected lowercase, swash capitals.
static BRUSH_SCRIPT_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.22, 0.22, 0.30, 0.44, 0.44, 0.60, 0.56, 0.16, 0.26, 0.26, 0.36, 0.50, 0.20, 0.26, 0.20, 0.30,
        // 0     1     2     3     4     5     6     7     8     9
        0.40, 0.40, 0.40, 0.40, 0.40, 0.40, 0.40, 0.40, 0.40, 0.40,
        // :     ;     <     =     >     ?     @
        0.20, 0.20, 0.50, 0.50, 0.50, 0.34, 0.74,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.58, 0.58, 0.46, 0.62, 0.46, 0.50, 0.56, 0.70, 0.42, 0.40, 0.62, 0.52, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.66, 0.52, 0.56, 0.54, 0.60, 0.48, 0.50, 0.62, 0.52, 0.76, 0.58, 0.54, 0.52,
        // [     \     ]     ^     _     `
        0.26, 0.30, 0.26, 0.44, 0.50, 0.28,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.38, 0.34, 0.30, 0.38, 0.30, 0.22, 0.36, 0.38, 0.20, 0.18, 0.36, 0.20, 0.58,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.40, 0.34, 0.38, 0.36, 0.30, 0.28, 0.22, 0.40, 0.34, 0.50, 0.34, 0.36, 0.30,
        // {     |     }     ~
        0.30, 0.20, 0.30, 0.50,
    ],
    average_char_width: 0.38,
};

/// Times New Roman, regular weight (Times-Roman AFM advance widths / 1000).
static TIMES_NEW_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.33, 0.41, 0.50, 0.50, 0.83, 0.78, 0.18, 0.33, 0.33, 0.50, 0.56, 0.25, 0.33, 0.25, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.56, 0.56, 0.56, 0.44, 0.92,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.67, 0.67, 0.72, 0.61, 0.56, 0.72, 0.72, 0.33, 0.39, 0.72, 0.61, 0.89,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.72, 0.56, 0.72, 0.67, 0.56, 0.61, 0.72, 0.72, 0.94, 0.72, 0.72, 0.61,
        // [     \     ]     ^     _     `
        0.33, 0.28, 0.33, 0.47, 0.50, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.44, 0.50, 0.44, 0.50, 0.44, 0.33, 0.50, 0.50, 0.28, 0.28, 0.50, 0.28, 0.78,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.50, 0.50, 0.50, 0.50, 0.33, 0.39, 0.28, 0.50, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.48, 0.20, 0.48, 0.54,
    ],
    average_char_width: 0.47,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Garamond => &GARAMOND_TABLE,
        FontFamily::BrushScript => &BRUSH_SCRIPT_TABLE,
        FontFamily::TimesNewRoman => &TIMES_NEW_ROMAN_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
