// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qualitative color tables and a per-figure color cycle.

use peniko::Color;
use peniko::color::palette::css;

/// A color from 8-bit channels.
#[must_use]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgba8(r, g, b, 255)
}

/// A color from a packed `0xRRGGBB` value. The top byte is ignored.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "each channel is masked to one byte"
)]
pub const fn rgb_hex(hex: u32) -> Color {
    rgb(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// Gray used for frames, ticks, gridlines, and legend borders.
pub const GUIDE_GRAY: Color = rgb(128, 128, 128);

/// Bright qualitative scheme.
pub const BRIGHT: [Color; 7] = [
    rgb_hex(0x4477AA),
    rgb_hex(0xEE6677),
    rgb_hex(0x228833),
    rgb_hex(0xCCBB44),
    rgb_hex(0x66CCEE),
    rgb_hex(0xAA3377),
    rgb_hex(0xBBBBBB),
];

/// Vibrant qualitative scheme.
pub const VIBRANT: [Color; 7] = [
    rgb_hex(0xEE7733),
    rgb_hex(0x0077BB),
    rgb_hex(0x33BBEE),
    rgb_hex(0xEE3377),
    rgb_hex(0xCC3311),
    rgb_hex(0x009988),
    rgb_hex(0xBBBBBB),
];

/// Muted qualitative scheme.
pub const MUTED: [Color; 8] = [
    rgb_hex(0xCC6677),
    rgb_hex(0x332288),
    rgb_hex(0xDDCC77),
    rgb_hex(0x117733),
    rgb_hex(0x88CCEE),
    rgb_hex(0x882255),
    rgb_hex(0x44AA99),
    rgb_hex(0x999933),
];

/// Light qualitative scheme.
pub const LIGHT: [Color; 9] = [
    rgb_hex(0x77AADD),
    rgb_hex(0xEE8866),
    rgb_hex(0xEEDD88),
    rgb_hex(0xFFAABB),
    rgb_hex(0x99DDFF),
    rgb_hex(0x44BB99),
    rgb_hex(0xBBCC33),
    rgb_hex(0xAAAA00),
    rgb_hex(0xDDDDDD),
];

/// Hands out colors from a table in order, wrapping around at the end.
///
/// Each figure owns its own cycle.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    colors: &'static [Color],
    next: usize,
}

impl ColorCycle {
    /// A cycle over `colors`.
    #[must_use]
    pub fn new(colors: &'static [Color]) -> Self {
        Self { colors, next: 0 }
    }

    /// Returns the next color. An empty table always yields black.
    pub fn next_color(&mut self) -> Color {
        let Some(color) = self.colors.get(self.next).copied() else {
            return css::BLACK;
        };
        self.next = (self.next + 1) % self.colors.len();
        color
    }

    /// Restarts from the first color.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(&BRIGHT)
    }
}
