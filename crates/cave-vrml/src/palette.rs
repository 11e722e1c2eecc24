// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Date-threshold colour schemes.

/// RGB colour, components nominally in `[0, 1]`.
pub type Rgb = [f64; 3];

/// Colours for legs either side of the date threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    /// Legs surveyed on or after the threshold.
    pub newer: Rgb,
    /// Legs surveyed before the threshold, or with no date.
    pub older: Rgb,
}

impl ColorScheme {
    /// Pick `newer` or `older`.
    pub const fn pick(&self, is_newer: bool) -> Rgb {
        if is_newer {
            self.newer
        } else {
            self.older
        }
    }
}

/// Selector for one of the fixed colour schemes.
///
/// The discriminant is the index stored in the user's settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ThresholdScheme {
    /// Red for newer, blue for older.
    #[default]
    RedBlue = 0,
    /// Green for newer, grey for older.
    GreenGrey = 1,
    /// Gold for newer, purple for older.
    GoldPurple = 2,
    /// Orange for newer, teal for older.
    OrangeTeal = 3,
}

impl ThresholdScheme {
    /// Every scheme, in index order.
    pub const ALL: [Self; 4] = [
        Self::RedBlue,
        Self::GreenGrey,
        Self::GoldPurple,
        Self::OrangeTeal,
    ];

    /// Scheme for a stored index, clamped into range.
    pub fn from_index_clamped(index: i64) -> Self {
        let last = Self::ALL.len() - 1;
        let clamped = usize::try_from(index.max(0)).map_or(last, |i| i.min(last));
        Self::ALL[clamped]
    }

    /// Index stored in the user's settings.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The colour pair.
    pub const fn colours(self) -> ColorScheme {
        match self {
            Self::RedBlue => ColorScheme {
                newer: [1.0, 0.2, 0.2],
                older: [0.2, 0.2, 1.0],
            },
            Self::GreenGrey => ColorScheme {
                newer: [0.2, 0.8, 0.2],
                older: [0.5, 0.5, 0.5],
            },
            Self::GoldPurple => ColorScheme {
                newer: [1.0, 0.8, 0.0],
                older: [0.5, 0.0, 0.8],
            },
            Self::OrangeTeal => ColorScheme {
                newer: [1.0, 0.5, 0.0],
                older: [0.0, 0.6, 0.8],
            },
        }
    }
}
