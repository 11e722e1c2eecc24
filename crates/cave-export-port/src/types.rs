// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core value types shared by the traversal and the writers.

use core::ops::BitOr;

use serde::{Deserialize, Serialize};

/// A survey point in world space (metres, east/north/up).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point3 {
    /// Easting.
    pub x: f64,
    /// Northing.
    pub y: f64,
    /// Altitude.
    pub z: f64,
}

impl Point3 {
    /// Build a point from its three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

/// Axis-aligned box enclosing the exported geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Bounds3 {
    /// Smallest box containing every point; all zeros when `points` is empty.
    pub fn enclosing<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        iter.fold(
            Self {
                min: *first,
                max: *first,
            },
            |b, p| Self {
                min: Point3::new(b.min.x.min(p.x), b.min.y.min(p.y), b.min.z.min(p.z)),
                max: Point3::new(b.max.x.max(p.x), b.max.y.max(p.y), b.max.z.max(p.z)),
            },
        )
    }
}

/// Survey date attached to the leg currently being drawn.
///
/// Dates are day numbers. The raw value `-1` is the "no date recorded"
/// sentinel and maps to [`LegDate::Unknown`]; `Day(-1)` is read the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegDate {
    /// No survey date is known for the leg.
    #[default]
    Unknown,
    /// Day number the leg was surveyed on.
    Day(i32),
}

impl LegDate {
    /// Raw sentinel meaning "unknown".
    pub const UNKNOWN_RAW: i32 = -1;

    /// Decode a raw day number, honouring the `-1` sentinel.
    pub const fn from_raw(raw: i32) -> Self {
        if raw == Self::UNKNOWN_RAW {
            Self::Unknown
        } else {
            Self::Day(raw)
        }
    }

    /// Encode back to a raw day number.
    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Unknown => Self::UNKNOWN_RAW,
            Self::Day(day) => day,
        }
    }

    /// True when no date is recorded, including `Day(-1)`.
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown | Self::Day(Self::UNKNOWN_RAW))
    }

    /// True for a known date on or after `threshold`. Unknown dates never are.
    pub const fn is_on_or_after(self, threshold: i32) -> bool {
        match self {
            Self::Unknown => false,
            Self::Day(day) => day != Self::UNKNOWN_RAW && day >= threshold,
        }
    }
}

impl From<Option<i32>> for LegDate {
    fn from(raw: Option<i32>) -> Self {
        raw.map_or(Self::Unknown, Self::from_raw)
    }
}

/// Per-leg style bits handed to [`line`](crate::SurveyExporter::line).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LegFlags(u32);

impl LegFlags {
    /// Plain underground leg.
    pub const NONE: Self = Self(0);
    /// Leg surveyed on the surface.
    pub const SURFACE: Self = Self(0x01);
    /// Leg duplicates another survey of the same passage.
    pub const DUPLICATE: Self = Self(0x02);
    /// Splay shot (passage wall measurement).
    pub const SPLAY: Self = Self(0x04);

    /// Raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LegFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Categories of geometry a writer asks the traversal to deliver in one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExportPasses(u32);

impl ExportPasses {
    /// Underground legs.
    pub const LEGS: Self = Self(0x01);
    /// Surface legs.
    pub const SURF: Self = Self(0x02);
    /// Splay shots.
    pub const SPLAYS: Self = Self(0x04);
    /// Station markers.
    pub const STNS: Self = Self(0x08);
    /// Station name labels.
    pub const LABELS: Self = Self(0x10);

    /// No categories.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Categories of both `self` and `other`; usable in `const` contexts.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when no category is requested.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every category of `other` is requested.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when at least one category of `other` is requested.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for ExportPasses {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Arguments to [`header`](crate::SurveyExporter::header).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderInfo<'a> {
    /// Survey title; `None` writes an empty title.
    pub title: Option<&'a str>,
    /// Seconds since the Unix epoch the survey data was produced, if known.
    pub datestamp: Option<i64>,
    /// Extent of the exported geometry.
    pub bounds: Bounds3,
}
