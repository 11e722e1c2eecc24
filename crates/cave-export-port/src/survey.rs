// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Minimal survey document consumed by the traversal.
//!
//! This is only the already-reduced geometry (legs, stations, dates); loop
//! closure and coordinate reduction happen upstream.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{Bounds3, ExportPasses, LegDate, LegFlags, Point3, SurveyError};

/// Category of a leg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    /// Leg surveyed underground.
    #[default]
    Underground,
    /// Leg surveyed on the surface.
    Surface,
    /// Splay shot.
    Splay,
}

impl LegKind {
    /// Pass category that delivers legs of this kind.
    pub const fn pass(self) -> ExportPasses {
        match self {
            Self::Underground => ExportPasses::LEGS,
            Self::Surface => ExportPasses::SURF,
            Self::Splay => ExportPasses::SPLAYS,
        }
    }
}

/// One surveyed line segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Start point.
    pub from: Point3,
    /// End point.
    pub to: Point3,
    /// Survey day number; absent or `-1` means unknown.
    #[serde(default)]
    pub date: Option<i32>,
    /// Leg category.
    #[serde(default)]
    pub kind: LegKind,
    /// Leg re-surveys passage covered elsewhere.
    #[serde(default)]
    pub duplicate: bool,
}

impl Leg {
    /// Date in the form writers consume.
    pub fn leg_date(&self) -> LegDate {
        LegDate::from(self.date)
    }

    /// Style bits derived from the kind and duplicate marker.
    pub fn flags(&self) -> LegFlags {
        let kind = match self.kind {
            LegKind::Underground => LegFlags::NONE,
            LegKind::Surface => LegFlags::SURFACE,
            LegKind::Splay => LegFlags::SPLAY,
        };
        if self.duplicate {
            kind | LegFlags::DUPLICATE
        } else {
            kind
        }
    }
}

/// A named survey station.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station position.
    pub position: Point3,
    /// Fully qualified station name.
    pub name: String,
}

/// Reduced survey ready for export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Survey title.
    #[serde(default)]
    pub title: Option<String>,
    /// Seconds since the Unix epoch the data was processed.
    #[serde(default)]
    pub datestamp: Option<i64>,
    /// Legs in traversal order.
    #[serde(default)]
    pub legs: Vec<Leg>,
    /// Stations.
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl Survey {
    /// Parse a survey from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, SurveyError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a survey from a JSON byte stream.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SurveyError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Extent of every leg end point and station.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::enclosing(
            self.legs
                .iter()
                .flat_map(|leg| [&leg.from, &leg.to])
                .chain(self.stations.iter().map(|s| &s.position)),
        )
    }
}
