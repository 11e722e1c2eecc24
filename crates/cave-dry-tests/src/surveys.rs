// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Survey fixtures.

use cave_export_port::{Leg, LegKind, Point3, Station, Survey};

/// Builder for a single [`Leg`].
///
/// # Example
///
/// ```
/// use cave_dry_tests::leg;
/// use cave_export_port::LegKind;
///
/// let l = leg([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]).date(9).kind(LegKind::Splay).build();
/// assert_eq!(l.date, Some(9));
/// ```
#[derive(Clone, Debug)]
pub struct LegBuilder {
    leg: Leg,
}

impl LegBuilder {
    /// Set the survey day number.
    pub fn date(mut self, day: i32) -> Self {
        self.leg.date = Some(day);
        self
    }

    /// Set the leg kind.
    pub fn kind(mut self, kind: LegKind) -> Self {
        self.leg.kind = kind;
        self
    }

    /// Mark the leg as a duplicate.
    pub fn duplicate(mut self) -> Self {
        self.leg.duplicate = true;
        self
    }

    /// Finish.
    pub fn build(self) -> Leg {
        self.leg
    }
}

/// Start building an undated underground leg.
pub fn leg(from: [f64; 3], to: [f64; 3]) -> LegBuilder {
    LegBuilder {
        leg: Leg {
            from: Point3::from(from),
            to: Point3::from(to),
            date: None,
            kind: LegKind::Underground,
            duplicate: false,
        },
    }
}

/// Survey titled `title` with the given legs and no stations.
pub fn survey_with_legs(title: &str, legs: Vec<Leg>) -> Survey {
    Survey {
        title: Some(title.to_string()),
        legs,
        ..Survey::default()
    }
}

/// Connected underground traverse, a surface leg, a splay, and two stations.
///
/// Dates: underground legs 9 and 10, surface leg unknown, splay 11.
pub fn three_kinds_survey() -> Survey {
    Survey {
        title: Some("Three kinds".to_string()),
        datestamp: Some(1_700_000_000),
        legs: vec![
            leg([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]).date(9).build(),
            leg([1.0, 2.0, 3.0], [2.0, 2.0, 2.0]).date(10).build(),
            leg([5.0, 5.0, 5.0], [6.0, 5.0, 5.0])
                .kind(LegKind::Surface)
                .build(),
            leg([2.0, 2.0, 2.0], [2.5, 2.0, 2.0])
                .date(11)
                .kind(LegKind::Splay)
                .build(),
        ],
        stations: vec![
            Station {
                position: Point3::new(0.0, 0.0, 0.0),
                name: "cave.1".to_string(),
            },
            Station {
                position: Point3::new(2.0, 2.0, 2.0),
                name: "cave.3".to_string(),
            },
        ],
    }
}
