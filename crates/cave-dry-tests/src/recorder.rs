// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording exporter for headless testing of the traversal.
//!
//! `RecordingExporter` writes nothing; it keeps the ordered list of calls so
//! tests can assert on pass filtering, date ordering and polyline breaks.

use cave_export_port::{
    ExportError, ExportPasses, HeaderInfo, LegDate, LegFlags, Point3, SurveyExporter,
};

/// One call received by a [`RecordingExporter`].
#[derive(Clone, Debug, PartialEq)]
pub enum ExportCall {
    /// `header` with the title it was given.
    Header {
        /// Title (None when the survey has none).
        title: Option<String>,
        /// Datestamp forwarded by the traversal.
        datestamp: Option<i64>,
    },
    /// `start_pass`.
    StartPass(ExportPasses),
    /// `set_leg_date`.
    SetLegDate(LegDate),
    /// `line`.
    Line {
        /// Start point.
        from: Point3,
        /// End point.
        to: Point3,
        /// Style bits.
        flags: LegFlags,
        /// Whether the leg starts a new polyline.
        starts_polyline: bool,
    },
    /// `label`.
    Label {
        /// Anchor.
        at: Point3,
        /// Label text.
        text: String,
    },
    /// `footer`.
    Footer,
}

/// Exporter that records calls instead of writing output.
#[derive(Debug)]
pub struct RecordingExporter {
    passes: &'static [ExportPasses],
    /// Calls in the order received.
    pub calls: Vec<ExportCall>,
}

impl RecordingExporter {
    /// Recorder requesting `passes`.
    pub fn new(passes: &'static [ExportPasses]) -> Self {
        Self {
            passes,
            calls: Vec::new(),
        }
    }

    /// Number of `line` calls received.
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ExportCall::Line { .. }))
            .count()
    }

    /// Number of `label` calls received.
    pub fn label_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ExportCall::Label { .. }))
            .count()
    }
}

impl SurveyExporter for RecordingExporter {
    fn passes(&self) -> &'static [ExportPasses] {
        self.passes
    }

    fn start_pass(&mut self, pass: ExportPasses) -> Result<(), ExportError> {
        self.calls.push(ExportCall::StartPass(pass));
        Ok(())
    }

    fn header(&mut self, info: &HeaderInfo<'_>) -> Result<(), ExportError> {
        self.calls.push(ExportCall::Header {
            title: info.title.map(str::to_string),
            datestamp: info.datestamp,
        });
        Ok(())
    }

    fn set_leg_date(&mut self, date: LegDate) {
        self.calls.push(ExportCall::SetLegDate(date));
    }

    fn line(
        &mut self,
        from: &Point3,
        to: &Point3,
        flags: LegFlags,
        starts_polyline: bool,
    ) -> Result<(), ExportError> {
        self.calls.push(ExportCall::Line {
            from: *from,
            to: *to,
            flags,
            starts_polyline,
        });
        Ok(())
    }

    fn label(&mut self, at: &Point3, text: &str) -> Result<(), ExportError> {
        self.calls.push(ExportCall::Label {
            at: *at,
            text: text.to_string(),
        });
        Ok(())
    }

    fn footer(&mut self) -> Result<(), ExportError> {
        self.calls.push(ExportCall::Footer);
        Ok(())
    }
}
