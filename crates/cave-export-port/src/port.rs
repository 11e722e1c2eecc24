// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Exporter trait defining the writer contract.

use crate::{ExportError, ExportPasses, HeaderInfo, LegDate, LegFlags, Point3};

/// Survey export writer.
///
/// The traversal ([`export_survey`](crate::export_survey)) drives an
/// implementor through one session:
///
/// 1. [`header`](Self::header) once;
/// 2. for each entry of [`passes`](Self::passes): [`start_pass`](Self::start_pass),
///    then interleaved [`set_leg_date`](Self::set_leg_date), [`line`](Self::line)
///    and [`label`](Self::label) calls;
/// 3. [`footer`](Self::footer) once.
///
/// Implementors are not required to detect out-of-order calls.
pub trait SurveyExporter {
    /// Geometry categories to deliver, one entry per pass, in order.
    fn passes(&self) -> &'static [ExportPasses];

    /// Called at the start of each pass. Most formats ignore it.
    fn start_pass(&mut self, _pass: ExportPasses) -> Result<(), ExportError> {
        Ok(())
    }

    /// Write whatever the format needs before any geometry.
    fn header(&mut self, info: &HeaderInfo<'_>) -> Result<(), ExportError>;

    /// Set the survey date of the legs that follow.
    fn set_leg_date(&mut self, date: LegDate);

    /// Write one leg from `from` to `to`.
    ///
    /// `starts_polyline` is false when `from` is the previous leg's end point.
    fn line(
        &mut self,
        from: &Point3,
        to: &Point3,
        flags: LegFlags,
        starts_polyline: bool,
    ) -> Result<(), ExportError>;

    /// Write a text label anchored at `at`.
    fn label(&mut self, at: &Point3, text: &str) -> Result<(), ExportError>;

    /// Write whatever the format needs after all geometry.
    fn footer(&mut self) -> Result<(), ExportError>;
}
