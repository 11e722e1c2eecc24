// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drive a [`SurveyExporter`] over a [`Survey`].

use tracing::{debug, trace};

use crate::{ExportError, ExportPasses, HeaderInfo, Point3, Survey, SurveyExporter};

/// Export `survey` through `exporter`: header, each requested pass, footer.
///
/// Legs are streamed in document order, filtered by the pass's categories.
/// The leg date is set before every leg. Station labels are delivered in any
/// pass that requests [`ExportPasses::STNS`] or [`ExportPasses::LABELS`].
pub fn export_survey<E>(exporter: &mut E, survey: &Survey) -> Result<(), ExportError>
where
    E: SurveyExporter + ?Sized,
{
    exporter.header(&HeaderInfo {
        title: survey.title.as_deref(),
        datestamp: survey.datestamp,
        bounds: survey.bounds(),
    })?;

    for &pass in exporter.passes() {
        debug!(pass = pass.bits(), "starting export pass");
        exporter.start_pass(pass)?;

        let mut pen: Option<Point3> = None;
        let mut emitted = 0_usize;
        for leg in survey.legs.iter().filter(|leg| pass.contains(leg.kind.pass())) {
            let starts_polyline = pen != Some(leg.from);
            trace!(date = leg.leg_date().to_raw(), starts_polyline, "leg");
            exporter.set_leg_date(leg.leg_date());
            exporter.line(&leg.from, &leg.to, leg.flags(), starts_polyline)?;
            pen = Some(leg.to);
            emitted += 1;
        }

        if pass.intersects(ExportPasses::STNS | ExportPasses::LABELS) {
            for station in &survey.stations {
                exporter.label(&station.position, &station.name)?;
            }
        }
        debug!(pass = pass.bits(), legs = emitted, "finished export pass");
    }

    exporter.footer()
}
