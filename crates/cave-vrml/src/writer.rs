// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The VRML 2.0 writer.

use std::io::Write;

use cave_app_core::SettingsPort;
use cave_export_port::{
    ExportError, ExportPasses, HeaderInfo, LegDate, LegFlags, Point3, SurveyExporter,
};
use tracing::{debug, trace};

use crate::escape::write_escaped;
use crate::palette::Rgb;
use crate::settings::ExportConfig;

/// Legs, surface legs and splays, all delivered in a single pass.
pub static VRML_PASSES: [ExportPasses; 1] = [ExportPasses::LEGS
    .union(ExportPasses::SURF)
    .union(ExportPasses::SPLAYS)];

/// Where a [`VrmlExporter`] is in its session.
///
/// Tracked for inspection only; the writer does not reject out-of-order calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing written yet.
    #[default]
    Unopened,
    /// Header written, no legs yet.
    HeaderWritten,
    /// At least one leg written.
    Emitting,
    /// Footer written.
    Closed,
}

/// Writes survey legs as VRML `Shape` nodes, coloured by survey date.
///
/// One writer serves one export session; it owns the sink until
/// [`into_inner`](Self::into_inner). Nothing is buffered here beyond what the
/// sink itself does.
#[derive(Debug)]
pub struct VrmlExporter<W> {
    out: W,
    config: ExportConfig,
    current_date: LegDate,
    state: SessionState,
    shapes: u64,
}

impl<W: Write> VrmlExporter<W> {
    /// Writer whose settings are read from `settings` (defaults when `None`).
    pub fn new(out: W, settings: Option<&dyn SettingsPort>) -> Self {
        Self::with_config(out, ExportConfig::resolve(settings))
    }

    /// Writer with already-resolved settings.
    pub fn with_config(out: W, config: ExportConfig) -> Self {
        Self {
            out,
            config,
            current_date: LegDate::Unknown,
            state: SessionState::Unopened,
            shapes: 0,
        }
    }

    /// Settings in effect.
    pub fn config(&self) -> ExportConfig {
        self.config
    }

    /// Session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Date applied to the next leg.
    pub fn current_date(&self) -> LegDate {
        self.current_date
    }

    /// Number of shapes written so far.
    pub fn shapes_written(&self) -> u64 {
        self.shapes
    }

    /// Colour a leg dated `date` would be drawn in.
    pub fn colour_for(&self, date: LegDate) -> Rgb {
        let is_newer = date.is_on_or_after(self.config.date_threshold);
        self.config.scheme.colours().pick(is_newer)
    }

    /// Borrow the sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Release the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_shape(&mut self, from: &Point3, to: &Point3) -> std::io::Result<()> {
        let [r, g, b] = self.colour_for(self.current_date);
        let out = &mut self.out;
        writeln!(out, "Shape {{")?;
        writeln!(out, "  appearance Appearance {{")?;
        writeln!(out, "    material Material {{ emissiveColor {r:.3} {g:.3} {b:.3} }}")?;
        writeln!(out, "  }}")?;
        writeln!(out, "  geometry IndexedLineSet {{")?;
        writeln!(out, "    coord Coordinate {{")?;
        writeln!(
            out,
            "      point [ {:.3} {:.3} {:.3}, {:.3} {:.3} {:.3} ]",
            from.x, from.y, from.z, to.x, to.y, to.z
        )?;
        writeln!(out, "    }}")?;
        writeln!(out, "    coordIndex [ 0, 1, -1 ]")?;
        writeln!(out, "  }}")?;
        writeln!(out, "}}")
    }
}

impl<W: Write> SurveyExporter for VrmlExporter<W> {
    fn passes(&self) -> &'static [ExportPasses] {
        &VRML_PASSES
    }

    fn header(&mut self, info: &HeaderInfo<'_>) -> Result<(), ExportError> {
        debug!(
            date_threshold = self.config.date_threshold,
            scheme = self.config.scheme.index(),
            "writing VRML header"
        );
        self.out.write_all(b"#VRML V2.0 utf8\n")?;
        self.out.write_all(b"WorldInfo { title \"")?;
        if let Some(title) = info.title {
            write_escaped(&mut self.out, title)?;
        }
        self.out.write_all(b"\" }\n")?;
        self.out
            .write_all(b"NavigationInfo { type [\"EXAMINE\", \"ANY\"] }\n")?;
        self.state = SessionState::HeaderWritten;
        Ok(())
    }

    fn set_leg_date(&mut self, date: LegDate) {
        self.current_date = date;
    }

    fn line(
        &mut self,
        from: &Point3,
        to: &Point3,
        _flags: LegFlags,
        _starts_polyline: bool,
    ) -> Result<(), ExportError> {
        self.write_shape(from, to)?;
        self.shapes += 1;
        self.state = SessionState::Emitting;
        Ok(())
    }

    fn label(&mut self, _at: &Point3, text: &str) -> Result<(), ExportError> {
        trace!(text, "VRML export ignores labels");
        Ok(())
    }

    fn footer(&mut self) -> Result<(), ExportError> {
        debug!(shapes = self.shapes, "VRML export complete");
        self.state = SessionState::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ThresholdScheme;
    use std::io;

    const HEADER: &str = "#VRML V2.0 utf8\n\
                          WorldInfo { title \"Test\" }\n\
                          NavigationInfo { type [\"EXAMINE\", \"ANY\"] }\n";

    fn shape(colour: &str, points: &str) -> String {
        format!(
            "Shape {{\n  appearance Appearance {{\n    material Material {{ emissiveColor {colour} }}\n  }}\n  geometry IndexedLineSet {{\n    coord Coordinate {{\n      point [ {points} ]\n    }}\n    coordIndex [ 0, 1, -1 ]\n  }}\n}}\n"
        )
    }

    fn writer(threshold: i32, scheme: ThresholdScheme) -> VrmlExporter<Vec<u8>> {
        VrmlExporter::with_config(Vec::new(), ExportConfig::new(threshold, scheme))
    }

    fn titled(title: &str) -> HeaderInfo<'_> {
        HeaderInfo {
            title: Some(title),
            ..HeaderInfo::default()
        }
    }

    #[test]
    fn header_bytes() {
        let mut w = writer(0, ThresholdScheme::RedBlue);
        w.header(&titled("Test")).unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), HEADER);
    }

    #[test]
    fn missing_title_is_empty_string() {
        let mut w = writer(0, ThresholdScheme::RedBlue);
        w.header(&HeaderInfo::default()).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert!(text.contains("WorldInfo { title \"\" }\n"));
    }

    #[test]
    fn title_is_escaped() {
        let mut w = writer(0, ThresholdScheme::RedBlue);
        w.header(&titled(r#"He said "hi"\now"#)).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert!(text.contains(r#"WorldInfo { title "He said \"hi\"\\now" }"#));
    }

    #[test]
    fn fixed_scenario_exact_bytes() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(1.0, 2.0, 3.0);
        let points = "0.000 0.000 0.000, 1.000 2.000 3.000";
        for (date, colour) in [
            (LegDate::Day(9), "0.200 0.200 1.000"),
            (LegDate::Day(10), "1.000 0.200 0.200"),
            (LegDate::from_raw(-1), "0.200 0.200 1.000"),
        ] {
            let mut w = writer(10, ThresholdScheme::RedBlue);
            w.set_leg_date(date);
            w.line(&p1, &p2, LegFlags::NONE, true).unwrap();
            assert_eq!(
                String::from_utf8(w.into_inner()).unwrap(),
                shape(colour, points),
                "date {date:?}"
            );
        }
    }

    #[test]
    fn raw_unknown_day_is_older_even_below_a_negative_threshold() {
        let mut w = writer(-5, ThresholdScheme::RedBlue);
        w.set_leg_date(LegDate::Day(-1));
        w.line(&Point3::default(), &Point3::new(1.0, 0.0, 0.0), LegFlags::NONE, true)
            .unwrap();
        assert_eq!(
            String::from_utf8(w.into_inner()).unwrap(),
            shape("0.200 0.200 1.000", "0.000 0.000 0.000, 1.000 0.000 0.000")
        );

        let w = writer(-5, ThresholdScheme::RedBlue);
        assert_eq!(w.colour_for(LegDate::Day(-2)), ThresholdScheme::RedBlue.colours().newer);
    }

    #[test]
    fn negative_and_fractional_coordinates_use_three_decimals() {
        let mut w = writer(0, ThresholdScheme::OrangeTeal);
        w.set_leg_date(LegDate::Day(5));
        w.line(
            &Point3::new(-12.3456, 0.0005, 1e6),
            &Point3::new(0.1, -0.25, 7.0),
            LegFlags::SPLAY,
            false,
        )
        .unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert!(text.contains("emissiveColor 1.000 0.500 0.000"));
        assert!(text.contains("point [ -12.346 0.001 1000000.000, 0.100 -0.250 7.000 ]"));
    }

    #[test]
    fn style_arguments_do_not_change_output() {
        let render = |flags, starts| {
            let mut w = writer(0, ThresholdScheme::GreenGrey);
            w.set_leg_date(LegDate::Day(1));
            w.line(&Point3::new(1.0, 1.0, 1.0), &Point3::default(), flags, starts)
                .unwrap();
            w.into_inner()
        };
        let plain = render(LegFlags::NONE, true);
        assert_eq!(plain, render(LegFlags::SURFACE | LegFlags::DUPLICATE, false));
        assert_eq!(plain, render(LegFlags::SPLAY, true));
    }

    #[test]
    fn date_persists_until_changed() {
        let mut w = writer(10, ThresholdScheme::RedBlue);
        assert_eq!(w.current_date(), LegDate::Unknown);
        w.set_leg_date(LegDate::Day(12));
        w.line(&Point3::default(), &Point3::default(), LegFlags::NONE, true)
            .unwrap();
        w.line(&Point3::default(), &Point3::default(), LegFlags::NONE, false)
            .unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(text.matches("emissiveColor 1.000 0.200 0.200").count(), 2);
    }

    #[test]
    fn state_machine_progression() {
        let mut w = writer(0, ThresholdScheme::RedBlue);
        assert_eq!(w.state(), SessionState::Unopened);
        w.header(&titled("Test")).unwrap();
        assert_eq!(w.state(), SessionState::HeaderWritten);
        w.set_leg_date(LegDate::Day(3));
        assert_eq!(w.state(), SessionState::HeaderWritten);
        w.line(&Point3::default(), &Point3::default(), LegFlags::NONE, true)
            .unwrap();
        assert_eq!(w.state(), SessionState::Emitting);
        assert_eq!(w.shapes_written(), 1);
        w.footer().unwrap();
        assert_eq!(w.state(), SessionState::Closed);
    }

    #[test]
    fn footer_and_labels_write_nothing() {
        let mut w = writer(0, ThresholdScheme::RedBlue);
        w.header(&titled("Test")).unwrap();
        let before = w.get_ref().len();
        w.label(&Point3::new(1.0, 2.0, 3.0), "stn \"1\"").unwrap();
        w.footer().unwrap();
        assert_eq!(w.get_ref().len(), before);
    }

    #[test]
    fn single_combined_pass() {
        let w = writer(0, ThresholdScheme::RedBlue);
        assert_eq!(w.passes().len(), 1);
        let pass = w.passes()[0];
        assert!(pass.contains(ExportPasses::LEGS));
        assert!(pass.contains(ExportPasses::SURF));
        assert!(pass.contains(ExportPasses::SPLAYS));
        assert!(!pass.intersects(ExportPasses::STNS | ExportPasses::LABELS));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failures_surface_as_export_errors() {
        let mut w = VrmlExporter::with_config(FullDisk, ExportConfig::default());
        assert!(matches!(
            w.header(&titled("Test")),
            Err(ExportError::Io(_))
        ));
        assert!(matches!(
            w.line(&Point3::default(), &Point3::default(), LegFlags::NONE, true),
            Err(ExportError::Io(_))
        ));
        assert_eq!(w.shapes_written(), 0);
    }
}
