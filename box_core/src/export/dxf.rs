//! DXF drawing export.
//!
//! Writes an ASCII DXF (AutoCAD R12, `AC1009`) document containing only the
//! 2D panel geometry:
//!
//! | Entity | Layer | Count |
//! |---|---|---|
//! | closed `POLYLINE` (4 vertices) | `0` | 1 |
//! | `LINE` | `MARKING` | one per post |
//! | `CIRCLE` | `MARKING` | one per drill hole |
//!
//! Only R12 header variables are written; drawing units are millimetres by
//! convention since R12 has no units variable.
//!
//! The layer table gives `MARKING` color 1 (red) so cutting software can
//! toggle or recolor structural marks apart from the outline.

use std::fmt::Write as _;

use crate::errors::{BoxError, BoxResult};
use crate::geometry::{Point2, PanelGeometry};

/// Default layer carrying the panel outline
pub const OUTLINE_LAYER: &str = "0";
/// Layer carrying post lines and drill holes
pub const MARKING_LAYER: &str = "MARKING";

const OUTLINE_COLOR: i32 = 7;
const MARKING_COLOR: i32 = 1;

/// Group-code/value writer.
struct DxfWriter {
    out: String,
}

impl DxfWriter {
    fn new() -> Self {
        DxfWriter { out: String::new() }
    }

    fn text(&mut self, code: i32, value: &str) -> std::fmt::Result {
        write!(self.out, "{:>3}\n{}\n", code, value)
    }

    fn int(&mut self, code: i32, value: i32) -> std::fmt::Result {
        write!(self.out, "{:>3}\n{:>6}\n", code, value)
    }

    fn real(&mut self, code: i32, value: f64) -> std::fmt::Result {
        // fixed precision keeps output byte-stable across runs
        write!(self.out, "{:>3}\n{:.6}\n", code, value)
    }

    fn point(&mut self, base: i32, p: Point2) -> std::fmt::Result {
        self.real(base, p.x)?;
        self.real(base + 10, p.y)?;
        self.real(base + 20, 0.0)
    }

    fn begin_section(&mut self, name: &str) -> std::fmt::Result {
        self.text(0, "SECTION")?;
        self.text(2, name)
    }

    fn end_section(&mut self) -> std::fmt::Result {
        self.text(0, "ENDSEC")
    }

    fn header(&mut self, extent: Point2) -> std::fmt::Result {
        self.begin_section("HEADER")?;
        self.text(9, "$ACADVER")?;
        self.text(1, "AC1009")?;
        self.text(9, "$EXTMIN")?;
        self.point(10, Point2::new(0.0, 0.0))?;
        self.text(9, "$EXTMAX")?;
        self.point(10, extent)?;
        self.end_section()
    }

    fn tables(&mut self) -> std::fmt::Result {
        self.begin_section("TABLES")?;

        self.text(0, "TABLE")?;
        self.text(2, "LTYPE")?;
        self.int(70, 1)?;
        self.text(0, "LTYPE")?;
        self.text(2, "CONTINUOUS")?;
        self.int(70, 0)?;
        self.text(3, "Solid line")?;
        self.int(72, 65)?;
        self.int(73, 0)?;
        self.real(40, 0.0)?;
        self.text(0, "ENDTAB")?;

        self.text(0, "TABLE")?;
        self.text(2, "LAYER")?;
        self.int(70, 2)?;
        for (name, color) in [(OUTLINE_LAYER, OUTLINE_COLOR), (MARKING_LAYER, MARKING_COLOR)] {
            self.text(0, "LAYER")?;
            self.text(2, name)?;
            self.int(70, 0)?;
            self.int(62, color)?;
            self.text(6, "CONTINUOUS")?;
        }
        self.text(0, "ENDTAB")?;

        self.end_section()
    }

    fn closed_polyline(&mut self, layer: &str, vertices: &[Point2]) -> std::fmt::Result {
        self.text(0, "POLYLINE")?;
        self.text(8, layer)?;
        self.int(66, 1)?;
        self.int(70, 1)?;
        self.point(10, Point2::new(0.0, 0.0))?;
        for v in vertices {
            self.text(0, "VERTEX")?;
            self.text(8, layer)?;
            self.point(10, *v)?;
        }
        self.text(0, "SEQEND")?;
        self.text(8, layer)
    }

    fn line(&mut self, layer: &str, start: Point2, end: Point2) -> std::fmt::Result {
        self.text(0, "LINE")?;
        self.text(8, layer)?;
        self.point(10, start)?;
        self.point(11, end)
    }

    fn circle(&mut self, layer: &str, center: Point2, radius: f64) -> std::fmt::Result {
        self.text(0, "CIRCLE")?;
        self.text(8, layer)?;
        self.point(10, center)?;
        self.real(40, radius)
    }

    fn finish(mut self) -> Result<String, std::fmt::Error> {
        self.text(0, "EOF")?;
        Ok(self.out)
    }
}

fn write_document(panel: &PanelGeometry) -> Result<String, std::fmt::Error> {
    let mut w = DxfWriter::new();
    w.header(panel.outline[2])?;
    w.tables()?;

    w.begin_section("ENTITIES")?;
    w.closed_polyline(OUTLINE_LAYER, &panel.outline)?;
    for post in &panel.post_lines {
        w.line(MARKING_LAYER, post.start, post.end)?;
    }
    for hole in &panel.drill_holes {
        w.circle(MARKING_LAYER, hole.center, hole.radius_mm)?;
    }
    w.end_section()?;

    w.finish()
}

/// Encode the panel geometry as a complete DXF document.
pub fn encode_panel_dxf(panel: &PanelGeometry) -> BoxResult<Vec<u8>> {
    write_document(panel)
        .map(String::into_bytes)
        .map_err(|e| BoxError::export_error("dxf", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::emit_panel;
    use crate::input::BoxSpec;
    use crate::settings::DrillPattern;
    use crate::solver::solve;

    /// Minimal reader: entity type plus its group pairs
    struct Entity {
        kind: String,
        pairs: Vec<(i32, String)>,
    }

    impl Entity {
        fn layer(&self) -> Option<&str> {
            self.pairs
                .iter()
                .find(|(c, _)| *c == 8)
                .map(|(_, v)| v.as_str())
        }

        fn value(&self, code: i32) -> Option<&str> {
            self.pairs
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, v)| v.as_str())
        }
    }

    fn pairs(doc: &str) -> Vec<(i32, String)> {
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len() % 2, 0, "group codes and values must pair up");
        lines
            .chunks(2)
            .map(|c| (c[0].trim().parse().unwrap(), c[1].trim().to_string()))
            .collect()
    }

    fn entities(doc: &str) -> Vec<Entity> {
        let all = pairs(doc);
        let start = all
            .windows(2)
            .position(|w| w[0] == (0, "SECTION".into()) && w[1] == (2, "ENTITIES".into()))
            .unwrap();
        let mut out: Vec<Entity> = Vec::new();
        for (code, value) in all.into_iter().skip(start + 2) {
            if code == 0 {
                if value == "ENDSEC" {
                    break;
                }
                out.push(Entity {
                    kind: value,
                    pairs: Vec::new(),
                });
            } else if let Some(last) = out.last_mut() {
                last.pairs.push((code, value));
            }
        }
        out
    }

    fn reference_doc() -> String {
        let spec = BoxSpec::new(4200, 2100, 2100, 600, 1200);
        let layout = solve(&spec).unwrap();
        let panel = emit_panel(&spec, &layout, &DrillPattern::default());
        String::from_utf8(encode_panel_dxf(&panel).unwrap()).unwrap()
    }

    #[test]
    fn test_document_is_complete() {
        let doc = reference_doc();
        let all = pairs(&doc);
        assert_eq!(all.first(), Some(&(0, "SECTION".to_string())));
        assert_eq!(all.last(), Some(&(0, "EOF".to_string())));
        let sections: Vec<&str> = all
            .windows(2)
            .filter(|w| w[0].0 == 0 && w[0].1 == "SECTION")
            .map(|w| w[1].1.as_str())
            .collect();
        assert_eq!(sections, ["HEADER", "TABLES", "ENTITIES"]);
    }

    #[test]
    fn test_header_holds_only_r12_variables() {
        let doc = reference_doc();
        let vars: Vec<String> = pairs(&doc)
            .into_iter()
            .filter(|(code, _)| *code == 9)
            .map(|(_, name)| name)
            .collect();
        assert_eq!(vars, ["$ACADVER", "$EXTMIN", "$EXTMAX"]);
        assert!(!doc.contains("$INSUNITS"));
    }

    #[test]
    fn test_layer_table_declares_marking_in_red() {
        let doc = reference_doc();
        let all = pairs(&doc);
        let marking = all
            .iter()
            .position(|p| *p == (2, MARKING_LAYER.to_string()))
            .unwrap();
        assert_eq!(all[marking + 2], (62, "1".to_string()));
    }

    #[test]
    fn test_outline_is_single_closed_polyline() {
        let ents = entities(&reference_doc());
        let polylines: Vec<&Entity> = ents.iter().filter(|e| e.kind == "POLYLINE").collect();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].layer(), Some(OUTLINE_LAYER));
        assert_eq!(polylines[0].value(70), Some("1"));

        let vertices: Vec<&Entity> = ents.iter().filter(|e| e.kind == "VERTEX").collect();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[2].value(10), Some("4200.000000"));
        assert_eq!(vertices[2].value(20), Some("2100.000000"));
    }

    #[test]
    fn test_one_marking_line_per_post() {
        let ents = entities(&reference_doc());
        let lines: Vec<&Entity> = ents.iter().filter(|e| e.kind == "LINE").collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|e| e.layer() == Some(MARKING_LAYER)));
        assert_eq!(lines[7].value(10), Some("4200.000000"));
    }

    #[test]
    fn test_one_marking_circle_per_hole() {
        let ents = entities(&reference_doc());
        let circles: Vec<&Entity> = ents.iter().filter(|e| e.kind == "CIRCLE").collect();
        assert_eq!(circles.len(), 80);
        assert!(circles.iter().all(|e| e.layer() == Some(MARKING_LAYER)));
        assert!(circles.iter().all(|e| e.value(40) == Some("5.000000")));
        assert!(circles.iter().all(|e| e.value(20) != Some("2100.000000")));
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(reference_doc(), reference_doc());
    }
}
