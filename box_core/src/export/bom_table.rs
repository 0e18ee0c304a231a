//! BOM table export.
//!
//! Columns: `part,specification,length_mm,width_mm,height_mm,quantity`.
//! Dimensions that do not apply to a part are left empty, so linear members
//! fill `length_mm` and sheets fill `width_mm`/`height_mm`.

use crate::bom::{Bom, BomLine};
use crate::errors::{BoxError, BoxResult};

/// Header row, in column order
pub const BOM_CSV_HEADER: [&str; 6] = [
    "part",
    "specification",
    "length_mm",
    "width_mm",
    "height_mm",
    "quantity",
];

/// Encode the BOM as CSV bytes (UTF-8, `\n` line endings).
///
/// ```rust
/// use box_core::bom::build_bom;
/// use box_core::catalog::PartCatalog;
/// use box_core::export::encode_bom_csv;
/// use box_core::input::BoxSpec;
/// use box_core::solver::solve;
///
/// let spec = BoxSpec::default();
/// let bom = build_bom(&spec, &solve(&spec).unwrap(), &PartCatalog::default());
/// let csv = String::from_utf8(encode_bom_csv(&bom).unwrap()).unwrap();
/// assert!(csv.starts_with("part,specification,length_mm,width_mm,height_mm,quantity\n"));
/// assert!(csv.contains("Side post,40x40x2.0 square tube,2100,,,16\n"));
/// ```
pub fn encode_bom_csv(bom: &Bom) -> BoxResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for line in &bom.lines {
        writer.serialize(line).map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| BoxError::export_error("csv", e.to_string()))
}

/// Parse CSV produced by [`encode_bom_csv`] back into BOM lines.
pub fn parse_bom_csv(bytes: &[u8]) -> BoxResult<Bom> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.iter().ne(BOM_CSV_HEADER.iter().copied()) {
        return Err(BoxError::export_error(
            "csv",
            format!(
                "unexpected header row '{}'",
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }

    let lines = reader
        .deserialize::<BomLine>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_error)?;
    Ok(Bom { lines })
}

fn csv_error(e: csv::Error) -> BoxError {
    BoxError::export_error("csv", e.to_string())
}
