//! Polyphenol measurement CSV reader
//!
//! Reads lab measurement sheets uploaded for polyphenol-based region
//! prediction. Header matching is case-insensitive: `region`, `grade` and
//! `sample` match exactly, while the absorbance and concentration columns
//! match by substring so headers like "Absorbance (au)" or "Polyphenol
//! Concentration (mg/ml)" work unchanged.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use teavision_domain::{LeafGrade, TeaRegion};

use crate::error::{ReportError, ReportResult};

/// One measurement row. Identity columns are optional; the two
/// measurements are required.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyphenolRow {
    pub sample: Option<String>,
    pub region: Option<String>,
    pub grade: Option<String>,
    pub absorbance: f64,
    pub concentration: f64,
}

impl PolyphenolRow {
    /// The region label parsed into the known region set, when it is one.
    pub fn region_kind(&self) -> Option<TeaRegion> {
        self.region.as_deref().and_then(TeaRegion::from_label)
    }

    /// The grade label parsed into the known grade set, when it is one.
    pub fn grade_kind(&self) -> Option<LeafGrade> {
        self.grade.as_deref().and_then(LeafGrade::from_token)
    }
}

/// Read polyphenol measurements from CSV.
///
/// Rows whose absorbance or concentration fail to parse as numbers are
/// skipped rather than failing the whole file; sheets often carry trailing
/// notes or partly-filled rows.
pub fn read_polyphenol_csv<R: Read>(reader: R) -> ReportResult<Vec<PolyphenolRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let find_exact =
        |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let find_containing = |needle: &str| {
        headers
            .iter()
            .position(|h| h.to_ascii_lowercase().contains(needle))
    };

    let sample_index = find_exact("sample");
    let region_index = find_exact("region");
    let grade_index = find_exact("grade");
    let absorbance_index =
        find_containing("absorbance").ok_or(ReportError::MissingColumn("absorbance"))?;
    let concentration_index =
        find_containing("concentration").ok_or(ReportError::MissingColumn("concentration"))?;

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;

        let absorbance = match numeric_cell(record.get(absorbance_index)) {
            Some(value) => value,
            None => continue,
        };
        let concentration = match numeric_cell(record.get(concentration_index)) {
            Some(value) => value,
            None => continue,
        };

        rows.push(PolyphenolRow {
            sample: text_cell(&record, sample_index),
            region: text_cell(&record, region_index),
            grade: text_cell(&record, grade_index),
            absorbance,
            concentration,
        });
    }

    Ok(rows)
}

/// Read polyphenol measurements from a CSV file.
pub fn read_polyphenol_file(path: impl AsRef<Path>) -> ReportResult<Vec<PolyphenolRow>> {
    let file = File::open(path)?;
    read_polyphenol_csv(BufReader::new(file))
}

fn numeric_cell(cell: Option<&str>) -> Option<f64> {
    cell?.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn text_cell(record: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
