// Sweep series JSONL recorder
// Outputs one JSON line per swept point for plotting outside the tool

use serde::Serialize;
use std::io::Write;

use roas_engine::Series;

#[derive(Debug, Serialize)]
pub struct PointRecord<'a> {
    pub series: &'a str,
    pub index: usize,
    pub input: f64,
    pub value: f64,
    pub above_reference: bool,
}

/// Write every point of the series to a JSONL file
pub fn write_jsonl(series: &Series, path: &std::path::Path) -> std::io::Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    for (index, point) in series.points.iter().enumerate() {
        let record = PointRecord {
            series: &series.name,
            index,
            input: point.input,
            value: point.value,
            above_reference: point.value >= series.reference_line,
        };
        let line = serde_json::to_string(&record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(series.len())
}
