//! Time-series CSV.

use std::io::Write;

use studio_session::ExperimentalSeries;

use crate::ExportError;

pub const HEADER: [&str; 6] = [
    "time_s",
    "thrust_n",
    "chamber_pressure_bar",
    "mass_flow_kg_s",
    "isp_s",
    "temperature_k",
];

/// Write one row per sample, preceded by [`HEADER`].
pub fn write_series<W: Write>(writer: W, series: &ExperimentalSeries) -> Result<(), ExportError> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for row in series.rows() {
        csv.write_record(row.iter().map(|v| format!("{v:.6}")))?;
    }
    csv.flush()?;
    Ok(())
}
