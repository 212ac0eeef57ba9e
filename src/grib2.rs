use chrono::{DateTime, Utc};

/// Simplified GRIB2 record structure.
///
/// Placeholder for a future decoding layer; nothing populates these yet
/// and no binary parsing is performed.
#[derive(Debug, Clone, PartialEq)]
pub struct Grib2 {
    pub ref_time: DateTime<Utc>,
    pub verf_time: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub unit: String,
    pub level: String,
    pub values: Vec<Grib2Value>,
}

/// Single data point of a GRIB2 record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grib2Value {
    pub longitude: f64,
    pub latitude: f64,
    pub value: f32,
}
