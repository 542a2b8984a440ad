//! Small bodies from JPL Small-Body Database (SBDB) query responses.
//!
//! A response looks like
//! `{"fields": ["full_name", "e", "a", "q", "om", "w", "i", "tp"], "data": [[...], ...]}`
//! with each value a string (SBDB's default) or a number. The catalogue file
//! the orrery reads maps group names to responses:
//! `{"neo": {...}, "pha": {...}}`. Missing groups are empty.

use std::collections::BTreeMap;
use std::path::Path;

use orrery_orbits::OrbitalElements;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Errors while reading a small-body catalogue.
#[derive(Debug, Error)]
pub enum SbdbError {
    #[error("failed to read small-body catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed SBDB JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A response with data rows lacks a column the solver needs.
    #[error("SBDB response has no `{0}` column")]
    MissingColumn(&'static str),
}

/// The SBDB groups the orrery shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SmallBodyGroup {
    /// Near-Earth objects.
    Neo,
    /// Potentially hazardous asteroids.
    Pha,
}

impl SmallBodyGroup {
    pub const ALL: [SmallBodyGroup; 2] = [SmallBodyGroup::Neo, SmallBodyGroup::Pha];

    /// Key in the catalogue file and value of SBDB's `sb-group` filter.
    pub fn key(self) -> &'static str {
        match self {
            SmallBodyGroup::Neo => "neo",
            SmallBodyGroup::Pha => "pha",
        }
    }

    /// Query string that fetches this group from the SBDB query API.
    pub fn query(self) -> String {
        format!(
            "fields={}&sb-group={}&limit=500",
            COLUMNS.join(","),
            self.key()
        )
    }

    /// Linear RGB glow tint.
    pub fn glow_color(self) -> [f32; 3] {
        match self {
            // light blue
            SmallBodyGroup::Neo => [0.678, 0.847, 0.902],
            // hazard orange
            SmallBodyGroup::Pha => [1.0, 0.2, 0.0],
        }
    }
}

/// Columns requested from SBDB, in query order.
pub const COLUMNS: [&str; 8] = ["full_name", "e", "a", "q", "om", "w", "i", "tp"];

/// One parsed small body.
#[derive(Clone, Debug, PartialEq)]
pub struct SmallBody {
    pub name: String,
    pub group: SmallBodyGroup,
    pub elements: OrbitalElements,
}

/// Raw SBDB query response.
#[derive(Debug, Default, Deserialize)]
pub struct SbdbResponse {
    #[serde(default)]
    pub fields: Vec<String>,
    /// SBDB omits `data` entirely when nothing matched.
    #[serde(default)]
    pub data: Option<Vec<Vec<Value>>>,
}

struct ColumnIndex {
    name: usize,
    e: usize,
    a: usize,
    i: usize,
    om: usize,
    w: usize,
    tp: usize,
}

impl ColumnIndex {
    fn from_fields(fields: &[String]) -> Result<Self, SbdbError> {
        let find = |column: &'static str| {
            fields
                .iter()
                .position(|f| f == column)
                .ok_or(SbdbError::MissingColumn(column))
        };
        Ok(Self {
            name: find("full_name")?,
            e: find("e")?,
            a: find("a")?,
            i: find("i")?,
            om: find("om")?,
            w: find("w")?,
            tp: find("tp")?,
        })
    }
}

fn number(row: &[Value], index: usize) -> Option<f64> {
    match row.get(index)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl SbdbResponse {
    /// Parse a response body.
    pub fn from_json(json: &str) -> Result<Self, SbdbError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert every usable row into a [`SmallBody`] of `group`.
    ///
    /// Rows with missing or unparseable values, or elements the solver
    /// rejects (hyperbolic comets), are skipped with a warning.
    pub fn into_bodies(self, group: SmallBodyGroup) -> Result<Vec<SmallBody>, SbdbError> {
        let rows = match self.data {
            Some(rows) if !rows.is_empty() => rows,
            _ => return Ok(Vec::new()),
        };
        let columns = ColumnIndex::from_fields(&self.fields)?;

        let mut bodies = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let name = match row.get(columns.name) {
                Some(Value::String(s)) => s.trim().to_string(),
                _ => format!("{} #{row_index}", group.key()),
            };
            let values = (
                number(row, columns.e),
                number(row, columns.a),
                number(row, columns.i),
                number(row, columns.om),
                number(row, columns.w),
                number(row, columns.tp),
            );
            let (Some(e), Some(a), Some(i), Some(om), Some(w), Some(tp)) = values else {
                warn!(body = %name, group = group.key(), "skipping SBDB row with missing elements");
                continue;
            };
            match OrbitalElements::new(e, a, i, om, w, tp) {
                Ok(elements) => bodies.push(SmallBody {
                    name,
                    group,
                    elements,
                }),
                Err(err) => {
                    warn!(body = %name, group = group.key(), %err, "skipping SBDB row");
                }
            }
        }
        Ok(bodies)
    }
}

/// Parse a catalogue (`{"neo": response, "pha": response}`) from JSON.
pub fn parse_catalogue(json: &str) -> Result<Vec<SmallBody>, SbdbError> {
    let mut groups: BTreeMap<String, SbdbResponse> = serde_json::from_str(json)?;
    let mut bodies = Vec::new();
    for group in SmallBodyGroup::ALL {
        if let Some(response) = groups.remove(group.key()) {
            bodies.extend(response.into_bodies(group)?);
        }
    }
    for unknown in groups.keys() {
        warn!(group = %unknown, "ignoring unknown small-body group");
    }
    Ok(bodies)
}

/// Read and parse a catalogue file.
pub fn load_catalogue(path: &Path) -> Result<Vec<SmallBody>, SbdbError> {
    let json = std::fs::read_to_string(path)?;
    let bodies = parse_catalogue(&json)?;
    info!(path = %path.display(), count = bodies.len(), "loaded small bodies");
    Ok(bodies)
}

/// Glow intensity of a small body `distance_au` from Earth: `1 / d`.
/// Zero or non-finite distances give no glow.
pub fn glow_intensity(distance_au: f64) -> f32 {
    if distance_au.is_finite() && distance_au > 0.0 {
        (1.0 / distance_au) as f32
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EROS: &str = r#"{
        "signature": {"source": "NASA/JPL Small-Body Database (SBDB) Query API", "version": "1.0"},
        "count": 2,
        "fields": ["full_name", "e", "a", "q", "om", "w", "i", "tp"],
        "data": [
            ["   433 Eros (A898 PA)", ".2228", "1.458", "1.133", "304.3", "178.9", "10.83", "2459802.6"],
            ["  1566 Icarus (1949 MA)", 0.8270, 1.078, 0.1865, 87.95, 31.43, 22.80, 2459751.9]
        ]
    }"#;

    #[test]
    fn test_parses_string_and_number_values() {
        let bodies = SbdbResponse::from_json(EROS)
            .unwrap()
            .into_bodies(SmallBodyGroup::Neo)
            .unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].name, "433 Eros (A898 PA)");
        assert!((bodies[0].elements.eccentricity - 0.2228).abs() < 1e-12);
        assert!((bodies[1].elements.semi_major_axis_au - 1.078).abs() < 1e-12);
        assert!((bodies[1].elements.perihelion_passage_jd - 2459751.9).abs() < 1e-6);
        assert_eq!(bodies[1].group, SmallBodyGroup::Neo);
    }

    #[test]
    fn test_column_order_follows_fields() {
        let json = r#"{"fields": ["tp", "i", "w", "om", "a", "e", "full_name"],
                       "data": [["2451545.0", "5", "10", "20", "2.0", "0.1", "Reordered"]]}"#;
        let bodies = SbdbResponse::from_json(json)
            .unwrap()
            .into_bodies(SmallBodyGroup::Pha)
            .unwrap();
        assert_eq!(bodies[0].name, "Reordered");
        assert!((bodies[0].elements.semi_major_axis_au - 2.0).abs() < 1e-12);
        assert!((bodies[0].elements.inclination_deg - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_or_missing_data_yields_nothing() {
        for json in [r#"{"fields": [], "data": []}"#, r#"{"count": 0}"#, "{}"] {
            let bodies = SbdbResponse::from_json(json)
                .unwrap()
                .into_bodies(SmallBodyGroup::Neo)
                .unwrap();
            assert!(bodies.is_empty(), "{json} should yield no bodies");
        }
    }

    #[test]
    fn test_missing_column_is_error() {
        let json = r#"{"fields": ["full_name", "e"], "data": [["x", "0.1"]]}"#;
        let result = SbdbResponse::from_json(json)
            .unwrap()
            .into_bodies(SmallBodyGroup::Neo);
        assert!(matches!(result, Err(SbdbError::MissingColumn("a"))));
    }

    #[test]
    fn test_bad_rows_skipped() {
        let json = r#"{"fields": ["full_name", "e", "a", "q", "om", "w", "i", "tp"],
                       "data": [
                           ["Hyperbolic", "1.2", "-3.0", "0.5", "0", "0", "0", "2451545"],
                           ["Garbled", "abc", "1.0", "0.5", "0", "0", "0", "2451545"],
                           ["Short", "0.1"],
                           ["Fine", "0.1", "1.5", "1.35", "0", "0", "0", "2451545"]
                       ]}"#;
        let bodies = SbdbResponse::from_json(json)
            .unwrap()
            .into_bodies(SmallBodyGroup::Neo)
            .unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name, "Fine");
    }

    #[test]
    fn test_catalogue_groups() {
        let json = format!(r#"{{"neo": {EROS}, "pha": {{"fields": [], "data": []}}}}"#);
        let bodies = parse_catalogue(&json).unwrap();
        assert_eq!(bodies.len(), 2);
        assert!(bodies.iter().all(|b| b.group == SmallBodyGroup::Neo));
    }

    #[test]
    fn test_load_catalogue_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small_bodies.json");
        std::fs::write(&path, format!(r#"{{"pha": {EROS}}}"#)).unwrap();
        let bodies = load_catalogue(&path).unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].group, SmallBodyGroup::Pha);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalogue(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SbdbError::Io(_))));
    }

    #[test]
    fn test_query_string() {
        assert_eq!(
            SmallBodyGroup::Pha.query(),
            "fields=full_name,e,a,q,om,w,i,tp&sb-group=pha&limit=500"
        );
    }

    #[test]
    fn test_glow_intensity() {
        assert!((glow_intensity(0.5) - 2.0).abs() < 1e-6);
        assert!((glow_intensity(4.0) - 0.25).abs() < 1e-6);
        assert_eq!(glow_intensity(0.0), 0.0);
        assert_eq!(glow_intensity(f64::NAN), 0.0);
    }
}
