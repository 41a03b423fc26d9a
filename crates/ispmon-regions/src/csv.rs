//! CSV loader for region catalogs.
//!
//! The format is one row per district with the owning division repeated:
//!
//! ```text
//! Division ID,Division Name,District ID,District Name
//! dhaka,Dhaka,gazipur,Gazipur
//! ```
//!
//! Rows for a division must be contiguous; divisions and districts keep
//! the file order in the resulting catalog.

use crate::catalog::{District, Division, RegionCatalog};
use crate::error::CatalogError;

const BUILTIN_CSV: &str = include_str!("../data/bangladesh_regions.csv");

fn header_index(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == name)
        .ok_or(CatalogError::MissingColumn { column: name })
}

/// Parse a region catalog from CSV text.
pub fn parse_regions_csv(text: &str) -> Result<RegionCatalog, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Csv {
            message: e.to_string(),
        })?
        .clone();

    let idx_div_id = header_index(&headers, "Division ID")?;
    let idx_div_name = header_index(&headers, "Division Name")?;
    let idx_dist_id = header_index(&headers, "District ID")?;
    let idx_dist_name = header_index(&headers, "District Name")?;

    let mut divisions: Vec<Division> = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CatalogError::Csv {
            message: e.to_string(),
        })?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

        let div_id = field(idx_div_id);
        let district = District {
            id: field(idx_dist_id),
            name: field(idx_dist_name),
        };

        if let Some(current) = divisions.last_mut()
            && current.id == div_id
        {
            current.districts.push(district);
        } else {
            divisions.push(Division {
                id: div_id,
                name: field(idx_div_name),
                districts: vec![district],
            });
        }
    }

    RegionCatalog::new(divisions)
}

impl RegionCatalog {
    /// Load the built-in Bangladesh catalog (8 divisions, 64 districts).
    pub fn builtin() -> Result<Self, CatalogError> {
        parse_regions_csv(BUILTIN_CSV)
    }
}
