//! The administrative region hierarchy: one country root, divisions,
//! districts.
//!
//! The catalog is immutable once constructed. Construction validates the
//! structural invariants (globally unique ids, no collision with the
//! reserved root id, no empty divisions) so that every downstream consumer
//! can treat catalog ids as always valid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Reserved id of the implicit root node representing the whole country.
pub const WHOLE_COUNTRY_ID: &str = "whole-country";

/// A leaf region: the finest granularity of geographic selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,
}

/// A second-level grouping of districts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: String,
    pub name: String,
    /// Districts in catalog order.
    pub districts: Vec<District>,
}

impl Division {
    /// Look up a district of this division by name (case-insensitive,
    /// exact).
    pub fn district_by_name(&self, name: &str) -> Option<&District> {
        self.districts
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }
}

/// Shape counters for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub division_count: usize,
    pub district_count: usize,
}

/// The full region hierarchy with id and name indexes.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    divisions: Vec<Division>,
    /// Division id -> index into `divisions`.
    division_index: BTreeMap<String, usize>,
    /// District id -> (division index, district index).
    district_index: BTreeMap<String, (usize, usize)>,
    /// Uppercase division name -> index into `divisions`.
    division_names: BTreeMap<String, usize>,
}

impl RegionCatalog {
    /// Build a catalog from an ordered list of divisions, validating the
    /// structural invariants.
    pub fn new(divisions: Vec<Division>) -> Result<Self, CatalogError> {
        if divisions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut division_index = BTreeMap::new();
        let mut district_index = BTreeMap::new();
        let mut division_names = BTreeMap::new();

        for (div_idx, division) in divisions.iter().enumerate() {
            check_id(&division.id)?;
            if division.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    field: "division name",
                    id: division.id.clone(),
                });
            }
            if division.districts.is_empty() {
                return Err(CatalogError::EmptyDivision {
                    division: division.id.clone(),
                });
            }
            if division_index
                .insert(division.id.clone(), div_idx)
                .is_some()
            {
                return Err(CatalogError::DuplicateId {
                    id: division.id.clone(),
                });
            }
            division_names.insert(division.name.to_uppercase(), div_idx);

            for (dist_idx, district) in division.districts.iter().enumerate() {
                check_id(&district.id)?;
                if district.name.trim().is_empty() {
                    return Err(CatalogError::EmptyField {
                        field: "district name",
                        id: district.id.clone(),
                    });
                }
                if division_index.contains_key(&district.id)
                    || district_index
                        .insert(district.id.clone(), (div_idx, dist_idx))
                        .is_some()
                {
                    return Err(CatalogError::DuplicateId {
                        id: district.id.clone(),
                    });
                }
            }
        }

        // A division id shadowing a district id is caught above only when
        // the district comes first; check the other direction too.
        for division in &divisions {
            if district_index.contains_key(&division.id) {
                return Err(CatalogError::DuplicateId {
                    id: division.id.clone(),
                });
            }
        }

        Ok(Self {
            divisions,
            division_index,
            district_index,
            division_names,
        })
    }

    /// Divisions in catalog order.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// Look up a division by id.
    pub fn division(&self, id: &str) -> Option<&Division> {
        self.division_index.get(id).map(|&i| &self.divisions[i])
    }

    /// Look up a district by id.
    pub fn district(&self, id: &str) -> Option<&District> {
        self.district_index
            .get(id)
            .map(|&(div, dist)| &self.divisions[div].districts[dist])
    }

    /// Resolve the division that owns a district.
    pub fn division_of_district(&self, district_id: &str) -> Option<&Division> {
        self.district_index
            .get(district_id)
            .map(|&(div, _)| &self.divisions[div])
    }

    /// Look up a division by name (case-insensitive, exact).
    pub fn division_by_name(&self, name: &str) -> Option<&Division> {
        self.division_names
            .get(&name.trim().to_uppercase())
            .map(|&i| &self.divisions[i])
    }

    /// Total number of districts across all divisions.
    pub fn district_count(&self) -> usize {
        self.district_index.len()
    }

    /// Every selectable id: the root, then divisions and districts in
    /// catalog order.
    pub fn region_ids(&self) -> Vec<&str> {
        let mut ids = Vec::with_capacity(1 + self.divisions.len() + self.district_index.len());
        ids.push(WHOLE_COUNTRY_ID);
        for division in &self.divisions {
            ids.push(division.id.as_str());
            for district in &division.districts {
                ids.push(district.id.as_str());
            }
        }
        ids
    }

    /// Shape counters for reporting.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            division_count: self.divisions.len(),
            district_count: self.district_count(),
        }
    }
}

fn check_id(id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            field: "id",
            id: id.to_string(),
        });
    }
    if id == WHOLE_COUNTRY_ID {
        return Err(CatalogError::ReservedId { id: id.to_string() });
    }
    Ok(())
}
