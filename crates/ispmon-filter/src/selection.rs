//! Selection state for the region filter widget.
//!
//! The state is a flat set of selected ids over the three-level hierarchy
//! (country root, divisions, districts). Two invariants hold after every
//! toggle:
//!
//! - **Downward:** a division id is in the set iff every one of its
//!   districts is in the set.
//! - **Upward:** the root id is in the set iff every division is fully
//!   checked.
//!
//! Indeterminate state is never stored; it is derived on demand from the
//! set and the catalog, so there is no second source of truth to drift.

use std::collections::BTreeSet;

use ispmon_regions::{District, Division, RegionCatalog, WHOLE_COUNTRY_ID};

/// Checkbox state of a node in the region tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    Checked,
    Unchecked,
    /// Some, but not all, descendants are selected.
    Indeterminate,
}

/// The current region selection.
///
/// Single source of truth for selection: consumers read it and issue
/// toggle requests; nothing else mutates the set. All toggles are
/// synchronous and leave the invariants above intact.
#[derive(Debug, Clone)]
pub struct RegionSelection<'a> {
    catalog: &'a RegionCatalog,
    selected: BTreeSet<String>,
}

impl<'a> RegionSelection<'a> {
    /// Initial dashboard state: everything selected.
    pub fn all(catalog: &'a RegionCatalog) -> Self {
        let mut selection = Self {
            catalog,
            selected: BTreeSet::new(),
        };
        selection.select_all();
        selection
    }

    /// Nothing selected.
    pub fn none(catalog: &'a RegionCatalog) -> Self {
        Self {
            catalog,
            selected: BTreeSet::new(),
        }
    }

    /// The catalog this selection is drawn from.
    pub fn catalog(&self) -> &'a RegionCatalog {
        self.catalog
    }

    /// Check or clear the root: selects the full catalog or empties the
    /// set.
    pub fn toggle_root(&mut self, checked: bool) {
        if checked {
            self.select_all();
        } else {
            self.selected.clear();
        }
    }

    /// Toggle a division and cascade to its districts and the root.
    pub fn toggle_division(&mut self, division_id: &str) {
        let Some(division) = self.catalog.division(division_id) else {
            debug_assert!(false, "unknown division id: {division_id}");
            return;
        };

        if self.selected.contains(division_id) {
            self.selected.remove(division_id);
            for district in &division.districts {
                self.selected.remove(&district.id);
            }
            // Selection is no longer total.
            self.selected.remove(WHOLE_COUNTRY_ID);
        } else {
            self.selected.insert(division.id.clone());
            for district in &division.districts {
                self.selected.insert(district.id.clone());
            }
            self.promote_root_if_total();
        }
    }

    /// Toggle a single district and re-evaluate its division and the
    /// root.
    pub fn toggle_district(&mut self, district_id: &str) {
        let Some(division) = self.catalog.division_of_district(district_id) else {
            debug_assert!(false, "unknown district id: {district_id}");
            return;
        };

        if self.selected.contains(district_id) {
            self.selected.remove(district_id);
            // The division can no longer be fully checked; dropping its id
            // leaves it implicitly indeterminate while siblings remain.
            self.selected.remove(&division.id);
            self.selected.remove(WHOLE_COUNTRY_ID);
        } else {
            self.selected.insert(district_id.to_string());
            if division
                .districts
                .iter()
                .all(|d| self.selected.contains(&d.id))
            {
                self.selected.insert(division.id.clone());
            }
            self.promote_root_if_total();
        }
    }

    /// Back to the initial all-selected state.
    pub fn reset(&mut self) {
        self.toggle_root(true);
    }

    /// Whether an id (root, division, or district) is in the set.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Whether the whole country is selected.
    pub fn is_all_selected(&self) -> bool {
        self.selected.contains(WHOLE_COUNTRY_ID)
    }

    /// Checkbox state of a district. Districts are never indeterminate.
    pub fn district_state(&self, district_id: &str) -> TriState {
        if self.selected.contains(district_id) {
            TriState::Checked
        } else {
            TriState::Unchecked
        }
    }

    /// Checkbox state of a division, derived from its districts.
    pub fn division_state(&self, division_id: &str) -> TriState {
        if self.selected.contains(division_id) {
            return TriState::Checked;
        }
        let Some(division) = self.catalog.division(division_id) else {
            debug_assert!(false, "unknown division id: {division_id}");
            return TriState::Unchecked;
        };
        if division
            .districts
            .iter()
            .any(|d| self.selected.contains(&d.id))
        {
            TriState::Indeterminate
        } else {
            TriState::Unchecked
        }
    }

    /// Checkbox state of the root, derived from the divisions.
    pub fn root_state(&self) -> TriState {
        if self.is_all_selected() {
            return TriState::Checked;
        }
        let partial = self
            .catalog
            .divisions()
            .iter()
            .any(|div| self.division_state(&div.id) != TriState::Unchecked);
        if partial {
            TriState::Indeterminate
        } else {
            TriState::Unchecked
        }
    }

    /// Fully-checked divisions, in catalog order.
    pub fn selected_divisions(&self) -> Vec<&'a Division> {
        self.catalog
            .divisions()
            .iter()
            .filter(|div| self.selected.contains(&div.id))
            .collect()
    }

    /// Selected districts, in catalog order.
    pub fn selected_districts(&self) -> Vec<&'a District> {
        self.catalog
            .divisions()
            .iter()
            .flat_map(|div| &div.districts)
            .filter(|d| self.selected.contains(&d.id))
            .collect()
    }

    /// Number of ids currently in the set (root and divisions included).
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn select_all(&mut self) {
        self.selected = self
            .catalog
            .region_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
    }

    fn promote_root_if_total(&mut self) {
        let total = self
            .catalog
            .divisions()
            .iter()
            .all(|div| self.selected.contains(&div.id));
        if total {
            self.selected.insert(WHOLE_COUNTRY_ID.to_string());
        }
    }
}
