//! Resolves free-text location strings against the region catalog.
//!
//! Location strings follow the `"<District>, <Division>"` or
//! `"<Division>"` convention. Matching is case-insensitive and exact;
//! catalog names are treated as canonical, so diacritics and alternate
//! spellings are not reconciled.

use ispmon_regions::{District, Division, RegionCatalog};

/// Result of resolving a location string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch<'a> {
    /// Resolved down to a specific district.
    District {
        division: &'a Division,
        district: &'a District,
    },
    /// Resolved to a division only; the source data carries no
    /// district-level specificity.
    Division(&'a Division),
    /// No catalog name matched.
    Unresolved,
}

/// Resolve a free-text location string against the catalog.
///
/// The text is split on the first comma: two parts are a district-name
/// candidate and a division-name candidate, a single part is a
/// division-name candidate only. A two-part string whose first part is
/// not a known district (commonly a neighborhood, e.g.
/// `"Gulshan, Dhaka"`) still resolves to the division.
pub fn match_location<'a>(catalog: &'a RegionCatalog, text: &str) -> LocationMatch<'a> {
    let (district_name, division_name) = match text.split_once(',') {
        Some((first, rest)) => (Some(first.trim()), rest.trim()),
        None => (None, text.trim()),
    };

    if let Some(division) = catalog.division_by_name(division_name) {
        if let Some(district) =
            district_name.and_then(|name| division.district_by_name(name))
        {
            return LocationMatch::District { division, district };
        }
        return LocationMatch::Division(division);
    }

    // A trailing comma leaves an empty division candidate; treat the
    // district candidate as unqualified and search the whole catalog.
    if division_name.is_empty()
        && let Some(name) = district_name.filter(|n| !n.is_empty())
    {
        for division in catalog.divisions() {
            if let Some(district) = division.district_by_name(name) {
                return LocationMatch::District { division, district };
            }
        }
    }

    LocationMatch::Unresolved
}
