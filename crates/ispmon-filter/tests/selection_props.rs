//! Property tests: the selection invariants hold under arbitrary toggle
//! sequences.

use ispmon_filter::{RegionSelection, TriState};
use ispmon_regions::RegionCatalog;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    ToggleRoot(bool),
    ToggleDivision(usize),
    ToggleDistrict(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::ToggleRoot),
        any::<usize>().prop_map(Op::ToggleDivision),
        any::<usize>().prop_map(Op::ToggleDistrict),
    ]
}

fn apply(selection: &mut RegionSelection<'_>, op: &Op, divisions: &[String], districts: &[String]) {
    match op {
        Op::ToggleRoot(checked) => selection.toggle_root(*checked),
        Op::ToggleDivision(i) => selection.toggle_division(&divisions[i % divisions.len()]),
        Op::ToggleDistrict(i) => selection.toggle_district(&districts[i % districts.len()]),
    }
}

/// Invariant A (downward): division id present iff all its district ids
/// are. Invariant B (upward): root present iff every division id is.
/// Tri-state is consistent with the set.
fn assert_invariants(selection: &RegionSelection<'_>, catalog: &RegionCatalog) {
    for division in catalog.divisions() {
        let all_districts = division
            .districts
            .iter()
            .all(|d| selection.is_selected(&d.id));
        assert_eq!(
            selection.is_selected(&division.id),
            all_districts,
            "downward consistency broken for {}",
            division.id
        );

        let any_districts = division
            .districts
            .iter()
            .any(|d| selection.is_selected(&d.id));
        let expected = if all_districts {
            TriState::Checked
        } else if any_districts {
            TriState::Indeterminate
        } else {
            TriState::Unchecked
        };
        assert_eq!(selection.division_state(&division.id), expected);
    }

    let all_divisions = catalog
        .divisions()
        .iter()
        .all(|div| selection.is_selected(&div.id));
    assert_eq!(
        selection.is_all_selected(),
        all_divisions,
        "upward consistency broken"
    );
}

proptest! {
    #[test]
    fn invariants_hold_after_every_toggle(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let catalog = RegionCatalog::builtin().unwrap();
        let divisions: Vec<String> = catalog.divisions().iter().map(|d| d.id.clone()).collect();
        let districts: Vec<String> = catalog
            .divisions()
            .iter()
            .flat_map(|div| &div.districts)
            .map(|d| d.id.clone())
            .collect();

        let mut selection = RegionSelection::all(&catalog);
        assert_invariants(&selection, &catalog);
        for op in &ops {
            apply(&mut selection, op, &divisions, &districts);
            assert_invariants(&selection, &catalog);
        }
    }

    #[test]
    fn district_double_toggle_is_identity(
        ops in prop::collection::vec(op_strategy(), 0..32),
        pick in any::<usize>(),
    ) {
        let catalog = RegionCatalog::builtin().unwrap();
        let divisions: Vec<String> = catalog.divisions().iter().map(|d| d.id.clone()).collect();
        let districts: Vec<String> = catalog
            .divisions()
            .iter()
            .flat_map(|div| &div.districts)
            .map(|d| d.id.clone())
            .collect();

        let mut selection = RegionSelection::all(&catalog);
        for op in &ops {
            apply(&mut selection, op, &divisions, &districts);
        }

        let snapshot: Vec<bool> = catalog
            .region_ids()
            .iter()
            .map(|id| selection.is_selected(id))
            .collect();

        let district = &districts[pick % districts.len()];
        selection.toggle_district(district);
        selection.toggle_district(district);

        let after: Vec<bool> = catalog
            .region_ids()
            .iter()
            .map(|id| selection.is_selected(id))
            .collect();
        prop_assert_eq!(snapshot, after);
    }
}
