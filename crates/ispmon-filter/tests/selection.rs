//! Behavior tests for the region selection state machine.

use ispmon_filter::{RegionSelection, TriState};
use ispmon_regions::{RegionCatalog, WHOLE_COUNTRY_ID};

fn selected_ids(selection: &RegionSelection<'_>) -> Vec<String> {
    selection
        .catalog()
        .region_ids()
        .into_iter()
        .filter(|id| selection.is_selected(id))
        .map(str::to_string)
        .collect()
}

#[test]
fn starts_with_everything_selected() {
    let catalog = RegionCatalog::builtin().unwrap();
    let selection = RegionSelection::all(&catalog);

    assert!(selection.is_all_selected());
    assert_eq!(selection.root_state(), TriState::Checked);
    // Root + 8 divisions + 64 districts.
    assert_eq!(selection.selected_count(), 73);
    assert_eq!(selection.selected_districts().len(), 64);
    assert_eq!(selection.selected_divisions().len(), 8);
}

#[test]
fn root_toggle_selects_and_clears_everything() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::all(&catalog);

    selection.toggle_root(false);
    assert_eq!(selection.selected_count(), 0);
    assert_eq!(selection.root_state(), TriState::Unchecked);

    selection.toggle_root(true);
    assert_eq!(selection.selected_count(), 73);

    // Full-selection idempotence.
    let before = selected_ids(&selection);
    selection.toggle_root(true);
    assert_eq!(selected_ids(&selection), before);
}

#[test]
fn division_toggle_cascades_to_districts_and_root() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::all(&catalog);

    selection.toggle_division("sylhet");
    assert!(!selection.is_selected("sylhet"));
    assert!(!selection.is_selected("moulvibazar"));
    assert!(!selection.is_all_selected());
    assert_eq!(selection.division_state("sylhet"), TriState::Unchecked);
    assert_eq!(selection.root_state(), TriState::Indeterminate);

    selection.toggle_division("sylhet");
    assert!(selection.is_selected("sylhet"));
    assert!(selection.is_selected("moulvibazar"));
    // Every division is whole again, so the root comes back.
    assert!(selection.is_all_selected());
}

#[test]
fn district_toggle_downgrades_its_division() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::all(&catalog);

    selection.toggle_district("gazipur");
    assert!(!selection.is_selected("gazipur"));
    assert!(!selection.is_selected("dhaka"));
    assert!(!selection.is_selected(WHOLE_COUNTRY_ID));
    assert_eq!(selection.division_state("dhaka"), TriState::Indeterminate);
    assert_eq!(selection.district_state("gazipur"), TriState::Unchecked);
    assert_eq!(selection.district_state("tangail"), TriState::Checked);
    assert_eq!(selection.root_state(), TriState::Indeterminate);
}

#[test]
fn district_toggle_round_trips() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::all(&catalog);
    let before = selected_ids(&selection);

    selection.toggle_district("gazipur");
    selection.toggle_district("gazipur");
    assert_eq!(selected_ids(&selection), before);

    // Also from a partial state.
    selection.toggle_division("khulna");
    let partial = selected_ids(&selection);
    selection.toggle_district("bagerhat");
    selection.toggle_district("bagerhat");
    assert_eq!(selected_ids(&selection), partial);
}

#[test]
fn last_district_promotes_division_and_root() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::all(&catalog);

    selection.toggle_district("sherpur");
    assert_eq!(
        selection.division_state("mymensingh"),
        TriState::Indeterminate
    );

    selection.toggle_district("sherpur");
    assert_eq!(selection.division_state("mymensingh"), TriState::Checked);
    assert!(selection.is_all_selected());
}

#[test]
fn selecting_every_district_one_by_one_reaches_total() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::none(&catalog);

    let district_ids: Vec<String> = catalog
        .divisions()
        .iter()
        .flat_map(|div| &div.districts)
        .map(|d| d.id.clone())
        .collect();
    for id in &district_ids {
        selection.toggle_district(id);
    }

    assert!(selection.is_all_selected());
    assert_eq!(selection.selected_count(), 73);
}

#[test]
fn empty_selection_is_fully_unchecked() {
    let catalog = RegionCatalog::builtin().unwrap();
    let selection = RegionSelection::none(&catalog);

    assert_eq!(selection.root_state(), TriState::Unchecked);
    for division in catalog.divisions() {
        assert_eq!(selection.division_state(&division.id), TriState::Unchecked);
    }
    assert!(selection.selected_districts().is_empty());
}

#[test]
fn selected_districts_keep_catalog_order() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::none(&catalog);

    // Toggle in reverse catalog order.
    selection.toggle_district("sherpur");
    selection.toggle_district("gazipur");
    selection.toggle_district("dhaka-city");

    let ids: Vec<&str> = selection
        .selected_districts()
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(ids, ["dhaka-city", "gazipur", "sherpur"]);
}

#[test]
fn reset_restores_the_initial_state() {
    let catalog = RegionCatalog::builtin().unwrap();
    let mut selection = RegionSelection::all(&catalog);

    selection.toggle_division("barisal");
    selection.toggle_district("feni");
    selection.reset();

    assert!(selection.is_all_selected());
    assert_eq!(selection.selected_count(), 73);
}
