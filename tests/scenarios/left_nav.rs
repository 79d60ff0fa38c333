//! Scenario: Left navigation rail journeys
//!
//! Each scenario covers one documented journey: a recruiter landing on
//! a hiring page, an HR user with a reduced menu, a route outside the
//! rail, and the first-visit collapse preference.

use navrail::{
    Activation, FilePreferences, MemoryStore, NavController, NavigationSink, PreferenceStore,
    RoleId, COLLAPSED_PREF_KEY,
};

use crate::common::sample_tree;

#[derive(Default)]
struct RecordingSink {
    commands: Vec<String>,
}

impl NavigationSink for RecordingSink {
    fn navigate(&mut self, target: &str) {
        self.commands.push(target.to_string());
    }
}

/// SCENARIO: A recruiter (role 2) lands on the CV pool page
#[test]
fn scenario_recruiter_lands_on_cv_pool() {
    let nav = NavController::new(
        sample_tree(),
        RoleId(2),
        "/hiring-cv-pool",
        MemoryStore::new(),
    );

    assert_eq!(nav.selected_key(), Some("6"));
    assert_eq!(nav.open_ancestor_key(), Some("sub1"));
    // Role 2 sees the whole rail.
    assert_eq!(nav.filtered().len(), 2);
}

/// SCENARIO: An HR user (role 3) opens onboarding; hiring is invisible
#[test]
fn scenario_hr_user_sees_reduced_rail_on_onboarding() {
    let nav = NavController::new(sample_tree(), RoleId(3), "/onboarding", MemoryStore::new());

    let top_keys: Vec<&str> = nav.filtered().iter().map(|n| n.key()).collect();
    assert_eq!(top_keys, vec!["sub2"]);

    assert_eq!(nav.selected_key(), Some("11"));
    assert_eq!(nav.open_ancestor_key(), Some("sub2"));

    // The role-2-only HR children are gone too.
    let hr_keys: Vec<&str> = nav.filtered()[0].children().iter().map(|n| n.key()).collect();
    assert!(!hr_keys.contains(&"9"));
    assert!(hr_keys.contains(&"13"));
}

/// SCENARIO: The user is on a route the rail does not know
#[test]
fn scenario_route_outside_the_rail() {
    let nav = NavController::new(
        sample_tree(),
        RoleId(2),
        "/not-a-real-route",
        MemoryStore::new(),
    );

    assert_eq!(nav.selected_key(), None);
    // The rail still keeps a deterministic section open.
    assert_eq!(nav.open_ancestor_key(), Some("sub1"));
}

/// SCENARIO: First visit starts collapsed; one toggle persists expansion
#[test]
fn scenario_first_visit_collapse_preference() {
    let mut nav = NavController::new(
        sample_tree(),
        RoleId(2),
        "/hiring-cv-pool",
        MemoryStore::new(),
    );

    assert!(nav.collapsed());

    assert!(!nav.toggle_collapsed());
    // Subsequent sessions see the stored preference.
}

/// SCENARIO: The preference survives a restart through the file store
#[test]
fn scenario_preference_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("prefs.json");

    let store = FilePreferences::load(&prefs_path);
    let mut nav = NavController::new(sample_tree(), RoleId(2), "/hiring-cv-pool", store);
    assert!(nav.collapsed());
    nav.toggle_collapsed();

    // "Restart": a fresh controller over the same file.
    let store = FilePreferences::load(&prefs_path);
    assert_eq!(store.get(COLLAPSED_PREF_KEY), Some("false".to_string()));
    let nav = NavController::new(sample_tree(), RoleId(2), "/hiring-cv-pool", store);
    assert!(!nav.collapsed());
}

/// SCENARIO: Clicking through the rail navigates, group headers toggle
#[test]
fn scenario_clicks_navigate_and_toggle() {
    let mut nav = NavController::new(
        sample_tree(),
        RoleId(2),
        "/hiring-cv-pool",
        MemoryStore::new(),
    );
    let mut sink = RecordingSink::default();

    assert_eq!(
        nav.activate("11", &mut sink),
        Activation::Navigated("/onboarding".to_string())
    );

    // The router answers with a path change.
    nav.path_changed("/onboarding");
    assert_eq!(nav.selected_key(), Some("11"));
    assert_eq!(nav.open_ancestor_key(), Some("sub2"));

    // Clicking the HR header again closes the section.
    assert_eq!(
        nav.activate("sub2", &mut sink),
        Activation::ToggledGroup("sub2".to_string())
    );
    assert!(nav.open_keys().is_empty());

    assert_eq!(sink.commands, ["/onboarding".to_string()]);
}
