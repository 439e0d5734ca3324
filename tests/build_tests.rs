use std::path::PathBuf;

use pcx::engine::Bom;
use pcx::export::bom_to_json;
use pcx::ingest::{load_csv_catalog, load_json_catalog};
use pcx::{AttrValue, BuildHistory, Session};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_csv_fixture_loads_through_the_session() {
    let parts = load_csv_catalog(&fixture_path("catalog.csv")).expect("Failed to load CSV");
    assert_eq!(parts.len(), 3);

    let mut session = Session::new();
    session.apply_batch(parts);

    // Currency rule applied to the price column.
    let cpu = session.catalog.find("cpu_10").unwrap();
    assert!((cpu.price - 1499.90).abs() < 0.001);
    // attr_ prefix stripped, extras coerced.
    assert_eq!(cpu.attributes["socket"], AttrValue::Text("AM4".to_string()));
    assert_eq!(cpu.attributes["tdp_w"], AttrValue::Int(105));

    // Attributes blob merged with extra columns.
    let gpu = session.catalog.find("gpu_10").unwrap();
    assert_eq!(gpu.category, "GPU");
    assert_eq!(gpu.attributes["length_mm"], AttrValue::Int(304));
    assert_eq!(gpu.attributes["tdp_w"], AttrValue::Int(200));

    // SKU fallback for the row without an id.
    let ram = session.catalog.find("MEM-123").unwrap();
    assert_eq!(ram.category, "RAM");
}

#[test]
fn test_json_fixture_accepts_portuguese_aliases() {
    let parts = load_json_catalog(&fixture_path("catalog.json")).expect("Failed to load JSON");
    assert_eq!(parts.len(), 2);

    let mut session = Session::new();
    session.apply_batch(parts);

    let psu = session.catalog.find("psu_10").unwrap();
    assert_eq!(psu.category, "PSU");
    assert_eq!(psu.name, "Corsair RM750");
    assert!((psu.price - 549.90).abs() < 0.001);
    assert_eq!(psu.attributes["modular"], AttrValue::Bool(true));

    let case = session.catalog.find("case_10").unwrap();
    assert_eq!(case.category, "Case");
}

#[test]
fn test_full_build_flow_on_the_sample_catalog() {
    let mut session = Session::with_sample_catalog();
    for id in [
        "cpu_02", "mb_02", "ram_01", "gpu_02", "case_02", "psu_01", "cooler_01", "ssd_01",
    ] {
        session.select_by_id(id).expect(id);
    }

    // A coherent AM4 build: nothing to report.
    assert!(session.build.compatibility_issues().is_empty());

    let power = session.build.estimated_power();
    assert_eq!(power.consumed_w, 275); // 65 CPU + 160 GPU + 50 baseline
    assert_eq!(power.recommended_w, 358);

    assert!((session.build.total_price() - 5069.90).abs() < 0.01);

    // Swapping the CPU for the LGA1700 part surfaces exactly one issue.
    session.select_by_id("cpu_01").unwrap();
    let issues = session.build.compatibility_issues();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("LGA1700"));
    assert!(issues[0].contains("AM4"));
}

#[test]
fn test_assembly_ordering_for_a_clean_six_slot_build() {
    let mut session = Session::with_sample_catalog();
    for id in ["mb_01", "cpu_01", "ram_01", "psu_01", "case_01", "gpu_01"] {
        session.select_by_id(id).expect(id);
    }
    assert!(session.build.compatibility_issues().is_empty());

    let steps = session.build.assembly_steps();
    assert!(steps[0].starts_with("Tools:"));
    assert!(steps[1].contains("Prepare the motherboard"));
    assert!(steps[2].contains("Seat the CPU"));
    assert!(steps[3].contains("RAM"));
    assert!(steps[4].contains("PSU"));
    assert!(steps[5].contains("standoffs"));
    assert!(steps[6].contains("GPU"));
    assert!(steps[7].contains("front-panel"));
    assert!(steps[8].contains("power on"));
    assert_eq!(steps.len(), 9);
}

#[test]
fn test_bom_round_trips_and_persists() {
    let mut session = Session::with_sample_catalog();
    session.select_by_id("cpu_01").unwrap();
    session.select_by_id("gpu_01").unwrap();
    session.select_by_id("ram_01").unwrap();

    let bom = session.build.bom();
    let json = bom_to_json(&bom).expect("Failed to serialize");
    let reparsed: Bom = serde_json::from_str(&json).expect("Failed to re-parse");

    assert_eq!(reparsed, bom);
    for (category, entry) in &bom {
        let back = &reparsed[category];
        assert_eq!(back.id, entry.id);
        assert_eq!(back.name, entry.name);
        assert!((back.price - entry.price).abs() < 0.01);
    }

    // And the same BOM survives the history store.
    let dir = tempfile::TempDir::new().unwrap();
    let store = BuildHistory::new(&dir.path().join("history.db")).unwrap();
    store.save("alice", "am4 draft", &bom).unwrap();
    store.save("alice", "final", &bom).unwrap();

    let builds = store.list("alice").unwrap();
    assert_eq!(builds.len(), 2);
    assert_eq!(builds[0].name, "final");
    assert_eq!(builds[0].bom["CPU"]["id"], "cpu_01");
}
