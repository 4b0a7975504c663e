//! End-to-end integration test for the vertical slice
//!
//! This test exercises the complete flow: block extraction -> reconciliation
//! -> spec file on disk, crossing every crate boundary below the CLI.

use blot_blocks::{apply_counted, extract_blocks, reconcile};
use blot_core::{MergeEngine, MergeOptions, Outcome};
use blot_fs::{DEFAULT_SCAFFOLD, spec_path};
use std::fs;
use tempfile::TempDir;

/// Set up a project directory with one source file carrying two test blocks
fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("math.js"),
        "\
const add = (a, b) => a + b;

// TEST {add works}
t.is(add(1, 2), 3);
// END

const sub = (a, b) => a - b;

// TEST {sub works}
t.is(sub(3, 1), 2);
// END

module.exports = { add, sub };
",
    )
    .unwrap();
    temp
}

#[test]
fn test_extract_reconcile_apply_compose() {
    // The block crates work as a pipeline without blot-core in the middle.
    let source = "// TEST {a}\none();\n// END\n";
    let extraction = extract_blocks(source);
    assert_eq!(extraction.blocks.len(), 1);
    assert_eq!(extraction.skipped, 0);

    let updates = reconcile(&extraction.blocks, &[]);
    assert!(updates.iter().all(|u| u.is_new()));

    let (merged, stats) = apply_counted(&updates, None, DEFAULT_SCAFFOLD);
    assert_eq!(stats.appended_new, 1);
    assert!(merged.starts_with(DEFAULT_SCAFFOLD));

    // The merged spec extracts back to the same block.
    let re_extracted = extract_blocks(&merged);
    assert_eq!(re_extracted.blocks.len(), 1);
    assert_eq!(re_extracted.blocks[0].label, "a");
    assert_eq!(re_extracted.blocks[0].body, "one();\n");
}

#[test]
fn test_engine_layout_matches_spec_path() {
    let temp = setup_project();
    let out_dir = temp.path().join("test");
    let engine = MergeEngine::new(&out_dir, MergeOptions::default());

    let source = temp.path().join("math.js");
    assert_eq!(engine.spec_path_for(&source), spec_path(&source, &out_dir));

    let report = engine.merge_file(&source).unwrap();
    assert_eq!(report.spec, out_dir.join("math.spec.js"));
    assert!(report.spec.exists());
}

#[test]
fn test_first_merge_scaffolds_spec() {
    let temp = setup_project();
    let engine = MergeEngine::new(temp.path().join("test"), MergeOptions::default());

    let report = engine.merge_file(&temp.path().join("math.js")).unwrap();
    assert_eq!(report.outcome, Outcome::Created);
    assert_eq!(report.blocks, 2);
    assert_eq!(report.stats.appended_new, 2);

    let spec = fs::read_to_string(temp.path().join("test/math.spec.js")).unwrap();
    assert!(spec.starts_with(DEFAULT_SCAFFOLD));
    assert!(spec.contains("// TEST {add works}"));
    assert!(spec.contains("// TEST {sub works}"));
}

#[test]
fn test_clean_merge_moves_blocks_out_of_source() {
    let temp = setup_project();
    let source = temp.path().join("math.js");
    let engine = MergeEngine::new(
        temp.path().join("test"),
        MergeOptions {
            clean_source: true,
            dry_run: false,
        },
    );

    let report = engine.merge_file(&source).unwrap();
    assert_eq!(report.outcome, Outcome::Created);
    assert!(report.cleaned_source.is_some());

    // Blocks moved: the spec has them, the source no longer does.
    let spec = fs::read_to_string(temp.path().join("test/math.spec.js")).unwrap();
    assert_eq!(extract_blocks(&spec).blocks.len(), 2);

    let cleaned = fs::read_to_string(&source).unwrap();
    assert!(extract_blocks(&cleaned).is_empty());
    assert!(cleaned.contains("const add = (a, b) => a + b;"));
    assert!(cleaned.contains("module.exports = { add, sub };"));
}

#[test]
fn test_full_vertical_slice() {
    let temp = setup_project();
    let source = temp.path().join("math.js");
    let spec = temp.path().join("test/math.spec.js");
    let engine = MergeEngine::new(temp.path().join("test"), MergeOptions::default());

    // 1. First merge scaffolds the spec file
    let report = engine.merge_file(&source).unwrap();
    assert_eq!(report.outcome, Outcome::Created);

    // 2. A second merge finds nothing to do
    let report = engine.merge_file(&source).unwrap();
    assert_eq!(report.outcome, Outcome::Unchanged);

    // 3. Hand-written tests outside the merged blocks survive
    let edited = format!(
        "{}\ntest('hand written', t => t.pass());\n",
        fs::read_to_string(&spec).unwrap()
    );
    fs::write(&spec, &edited).unwrap();
    let report = engine.merge_file(&source).unwrap();
    assert_eq!(report.outcome, Outcome::Unchanged);
    assert!(fs::read_to_string(&spec).unwrap().contains("hand written"));

    // 4. Changing a block body updates that block in place
    let changed = fs::read_to_string(&source)
        .unwrap()
        .replace("t.is(add(1, 2), 3);", "t.is(add(2, 2), 4);");
    fs::write(&source, changed).unwrap();
    let report = engine.merge_file(&source).unwrap();
    assert_eq!(report.outcome, Outcome::Updated);

    let final_spec = fs::read_to_string(&spec).unwrap();
    assert!(final_spec.contains("t.is(add(2, 2), 4);"));
    assert!(!final_spec.contains("t.is(add(1, 2), 3);"));
    assert!(final_spec.contains("t.is(sub(3, 1), 2);"));
    assert!(final_spec.contains("hand written"));

    // 5. The updated spec still extracts to exactly the source labels
    let labels: Vec<_> = extract_blocks(&final_spec)
        .blocks
        .into_iter()
        .map(|b| b.label)
        .collect();
    assert_eq!(labels, vec!["add works", "sub works"]);
}
