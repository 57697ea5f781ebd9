mod common;
use common::{add_basic_records, art, setup_cache_db, setup_test_db, temp_out, write_roster_csv};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_the_database() {
    let db = setup_test_db("cli_init");
    let cache = setup_cache_db("cli_init");

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized"));

    assert!(std::path::Path::new(&db).exists());

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 0"));
}

#[test]
fn test_add_and_list_with_day_counts() {
    let db = setup_test_db("cli_add_list");
    let cache = setup_cache_db("cli_add_list");
    add_basic_records(&db, &cache);

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of 2"))
        .stdout(predicate::str::contains("20123456"))
        // 2024-01-20 .. 2024-02-05 inclusive
        .stdout(predicate::str::contains("17"));
}

#[test]
fn test_add_rejects_unparseable_desde() {
    let db = setup_test_db("cli_bad_desde");
    let cache = setup_cache_db("cli_bad_desde");

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "add",
            "--dni",
            "20123456",
            "--desde",
            "2024-13-40",
            "--no-autofill",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_list_facet_filters_narrow_the_view() {
    let db = setup_test_db("cli_filters");
    let cache = setup_cache_db("cli_filters");
    add_basic_records(&db, &cache);

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "list",
            "--provincia",
            "Córdoba",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 2"));

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "list",
            "--mes",
            "2024-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 2"))
        .stdout(predicate::str::contains("30999888"));

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "list",
            "--q-nombre",
            "pérez",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 2"));
}

#[test]
fn test_list_facets_output() {
    let db = setup_test_db("cli_facets");
    let cache = setup_cache_db("cli_facets");
    add_basic_records(&db, &cache);

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "list", "--facets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Provincias: Buenos Aires, Córdoba"))
        .stdout(predicate::str::contains("Meses: 2024-01, 2024-02"))
        .stdout(predicate::str::contains("Dias totales: 3, 17"));
}

#[test]
fn test_del_all_empties_the_store() {
    let db = setup_test_db("cli_del_all");
    let cache = setup_cache_db("cli_del_all");
    add_basic_records(&db, &cache);

    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "del", "--all", "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 record(s)."))
        .stdout(predicate::str::contains("0 record(s) remain."));

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 0"));
}

#[test]
fn test_del_filtered_subset_non_interactive() {
    let db = setup_test_db("cli_del_filtered");
    let cache = setup_cache_db("cli_del_filtered");
    add_basic_records(&db, &cache);

    // --yes with an active filter deletes only the filtered subset
    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "del",
            "--all",
            "--yes",
            "--provincia",
            "Córdoba",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 record(s)."))
        .stdout(predicate::str::contains("1 record(s) remain."));

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 1"))
        .stdout(predicate::str::contains("30999888"));
}

#[test]
fn test_del_without_target_fails() {
    let db = setup_test_db("cli_del_no_target");
    let cache = setup_cache_db("cli_del_no_target");

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "del", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--all"));
}

#[test]
fn test_roster_import_lookup_and_clear() {
    let db = setup_test_db("cli_roster");
    let cache = setup_cache_db("cli_roster");
    let csv = write_roster_csv("cli_roster");

    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "roster", "import", &csv, "--version",
            "2024-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 2 | Indexed (DNI): 2"));

    // lookup normalizes the query and finds the dotted-DNI row
    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "roster", "lookup", "30.999.888",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("López, Juan"))
        .stdout(predicate::str::contains("Planta Sur"));

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "roster", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version:  2024-06"));

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "roster", "clear"])
        .assert()
        .success();

    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "roster", "lookup", "20123456",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cached roster"));

    fs::remove_file(csv).ok();
}

#[test]
fn test_add_autofills_from_cached_roster() {
    let db = setup_test_db("cli_autofill");
    let cache = setup_cache_db("cli_autofill");
    let csv = write_roster_csv("cli_autofill");

    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "roster", "import", &csv,
        ])
        .assert()
        .success();

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "add",
            "--dni",
            "20.123.456",
            "--desde",
            "2024-03-01",
            "--hasta",
            "2024-03-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("autofilled"));

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pérez, Ana"))
        .stdout(predicate::str::contains("Córdoba"));

    fs::remove_file(csv).ok();
}

/// Run `add` and pull the assigned id out of the success message.
fn add_and_capture_id(db: &str, cache: &str, dni: &str, desde: &str, hasta: &str) -> String {
    let output = art()
        .args([
            "--db",
            db,
            "--cache",
            cache,
            "--test",
            "add",
            "--dni",
            dni,
            "--desde",
            desde,
            "--hasta",
            hasta,
            "--no-autofill",
        ])
        .output()
        .expect("run add");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let line = stdout
        .lines()
        .find(|l| l.contains("Record saved with id"))
        .expect("id line present");
    line.rsplit(' ').next().unwrap().trim().to_string()
}

#[test]
fn test_update_recomputes_day_counts_on_save() {
    let db = setup_test_db("cli_update");
    let cache = setup_cache_db("cli_update");

    let id = add_and_capture_id(&db, &cache, "20123456", "2024-01-20", "2024-01-24");

    // stretch the span into February and pick a reference month
    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "update",
            &id,
            "--hasta",
            "2024-02-05",
            "--mes",
            "2024-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "list", "--details",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dias: 17 | Dias mes desde: 12 | Dias mes elegido: 5",
        ));
}

#[test]
fn test_update_missing_id_fails() {
    let db = setup_test_db("cli_update_missing");
    let cache = setup_cache_db("cli_update_missing");

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "update",
            "no-such-id",
            "--hasta",
            "2024-02-05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found"));
}

#[test]
fn test_del_single_record_by_id() {
    let db = setup_test_db("cli_del_single");
    let cache = setup_cache_db("cli_del_single");

    let id = add_and_capture_id(&db, &cache, "20123456", "2024-01-20", "2024-01-24");
    add_and_capture_id(&db, &cache, "30999888", "2024-02-01", "2024-02-03");

    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "del", &id, "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    art()
        .args(["--db", &db, "--cache", &cache, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 1"))
        .stdout(predicate::str::contains("30999888"));
}

#[test]
fn test_export_csv_of_filtered_records() {
    let db = setup_test_db("cli_export_csv");
    let cache = setup_cache_db("cli_export_csv");
    add_basic_records(&db, &cache);

    let out = temp_out("cli_export_csv", "csv");

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--provincia",
            "Córdoba",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("20123456"));
    assert!(!content.contains("30999888"));
    fs::remove_file(out).ok();
}

#[test]
fn test_export_json_all() {
    let db = setup_test_db("cli_export_json");
    let cache = setup_cache_db("cli_export_json");
    add_basic_records(&db, &cache);

    let out = temp_out("cli_export_json", "json");

    art()
        .args([
            "--db", &db, "--cache", &cache, "--test", "export", "--format", "json", "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2024-01-20"));
    assert!(content.contains("2024-02-01"));
    fs::remove_file(out).ok();
}

#[test]
fn test_export_requires_absolute_path() {
    let db = setup_test_db("cli_export_rel");
    let cache = setup_cache_db("cli_export_rel");

    art()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}
