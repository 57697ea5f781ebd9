//! Library-level tests for the roster import → index → cache pipeline.

use artrack::models::record::IncidentRecord;
use artrack::models::roster::RosterSnapshot;
use artrack::roster::{RosterIndex, SnapshotCache, apply_roster_row, import};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{name}_roster_it.{ext}"));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn duplicate_identities_keep_the_later_row_through_the_cache() {
    let csv = temp_path("dup_dni", "csv");
    fs::write(
        &csv,
        "DNI,Apellido y Nombre\n20123456,First\n20.123.456,Second\n",
    )
    .unwrap();

    let rows = import::read_roster_csv(&csv).unwrap();
    assert_eq!(rows.len(), 2);

    // round-trip through the durable cache before indexing, as the app does
    let cache = SnapshotCache::new(temp_path("dup_dni", "sqlite"));
    cache
        .persist(&RosterSnapshot::new(rows, Some("v1".into())))
        .unwrap();

    let restored = cache.restore().unwrap().expect("snapshot present");
    let index = RosterIndex::build(&restored.rows);

    assert_eq!(index.row_count, 2);
    assert_eq!(index.indexed_count, 1);
    assert_eq!(
        index.lookup("20123456").unwrap()["Apellido y Nombre"],
        "Second"
    );

    fs::remove_file(csv).ok();
}

#[test]
fn switching_lookups_never_leaks_the_previous_person() {
    let csv = temp_path("stale_fields", "csv");
    fs::write(
        &csv,
        "DNI,Apellido y Nombre,Provincia,CUIL\n\
         20123456,\"Pérez, Ana\",Córdoba,20-20123456-3\n\
         30999888,\"López, Juan\",,\n",
    )
    .unwrap();
    let rows = import::read_roster_csv(&csv).unwrap();

    let index = RosterIndex::build(&rows);
    let mut record = IncidentRecord::default();

    apply_roster_row(&mut record, index.lookup("20123456").unwrap());
    assert_eq!(record.nombre, "Pérez, Ana");
    assert_eq!(record.provincia, "Córdoba");
    assert_eq!(record.cuil, "20-20123456-3");

    // second person has blank provincia/cuil cells: the first person's
    // values must not survive the switch
    apply_roster_row(&mut record, index.lookup("30999888").unwrap());
    assert_eq!(record.nombre, "López, Juan");
    assert_eq!(record.provincia, "");
    assert_eq!(record.cuil, "");

    fs::remove_file(csv).ok();
}
