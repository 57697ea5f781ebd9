#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn art() -> Command {
    cargo_bin_cmd!("artrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_artrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique roster-cache DB path inside the system temp dir
pub fn setup_cache_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_artrack_cache.sqlite", name));
    let cache_path = path.to_string_lossy().to_string();
    fs::remove_file(&cache_path).ok();
    cache_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small roster CSV and return its path
pub fn write_roster_csv(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roster.csv", name));
    let content = "\
DNI,CUIL,Legajo,Apellido y Nombre,Unidad organizativa,Area,Provincia,RRHH
20123456,20-20123456-3,1001,\"Pérez, Ana\",Planta Norte,Mantenimiento,Córdoba,Propio
30.999.888,20-30999888-1,1002,\"López, Juan\",Planta Sur,Producción,Buenos Aires,Contratado
";
    fs::write(&path, content).expect("write roster csv");
    path.to_string_lossy().to_string()
}

/// Add a couple of incident records useful for many tests
pub fn add_basic_records(db_path: &str, cache_path: &str) {
    art()
        .args([
            "--db",
            db_path,
            "--cache",
            cache_path,
            "--test",
            "add",
            "--dni",
            "20123456",
            "--desde",
            "2024-01-20",
            "--hasta",
            "2024-02-05",
            "--mes",
            "2024-02",
            "--nombre",
            "Pérez, Ana",
            "--provincia",
            "Córdoba",
            "--area",
            "Mantenimiento",
            "--no-autofill",
        ])
        .assert()
        .success();

    art()
        .args([
            "--db",
            db_path,
            "--cache",
            cache_path,
            "--test",
            "add",
            "--dni",
            "30999888",
            "--desde",
            "2024-02-01",
            "--hasta",
            "2024-02-03",
            "--nombre",
            "López, Juan",
            "--provincia",
            "Buenos Aires",
            "--area",
            "Producción",
            "--no-autofill",
        ])
        .assert()
        .success();
}
