#![allow(dead_code)]
use asistencia::config::Config;
use asistencia::store::Store;
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn asis() -> Command {
    cargo_bin_cmd!("asistencia")
}

/// Create an empty, unique working directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_asistencia_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Backing CSV path inside a fresh test directory (the file itself does not exist yet)
pub fn setup_test_csv(name: &str) -> PathBuf {
    setup_test_dir(name).join("asistencia.csv")
}

pub fn open_store(path: &PathBuf) -> Store {
    Store::open(Config::with_path(path)).expect("open store")
}

/// Store pre-filled with three records: Ana, Luis, Marta
pub fn store_with_data(name: &str) -> (PathBuf, Store) {
    let path = setup_test_csv(name);
    let mut store = open_store(&path);
    store.add("ana", "2024-03-05", "presente").expect("add ana");
    store.add("luis", "2024-03-05", "AUSENTE").expect("add luis");
    store.add("marta", "2024-03-06", "Presente").expect("add marta");
    (path, store)
}

pub fn read(path: &PathBuf) -> String {
    fs::read_to_string(path).expect("read csv")
}
