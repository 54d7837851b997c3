use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{asis, setup_test_dir};

#[test]
fn test_first_run_creates_csv_with_header() {
    let dir = setup_test_dir("cli_first_run");

    asis()
        .current_dir(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(
            contains("Menú de Control de Asistencia")
                .and(contains("Archivo de registros creado"))
                .and(contains("¡Hasta luego!")),
        );

    let content = fs::read_to_string(dir.join("asistencia.csv")).expect("read csv");
    assert_eq!(content.trim_end(), "Alumno,Fecha,Asistencia");
}

#[test]
fn test_add_edit_delete_across_runs() {
    let dir = setup_test_dir("cli_lifecycle");
    let csv = dir.join("asistencia.csv");

    asis()
        .current_dir(&dir)
        .write_stdin("2\nana\n2024-03-05\npresente\n2\nluis\n2024-03-06\nausente\n5\n")
        .assert()
        .success();

    let content = fs::read_to_string(&csv).unwrap();
    assert!(content.contains("Ana,05/03/2024,Presente"));
    assert!(content.contains("Luis,06/03/2024,Ausente"));

    // a second run sees what the first one saved
    asis()
        .current_dir(&dir)
        .write_stdin("1\n3\n1\n\n\nausente\n5\n")
        .assert()
        .success()
        .stdout(contains("Luis").and(contains("Registro actualizado")));

    let content = fs::read_to_string(&csv).unwrap();
    assert!(content.contains("Ana,05/03/2024,Ausente"));

    asis()
        .current_dir(&dir)
        .write_stdin("4\n1\ns\n5\n")
        .assert()
        .success()
        .stdout(contains("Registro eliminado con éxito."));

    let content = fs::read_to_string(&csv).unwrap();
    assert!(!content.contains("Ana"));
    assert!(content.contains("Luis,06/03/2024,Ausente"));
}

#[test]
fn test_validation_errors_are_not_fatal() {
    let dir = setup_test_dir("cli_validation");

    asis()
        .current_dir(&dir)
        .write_stdin("2\nana\n2024-13-40\npresente\n2\nana\n2024-03-05\nquizás\n5\n")
        .assert()
        .success()
        .stdout(contains("Fecha inválida").and(contains("Asistencia inválida")));

    let content = fs::read_to_string(dir.join("asistencia.csv")).unwrap();
    assert_eq!(content.trim_end(), "Alumno,Fecha,Asistencia");
}

#[test]
fn test_config_file_disables_delete_and_moves_csv() {
    let dir = setup_test_dir("cli_config");
    fs::write(
        dir.join("asistencia.conf"),
        "backing_path: clase.csv\nallow_delete: false\n",
    )
    .unwrap();

    asis()
        .current_dir(&dir)
        .write_stdin("2\nana\n2024-03-05\npresente\n4\n")
        .assert()
        .success()
        .stdout(contains("4. Salir").and(contains("Eliminar").not()));

    assert!(dir.join("clase.csv").exists());
    assert!(!dir.join("asistencia.csv").exists());
}

#[test]
fn test_broken_config_exits_with_error() {
    let dir = setup_test_dir("cli_bad_config");
    fs::write(dir.join("asistencia.conf"), "allow_delete: [not, a, bool]\n").unwrap();

    asis()
        .current_dir(&dir)
        .write_stdin("5\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Configuration error"));
}

#[test]
fn test_version_flag() {
    asis()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_startup_warns_about_out_of_format_rows() {
    let dir = setup_test_dir("cli_nonconforming");
    fs::write(
        dir.join("asistencia.csv"),
        "Alumno,Fecha,Asistencia\nAna,05/03/2024,Presente\nLuis,06/03/2024,quizás\n",
    )
    .unwrap();

    asis()
        .current_dir(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(
            contains("El registro [2] tiene datos fuera de formato")
                .and(contains("[1] tiene").not()),
        );
}
