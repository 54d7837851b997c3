use clap::Parser;

/// Command-line interface definition for asistencia.
/// The tool is fully interactive, so the parser only supplies
/// `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "asistencia",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive attendance roster kept in a CSV file (Alumno,Fecha,Asistencia)",
    long_about = None
)]
pub struct Cli {}
