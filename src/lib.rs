//! asistencia library root.
//! Exposes the record store, the interactive session, and the run() entry point.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use session::Session;
use std::io;
use store::Store;
use ui::messages::{header, info, success, warning};

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI (only --help / --version)
    let _cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load()?;

    // 3️⃣ open the roster (creates the CSV with its header if missing)
    header("Control de Asistencia");
    let existed = cfg.backing_path.exists();
    let store = Store::open(cfg)?;
    if existed {
        info(format!("Archivo de registros: {}", store.path().display()));
    } else {
        success(format!("Archivo de registros creado: {}", store.path().display()));
    }

    for (i, rec) in store.nonconforming() {
        warning(format!(
            "El registro [{}] tiene datos fuera de formato: {}, {}, {}",
            i, rec.student, rec.date, rec.status
        ));
    }

    // 4️⃣ interactive loop
    let stdin = io::stdin();
    let mut session = Session::new(store, stdin.lock(), io::stdout());
    session.run()
}
