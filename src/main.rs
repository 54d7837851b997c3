//! asistencia main entrypoint.

use asistencia::run;
use asistencia::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
