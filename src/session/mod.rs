//! Interactive session: turns menu choices into store operations.
//!
//! Conventions at every field prompt:
//! - a blank answer means "keep the current value" (edit only);
//! - a back keyword (`volver` by default) aborts the whole operation
//!   before anything is persisted.

pub mod menu;

pub use menu::{Intent, Menu};

use crate::errors::{AppError, AppResult};
use crate::models::RecordPatch;
use crate::store::{Store, parse_index};
use crate::ui::messages::{Level, render, render_header};
use crate::utils::table::{Column, Table};
use std::fmt;
use std::io::{BufRead, Write};

pub struct Session<R, W> {
    store: Store,
    menu: Menu,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        let menu = Menu::new(store.can_delete());
        Self {
            store,
            menu,
            input,
            output,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    /// Menu loop. Returns when the user quits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", render_header("Menú de Control de Asistencia"))?;
            writeln!(self.output, "{}", self.menu.render())?;

            let Some(choice) = self.read_line("Seleccione una opción: ")? else {
                break;
            };

            match self.menu.resolve(&choice) {
                Some(Intent::Quit) => break,
                Some(intent) => self.dispatch(intent)?,
                None => self.say(
                    Level::Warning,
                    "Opción no válida. Por favor, intente de nuevo.",
                )?,
            }
        }

        writeln!(self.output, "¡Hasta luego!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Run one intent. Domain errors end the intent with a message;
    /// storage errors propagate.
    pub fn dispatch(&mut self, intent: Intent) -> AppResult<()> {
        let result = match intent {
            Intent::View => self.view(),
            Intent::Add => self.add(),
            Intent::Edit => self.edit(),
            Intent::Delete => self.delete(),
            Intent::Quit => Ok(()),
        };

        match result {
            Ok(()) => Ok(()),
            Err(AppError::BackRequested) => self.say(Level::Info, AppError::BackRequested),
            Err(e) if e.is_recoverable() => self.say(Level::Error, e),
            Err(e) => Err(e),
        }
    }

    fn view(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n{}", render_header("Lista de Asistencia"))?;
        self.print_roster()
    }

    fn add(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n{}", render_header("Registrar Nueva Asistencia"))?;
        if let Some(hint) = self.back_hint() {
            self.say(Level::Info, hint)?;
        }

        let student = self.ask("Nombre del Alumno: ")?;
        let date = self.ask("Fecha (YYYY-MM-DD): ")?;
        let statuses = self.store.config().status_hint();
        let status = self.ask(&format!("Asistencia ({statuses}): "))?;

        self.store.add(&student, &date, &status)?;
        self.say(Level::Success, "Registro de asistencia guardado con éxito.")
    }

    fn edit(&mut self) -> AppResult<()> {
        if self.store.is_empty() {
            return self.say(Level::Info, "No hay registros para editar.");
        }

        let index = self.pick_index("editar")?;
        let current = self.store.get(index)?.clone();
        self.say(
            Level::Info,
            format!(
                "Editando el registro: {}, {}, {}",
                current.student, current.date, current.status
            ),
        )?;

        let student = self.ask("Nuevo nombre del Alumno (dejar en blanco para no cambiar): ")?;
        let date = self.ask("Nueva Fecha (YYYY-MM-DD, dejar en blanco para no cambiar): ")?;
        let statuses = self.store.config().status_hint();
        let status = self.ask(&format!(
            "Nueva Asistencia ({statuses}, dejar en blanco para no cambiar): "
        ))?;

        let patch = RecordPatch::from_raw(&student, &date, &status);
        let outcome = self.store.edit(index, &patch)?;

        for w in &outcome.warnings {
            self.say(Level::Warning, format!("{w} El campo no se ha modificado."))?;
        }

        if outcome.changed {
            self.say(Level::Success, "Registro actualizado con éxito.")
        } else {
            self.say(Level::Info, "No se realizaron cambios.")
        }
    }

    fn delete(&mut self) -> AppResult<()> {
        if !self.store.can_delete() {
            return Err(AppError::DeleteDisabled);
        }
        if self.store.is_empty() {
            return self.say(Level::Info, "No hay registros para eliminar.");
        }

        let index = self.pick_index("eliminar")?;
        let student = self.store.get(index)?.student.clone();

        let answer = self.ask(&format!(
            "¿Está seguro que desea eliminar el registro de {student}? (s/n): "
        ))?;
        let confirmed = matches!(answer.to_lowercase().as_str(), "s" | "si" | "sí");

        match self.store.delete(index, confirmed)? {
            Some(_) => self.say(Level::Success, "Registro eliminado con éxito."),
            None => self.say(Level::Info, AppError::BackRequested),
        }
    }

    /// Show the roster and ask for a record number until a valid one is
    /// typed or the user backs out.
    fn pick_index(&mut self, verb: &str) -> AppResult<usize> {
        loop {
            self.print_roster()?;

            let hint = self
                .back_hint()
                .map(|h| format!(" ({h})"))
                .unwrap_or_default();
            let raw = self.ask(&format!(
                "\nIngrese el número del registro que desea {verb}{hint}: "
            ))?;

            match parse_index(&raw).and_then(|i| self.store.get(i).map(|_| i)) {
                Ok(i) => return Ok(i),
                Err(e @ (AppError::NotANumber(_) | AppError::IndexOutOfRange { .. })) => {
                    self.say(Level::Error, e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_roster(&mut self) -> AppResult<()> {
        if self.store.is_empty() {
            return self.say(Level::Info, "No hay registros de asistencia.");
        }

        let mut table = Table::new(vec![
            Column::new("#"),
            Column::new("Alumno"),
            Column::new("Fecha"),
            Column::new("Asistencia"),
        ]);
        for (i, rec) in self.store.list() {
            table.add_row(vec![
                format!("[{i}]"),
                rec.student.clone(),
                rec.date.clone(),
                rec.status.clone(),
            ]);
        }

        write!(self.output, "{}", table.render())?;
        Ok(())
    }

    /// Prompt for a field. The back keyword and end of input both abort.
    fn ask(&mut self, label: &str) -> AppResult<String> {
        match self.read_line(label)? {
            Some(answer) if !self.store.config().is_back(&answer) => Ok(answer),
            _ => Err(AppError::BackRequested),
        }
    }

    /// `None` at end of input.
    fn read_line(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn say<T: fmt::Display>(&mut self, level: Level, msg: T) -> AppResult<()> {
        writeln!(self.output, "{}", render(level, msg))?;
        Ok(())
    }

    /// `None` when back navigation is switched off (no keywords configured).
    fn back_hint(&self) -> Option<String> {
        self.store
            .config()
            .back_keywords
            .first()
            .map(|k| format!("escriba '{k}' para cancelar"))
    }
}
