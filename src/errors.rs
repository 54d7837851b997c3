//! Unified application error type.
//! The store, the session controller and the config loader all return
//! AppError so that every failure is reported through the same channel.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Asistencia inválida: '{value}'. Escriba {allowed}.")]
    InvalidStatus { value: String, allowed: String },

    #[error("Fecha inválida: '{0}'. Use el formato YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("El nombre del alumno no puede estar vacío.")]
    EmptyStudent,

    // ---------------------------
    // Navigation
    // ---------------------------
    #[error("Número de registro inválido. Elija un número entre 1 y {len}.")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Entrada inválida: '{0}'. Por favor, ingrese un número.")]
    NotANumber(String),

    /// User typed the back keyword. Not a fault.
    #[error("Operación cancelada.")]
    BackRequested,

    #[error("La eliminación de registros está deshabilitada.")]
    DeleteDisabled,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl AppError {
    /// Errors the session recovers from and reports; everything else is
    /// an infrastructure failure that ends the program.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::Csv(_) | AppError::Config(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
