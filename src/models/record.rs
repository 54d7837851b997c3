use serde::{Deserialize, Serialize};

/// Column names of the backing file, in order.
pub const HEADER: [&str; 3] = ["Alumno", "Fecha", "Asistencia"];

/// One attendance row: who, when, and whether they showed up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Alumno")]
    pub student: String,
    /// Display form `DD/MM/YYYY`.
    #[serde(rename = "Fecha")]
    pub date: String,
    #[serde(rename = "Asistencia")]
    pub status: String,
}

impl Record {
    pub fn new(
        student: impl Into<String>,
        date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            student: student.into(),
            date: date.into(),
            status: status.into(),
        }
    }
}

/// Requested changes for an existing record.
/// A `None` or blank field means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub student: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
}

impl RecordPatch {
    /// Build a patch from raw prompt answers, where an empty answer means "no change".
    pub fn from_raw(student: &str, date: &str, status: &str) -> Self {
        Self {
            student: non_blank(student),
            date: non_blank(date),
            status: non_blank(status),
        }
    }

    pub fn student(mut self, v: impl Into<String>) -> Self {
        self.student = non_blank(&v.into());
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.date = non_blank(&v.into());
        self
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.status = non_blank(&v.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.student.is_none() && self.date.is_none() && self.status.is_none()
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
