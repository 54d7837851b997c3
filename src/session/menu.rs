//! Menu entries and their numbering.
//!
//! Numbering is derived from the enabled capabilities, so turning delete
//! off moves "quit" from 5 to 4. The store never sees these numbers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    View,
    Add,
    Edit,
    Delete,
    Quit,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::View => "Ver Asistencia",
            Intent::Add => "Registrar Asistencia",
            Intent::Edit => "Editar Asistencia",
            Intent::Delete => "Eliminar Asistencia",
            Intent::Quit => "Salir",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<Intent>,
}

impl Menu {
    pub fn new(allow_delete: bool) -> Self {
        let mut entries = vec![Intent::View, Intent::Add, Intent::Edit];
        if allow_delete {
            entries.push(Intent::Delete);
        }
        entries.push(Intent::Quit);
        Self { entries }
    }

    /// `(option number, intent)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Intent)> + '_ {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, *e))
    }

    /// Map a typed option to its intent; `None` for anything unrecognized.
    pub fn resolve(&self, choice: &str) -> Option<Intent> {
        let n: usize = choice.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| self.entries.get(i)).copied()
    }

    pub fn render(&self) -> String {
        self.entries()
            .map(|(n, intent)| format!("{}. {}", n, intent.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
