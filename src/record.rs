/// Field separator on the wire. Fields are expected not to contain it.
pub const SEPARATOR: char = ';';

/// One student entry: who, which class, which grade. Free-form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub class_label: String,
    pub grade: String,
}

impl Record {
    pub fn new(name: impl Into<String>, class_label: impl Into<String>, grade: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            class_label: class_label.into(),
            grade: grade.into(),
        }
    }

    /// Request frame sent to the server: `name;class;grade`, no terminator.
    pub fn to_wire(&self) -> String {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.name, self.class_label, self.grade
        )
    }

    /// Line written by the append tool, without the trailing newline.
    pub fn to_append_line(&self) -> String {
        format!(
            "Nome: {} | Turma: {} | Nota: {}",
            self.name, self.class_label, self.grade
        )
    }
}
