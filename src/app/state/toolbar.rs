use crate::app::tools::ToolControl;

/// Zustand der Werkzeug-Schaltflächen (höchstens eine gedrückt).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarState {
    checked: Option<ToolControl>,
}

impl ToolbarState {
    /// Aktuell gedrückte Schaltfläche.
    pub fn checked(&self) -> Option<ToolControl> {
        self.checked
    }

    pub fn is_checked(&self, control: ToolControl) -> bool {
        self.checked == Some(control)
    }

    /// Drückt `control`.
    pub fn check(&mut self, control: ToolControl) {
        self.checked = Some(control);
    }

    /// Löst `control`, falls es gedrückt ist.
    pub fn uncheck(&mut self, control: ToolControl) {
        if self.checked == Some(control) {
            self.checked = None;
        }
    }
}
