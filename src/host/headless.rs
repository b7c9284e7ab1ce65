use super::{HostUi, PanelView, ToolActivation};

/// Vom Host angezeigte Meldung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Fensterloser Host: protokolliert alle UI-Aufrufe und gibt sie über `log` aus.
///
/// Wird von der CLI und den Tests verwendet.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    /// Alle angezeigten Meldungen in Reihenfolge
    pub notifications: Vec<Notification>,
    /// Aktuell aktives Werkzeug
    pub active_tool: Option<ToolActivation>,
    /// Letzter Panel-Zustand
    pub panel: Option<PanelView>,
    /// Anzahl der Panel-Aktualisierungen
    pub refresh_count: usize,
}

impl HeadlessHost {
    /// Erstellt einen Host ohne Meldungen und ohne aktives Werkzeug.
    pub fn new() -> Self {
        Self::default()
    }

    /// Letzte Meldung
    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl HostUi for HeadlessHost {
    fn show_error(&mut self, title: &str, message: &str) {
        log::info!("[{}] {}", title, message);
        self.notifications.push(Notification {
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }

    fn activate_tool(&mut self, activation: ToolActivation) {
        log::debug!("Tool aktiviert: {}", activation.id);
        self.active_tool = Some(activation);
    }

    fn cancel_tool(&mut self) {
        if let Some(tool) = self.active_tool.take() {
            log::debug!("Tool beendet: {}", tool.id);
        }
    }

    fn refresh_panel(&mut self, view: &PanelView) {
        self.panel = Some(view.clone());
        self.refresh_count += 1;
    }
}
