//! Use-Case: Terraformer-Fenster und Panel-Aktualisierung.

use crate::app::AppState;
use crate::host::{HostUi, PanelView};

/// Öffnet das Fenster und füllt die Widgets.
pub fn open(state: &mut AppState, host: &mut dyn HostUi) {
    state.panel.open = true;
    refresh(state, host);
    log::info!("Terraformer-Fenster geoeffnet");
}

/// Schließt das Fenster; weitere Aktualisierungen entfallen.
pub fn close(state: &mut AppState) {
    state.panel.open = false;
}

/// Überträgt die Selektion in die Widgets, sofern das Fenster offen ist.
pub fn refresh(state: &AppState, host: &mut dyn HostUi) {
    if state.panel.open {
        host.refresh_panel(&PanelView::from_selection(&state.selection));
    }
}
