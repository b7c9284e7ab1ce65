//! Einmal-Pick-Tools und ihr Zustandsautomat.

use crate::host::ToolCursor;

/// Die beiden Pipetten-Werkzeuge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickTool {
    /// Übernimmt die Objekt-ID der ersten Szenerie auf dem Tile
    Scenery,
    /// Übernimmt Oberflächen- und Kanten-Stil der ersten Oberfläche
    Terrain,
}

impl PickTool {
    /// Tool-ID, unter der das Werkzeug beim Host aktiviert wird
    pub fn id(self) -> &'static str {
        match self {
            Self::Scenery => "scenery-picker",
            Self::Terrain => "terrain-picker",
        }
    }

    /// Cursor während das Werkzeug aktiv ist
    pub fn cursor(self) -> ToolCursor {
        ToolCursor::Picker
    }
}

/// Zustand der Pick-Tools: höchstens ein Werkzeug wartet auf Eingabe.
///
/// Übergänge: `activate` → wartet, `complete` (erfolgreicher Pick) → inaktiv,
/// `cancel` (extern, z.B. anderes Host-Tool) → inaktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickToolState {
    #[default]
    Inactive,
    AwaitingInput(PickTool),
}

impl PickToolState {
    /// Aktiviert `tool`. Ein bereits wartendes Werkzeug wird ersetzt und zurückgegeben.
    pub fn activate(&mut self, tool: PickTool) -> Option<PickTool> {
        std::mem::replace(self, Self::AwaitingInput(tool)).awaiting()
    }

    /// Das aktuell wartende Werkzeug
    pub fn awaiting(self) -> Option<PickTool> {
        match self {
            Self::Inactive => None,
            Self::AwaitingInput(tool) => Some(tool),
        }
    }

    pub fn is_active(self) -> bool {
        self.awaiting().is_some()
    }

    /// Eingabe verarbeitet: Werkzeug deaktivieren.
    pub fn complete(&mut self) -> Option<PickTool> {
        std::mem::take(self).awaiting()
    }

    /// Externer Abbruch. Ohne aktives Werkzeug ein No-op.
    pub fn cancel(&mut self) -> Option<PickTool> {
        std::mem::take(self).awaiting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_then_complete_returns_to_inactive() {
        let mut state = PickToolState::default();
        assert_eq!(state.activate(PickTool::Scenery), None);
        assert_eq!(state.awaiting(), Some(PickTool::Scenery));

        assert_eq!(state.complete(), Some(PickTool::Scenery));
        assert_eq!(state, PickToolState::Inactive);
    }

    #[test]
    fn activating_second_tool_replaces_first() {
        let mut state = PickToolState::default();
        state.activate(PickTool::Scenery);
        assert_eq!(state.activate(PickTool::Terrain), Some(PickTool::Scenery));
        assert_eq!(state.awaiting(), Some(PickTool::Terrain));
    }

    #[test]
    fn cancel_without_active_tool_is_noop() {
        let mut state = PickToolState::default();
        assert_eq!(state.cancel(), None);
        assert!(!state.is_active());
    }
}
