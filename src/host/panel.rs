use crate::app::SelectionState;

/// Widget-Werte des Terraformer-Panels, benannt nach den Widget-Namen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    /// `id-spinner`
    pub id_spinner: String,
    /// `height-spinner`
    pub height_spinner: String,
    /// `surface-spinner`
    pub surface_spinner: String,
    /// `edge-spinner`
    pub edge_spinner: String,
    /// `delete-checkbox`
    pub delete_checkbox: bool,
    /// `flatten-checkbox`
    pub flatten_checkbox: bool,
    /// `apply-style-checkbox`
    pub apply_style_checkbox: bool,
}

impl PanelView {
    /// Baut die Widget-Werte aus dem Selektionszustand.
    pub fn from_selection(selection: &SelectionState) -> Self {
        Self {
            id_spinner: selection.target_object_id.to_string(),
            height_spinner: selection.height_delta.to_string(),
            surface_spinner: selection.surface_style_id.to_string(),
            edge_spinner: selection.edge_style_id.to_string(),
            delete_checkbox: selection.delete_objects,
            flatten_checkbox: selection.flatten_terrain,
            apply_style_checkbox: selection.apply_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_height_delta_is_rendered_signed() {
        let selection = SelectionState {
            target_object_id: 12,
            height_delta: -3,
            ..SelectionState::new()
        };
        let view = PanelView::from_selection(&selection);
        assert_eq!(view.id_spinner, "12");
        assert_eq!(view.height_spinner, "-3");
        assert!(view.flatten_checkbox);
    }
}
