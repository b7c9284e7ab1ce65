use crate::shared::EditorOptions;

/// Spinner im Panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerField {
    /// Ziel-Objekt-ID (klemmt bei 0)
    TargetObject,
    /// Höhenänderung in Stufen (vorzeichenbehaftet, ohne Grenze)
    HeightDelta,
    /// Oberflächen-Stil (klemmt bei 0)
    SurfaceStyle,
    /// Kanten-Stil (klemmt bei 0)
    EdgeStyle,
}

/// Richtung eines Spinner-Klicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStep {
    Increment,
    Decrement,
}

/// Checkboxen im Panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleField {
    DeleteObjects,
    FlattenTerrain,
    ApplyStyle,
}

/// Parameter des Terraform-Laufs.
///
/// Wird von Panel-Callbacks und Pick-Tools mutiert und nie persistiert;
/// jede Sitzung startet mit den Werten aus `EditorOptions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Katalog-ID der Szenerie, deren Tiles bearbeitet werden
    pub target_object_id: u32,
    /// Treffer-Szenerie beim Ausführen entfernen
    pub delete_objects: bool,
    /// Höhenänderung in logischen Stufen
    pub height_delta: i32,
    /// Oberfläche abflachen
    pub flatten_terrain: bool,
    /// Oberflächen- und Kanten-Stil überschreiben
    pub apply_style: bool,
    pub surface_style_id: u32,
    pub edge_style_id: u32,
}

impl SelectionState {
    /// Selektion mit den Standard-Startwerten.
    pub fn new() -> Self {
        Self::from_options(&EditorOptions::default())
    }

    /// Selektion mit den Startwerten aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            target_object_id: 0,
            delete_objects: options.initial_delete_objects,
            height_delta: 0,
            flatten_terrain: options.initial_flatten_terrain,
            apply_style: options.initial_apply_style,
            surface_style_id: 0,
            edge_style_id: 0,
        }
    }

    /// Wendet einen Spinner-Klick an. Gibt `true` zurück wenn sich der Wert geändert hat.
    ///
    /// Die ID-Felder klemmen bei 0 (Dekrement ist dort ein No-op).
    pub fn step(&mut self, field: SpinnerField, step: SpinnerStep) -> bool {
        fn step_id(value: &mut u32, step: SpinnerStep) -> bool {
            let next = match step {
                SpinnerStep::Increment => value.saturating_add(1),
                SpinnerStep::Decrement => value.saturating_sub(1),
            };
            std::mem::replace(value, next) != next
        }

        match field {
            SpinnerField::TargetObject => step_id(&mut self.target_object_id, step),
            SpinnerField::SurfaceStyle => step_id(&mut self.surface_style_id, step),
            SpinnerField::EdgeStyle => step_id(&mut self.edge_style_id, step),
            SpinnerField::HeightDelta => {
                let next = match step {
                    SpinnerStep::Increment => self.height_delta.saturating_add(1),
                    SpinnerStep::Decrement => self.height_delta.saturating_sub(1),
                };
                std::mem::replace(&mut self.height_delta, next) != next
            }
        }
    }

    /// Setzt eine Checkbox.
    pub fn set_toggle(&mut self, field: ToggleField, checked: bool) {
        let flag = match field {
            ToggleField::DeleteObjects => &mut self.delete_objects,
            ToggleField::FlattenTerrain => &mut self.flatten_terrain,
            ToggleField::ApplyStyle => &mut self.apply_style,
        };
        *flag = checked;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
