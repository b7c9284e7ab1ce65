//! Tile-Zugriff: Trait-Schnittstelle zur Host-Karte und das In-Memory-Tile.

use super::{ElementKind, SurfaceElement, TileElement};
use serde::{Deserialize, Serialize};

/// Indizierter Zugriff auf die geordnete Element-Sequenz eines Tiles.
///
/// Entfernen per Index verschiebt alle nachfolgenden Indizes um eins nach vorne.
pub trait TileAccess {
    /// Anzahl der Elemente
    fn num_elements(&self) -> usize;

    /// Element an Index `index`
    fn element(&self, index: usize) -> Option<&TileElement>;

    /// Mutierbares Element an Index `index`
    fn element_mut(&mut self, index: usize) -> Option<&mut TileElement>;

    /// Entfernt das Element an Index `index` und gibt es zurück.
    fn remove_element(&mut self, index: usize) -> Option<TileElement>;

    /// Index des ersten Elements (Vorwärts-Scan), das `predicate` erfüllt.
    fn find_first(&self, mut predicate: impl FnMut(&TileElement) -> bool) -> Option<usize>
    where
        Self: Sized,
    {
        (0..self.num_elements()).find(|&i| self.element(i).is_some_and(&mut predicate))
    }

    /// Index der ersten Oberfläche.
    fn surface_index(&self) -> Option<usize>
    where
        Self: Sized,
    {
        self.find_first(|el| el.kind() == ElementKind::Surface)
    }

    /// Erste Oberfläche (read-only).
    fn surface(&self) -> Option<&SurfaceElement>
    where
        Self: Sized,
    {
        self.surface_index()
            .and_then(|i| self.element(i))
            .and_then(TileElement::as_surface)
    }
}

/// In-Memory-Tile mit geordneter Element-Liste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile {
    elements: Vec<TileElement>,
}

impl Tile {
    /// Erstellt ein leeres Tile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt ein Element an (Builder).
    pub fn with(mut self, element: TileElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Read-only Sicht auf alle Elemente.
    pub fn elements(&self) -> &[TileElement] {
        &self.elements
    }
}

impl TileAccess for Tile {
    fn num_elements(&self) -> usize {
        self.elements.len()
    }

    fn element(&self, index: usize) -> Option<&TileElement> {
        self.elements.get(index)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut TileElement> {
        self.elements.get_mut(index)
    }

    fn remove_element(&mut self, index: usize) -> Option<TileElement> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }
}
