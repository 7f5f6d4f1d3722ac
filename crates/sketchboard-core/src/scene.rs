//! Scene: the ordered collection of elements on the board.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Serialize};

/// An immutable-by-convention snapshot of the board.
///
/// Element order is creation order, which is also render order. Edits return
/// a new scene and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Id the next appended element will receive.
    pub fn next_id(&self) -> ElementId {
        self.elements.len()
    }

    /// New scene with `element` appended.
    pub fn with_appended(&self, element: Element) -> Scene {
        let mut elements = self.elements.clone();
        elements.push(element);
        Scene { elements }
    }

    /// New scene with the element at `element.id()` replaced.
    ///
    /// Returns `None` if no element has that id.
    pub fn with_replaced(&self, element: Element) -> Option<Scene> {
        let id = element.id();
        if id >= self.elements.len() {
            return None;
        }
        let mut elements = self.elements.clone();
        elements[id] = element;
        Some(Scene { elements })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}
