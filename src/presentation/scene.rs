use std::fmt::Write as _;
use std::time::Duration;

use slotmap::SlotMap;

use crate::error::{Result, SceneError};
use crate::geometry::Path;

use super::{Attribute, Color, Renderer, Visibility};

slotmap::new_key_type! {
    /// Unique identifier for an element in a [`Scene`].
    pub struct ElementId;
}

/// What an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Group,
    Path,
}

/// State of one drawing element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    /// Path data; empty for groups.
    pub path: Path,
    pub z_index: f64,
    pub class: Option<&'static str>,
    pub fill: Option<Color>,
    pub opacity: f64,
    pub visibility: Visibility,
    pub translate_x: f64,
    pub translate_y: f64,
    seq: u64,
}

impl Element {
    fn new(kind: ElementKind, path: Path, seq: u64) -> Self {
        Self {
            kind,
            path,
            z_index: 0.0,
            class: None,
            fill: None,
            opacity: 1.0,
            visibility: Visibility::Visible,
            translate_x: 0.0,
            translate_y: 0.0,
            seq,
        }
    }

    fn apply(&mut self, attribute: Attribute) {
        match attribute {
            Attribute::Path(path) => self.path = path,
            Attribute::ZIndex(z) => self.z_index = z,
            Attribute::Class(class) => self.class = Some(class),
            Attribute::Fill(color) => self.fill = Some(color),
            Attribute::Opacity(v) => self.opacity = v,
            Attribute::Visibility(v) => self.visibility = v,
            Attribute::TranslateX(v) => self.translate_x = v,
            Attribute::TranslateY(v) => self.translate_y = v,
        }
    }
}

/// In-memory drawing surface.
///
/// Elements live in a generational arena, so ids of destroyed elements are
/// never reused. The scene has no clock: animated attributes take their
/// target value at once.
#[derive(Debug, Default)]
pub struct Scene {
    elements: SlotMap<ElementId, Element>,
    next_seq: u64,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element, or `None` if it was destroyed.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Path elements in the order a host paints them.
    ///
    /// Sorted by z-index truncated to an integer; ties keep creation order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn paint_order(&self) -> Vec<ElementId> {
        let mut paths: Vec<(ElementId, &Element)> = self
            .elements
            .iter()
            .filter(|(_, e)| e.kind == ElementKind::Path)
            .collect();
        paths.sort_by_key(|(_, e)| (e.z_index as i64, e.seq));
        paths.into_iter().map(|(id, _)| id).collect()
    }

    /// Renders every visible, non-empty path as an SVG fragment in paint order.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for id in self.paint_order() {
            let Some(e) = self.elements.get(id) else {
                continue;
            };
            if e.visibility == Visibility::Hidden || e.path.is_empty() {
                continue;
            }
            let _ = write!(out, "<path d=\"{}\"", e.path);
            if let Some(class) = e.class {
                let _ = write!(out, " class=\"{class}\"");
            }
            if let Some(fill) = e.fill {
                let _ = write!(out, " fill=\"{fill}\"");
            }
            if e.opacity < 1.0 {
                let _ = write!(out, " opacity=\"{}\"", e.opacity);
            }
            if e.translate_x != 0.0 || e.translate_y != 0.0 {
                let _ = write!(
                    out,
                    " transform=\"translate({},{})\"",
                    e.translate_x, e.translate_y
                );
            }
            out.push_str("/>\n");
        }
        out
    }

    fn insert(&mut self, kind: ElementKind, path: Path) -> ElementId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.elements.insert(Element::new(kind, path, seq))
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| SceneError::ElementNotFound(format!("{id:?}")).into())
    }
}

impl Renderer for Scene {
    type Id = ElementId;

    fn create_group(&mut self) -> Result<ElementId> {
        Ok(self.insert(ElementKind::Group, Path::new()))
    }

    fn create_path(&mut self, path: &Path) -> Result<ElementId> {
        Ok(self.insert(ElementKind::Path, path.clone()))
    }

    fn set_attribute(&mut self, id: ElementId, attribute: Attribute) -> Result<()> {
        self.element_mut(id)?.apply(attribute);
        Ok(())
    }

    fn animate_attribute(
        &mut self,
        id: ElementId,
        target: Attribute,
        duration: Duration,
    ) -> Result<()> {
        tracing::trace!(?id, ?duration, "snapping animated attribute");
        self.set_attribute(id, target)
    }

    fn destroy(&mut self, id: ElementId) -> Result<()> {
        self.elements
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SceneError::ElementNotFound(format!("{id:?}")).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn square() -> Path {
        Path::to_line_path(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
            ],
            true,
        )
    }

    #[test]
    fn new_elements_have_defaults() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        let id = scene.create_path(&square()).unwrap();
        let e = scene.element(id).unwrap();
        assert_eq!(e.kind, ElementKind::Path);
        assert!((e.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(e.visibility, Visibility::Visible);
        assert_eq!(e.class, None);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut scene = Scene::new();
        let id = scene.create_group().unwrap();
        scene.destroy(id).unwrap();
        assert!(scene.set_attribute(id, Attribute::Opacity(0.5)).is_err());
        assert!(scene.destroy(id).is_err());
        assert!(scene.element(id).is_none());
    }

    #[test]
    fn animate_snaps_to_target() {
        let mut scene = Scene::new();
        let id = scene.create_path(&square()).unwrap();
        scene
            .animate_attribute(id, Attribute::TranslateY(4.0), Duration::from_secs(1))
            .unwrap();
        assert!((scene.element(id).unwrap().translate_y - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn paint_order_truncates_and_keeps_creation_order() {
        let mut scene = Scene::new();
        let a = scene.create_path(&square()).unwrap();
        let b = scene.create_path(&square()).unwrap();
        let c = scene.create_path(&square()).unwrap();
        let group = scene.create_group().unwrap();
        scene.set_attribute(a, Attribute::ZIndex(5.9)).unwrap();
        scene.set_attribute(b, Attribute::ZIndex(5.1)).unwrap();
        scene.set_attribute(c, Attribute::ZIndex(-2.0)).unwrap();
        scene.set_attribute(group, Attribute::ZIndex(100.0)).unwrap();
        assert_eq!(scene.paint_order(), vec![c, a, b]);
    }

    #[test]
    fn svg_skips_hidden_and_empty_paths() {
        let mut scene = Scene::new();
        let shown = scene.create_path(&square()).unwrap();
        let hidden = scene.create_path(&square()).unwrap();
        scene.create_path(&Path::new()).unwrap();
        scene
            .set_attribute(shown, Attribute::Fill(Color::rgb(1, 2, 3)))
            .unwrap();
        scene
            .set_attribute(hidden, Attribute::Visibility(Visibility::Hidden))
            .unwrap();
        let svg = scene.to_svg();
        assert_eq!(svg.lines().count(), 1);
        assert!(svg.contains("fill=\"rgb(1,2,3)\""));
        assert!(svg.starts_with("<path d=\"M 0 0 L 1 0 L 1 1 Z\""));
    }
}
