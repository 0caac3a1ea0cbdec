mod color;
mod scene;
mod shape;

pub use color::Color;
pub use scene::{Element, ElementId, ElementKind, Scene};
pub use shape::{Attrs, FaceRole, ShapeFactory, ShapeHandle, SHADE_FRACTION};

use std::fmt;
use std::time::Duration;

use crate::error::Result;
use crate::geometry::Path;

/// Whether an element is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Presentation properties a shape forwards to its sub-faces.
///
/// Fill is shaded per face; every other property is copied to all faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presentation {
    Fill(Color),
    Opacity(f64),
    Visibility(Visibility),
    TranslateX(f64),
    TranslateY(f64),
}

/// A single attribute of a host drawing element.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// Path data (`d`).
    Path(Path),
    /// Paint order among siblings; higher is painted later.
    ZIndex(f64),
    /// Style class name.
    Class(&'static str),
    Fill(Color),
    Opacity(f64),
    Visibility(Visibility),
    TranslateX(f64),
    TranslateY(f64),
}

impl From<Presentation> for Attribute {
    fn from(value: Presentation) -> Self {
        match value {
            Presentation::Fill(c) => Self::Fill(c),
            Presentation::Opacity(v) => Self::Opacity(v),
            Presentation::Visibility(v) => Self::Visibility(v),
            Presentation::TranslateX(v) => Self::TranslateX(v),
            Presentation::TranslateY(v) => Self::TranslateY(v),
        }
    }
}

/// The host drawing surface.
///
/// Elements are addressed by plain ids minted by the renderer; the renderer
/// owns element state and lifetime.
pub trait Renderer {
    /// Element handle.
    type Id: Copy + Eq + fmt::Debug;

    /// Creates a group element.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot create the element.
    fn create_group(&mut self) -> Result<Self::Id>;

    /// Creates a path element with the given path data.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot create the element.
    fn create_path(&mut self, path: &Path) -> Result<Self::Id>;

    /// Sets an attribute immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not exist.
    fn set_attribute(&mut self, id: Self::Id, attribute: Attribute) -> Result<()>;

    /// Tweens an attribute to `target` over `duration`.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not exist.
    fn animate_attribute(&mut self, id: Self::Id, target: Attribute, duration: Duration)
        -> Result<()>;

    /// Destroys an element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not exist.
    fn destroy(&mut self, id: Self::Id) -> Result<()>;

    /// Lightens (`fraction > 0`) or darkens (`fraction < 0`) a colour.
    fn shade_color(&self, color: Color, fraction: f64) -> Color {
        color.brighten(fraction)
    }
}
