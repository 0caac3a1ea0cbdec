use std::fmt;
use std::time::Duration;

use crate::error::{Result, ShapeError};
use crate::geometry::{CuboidSpec, FaceResult, GeometryPatch, ShapeSpec, WedgeSpec};
use crate::operations::{CuboidPath, WedgePath};
use crate::projection::Projection;

use super::{Attribute, Color, Presentation, Renderer, Visibility};

/// Fraction by which lit faces are brightened and shadowed faces darkened.
pub const SHADE_FRACTION: f64 = 0.1;

/// What a sub-face of a shape represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceRole {
    /// Box front or back.
    Front,
    /// Box top or bottom, or the wedge cap.
    Top,
    /// Box right or left.
    Side,
    /// Wedge outer wall.
    Out,
    /// Wedge inner wall.
    Inn,
    /// Wedge end wall at the start angle.
    Side1,
    /// Wedge end wall at the end angle.
    Side2,
}

impl FaceRole {
    /// Style class applied to the face element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Front => "facet3d-front",
            Self::Top => "facet3d-top",
            Self::Side | Self::Out | Self::Inn | Self::Side1 | Self::Side2 => "facet3d-side",
        }
    }
}

/// Face table of a box: role and fill shading, in builder order.
const CUBOID_FACES: [(FaceRole, f64); 3] = [
    (FaceRole::Front, 0.0),
    (FaceRole::Top, SHADE_FRACTION),
    (FaceRole::Side, -SHADE_FRACTION),
];

/// Face table of a wedge: role and fill shading, in builder order.
const WEDGE_FACES: [(FaceRole, f64); 5] = [
    (FaceRole::Top, 0.0),
    (FaceRole::Out, -SHADE_FRACTION),
    (FaceRole::Inn, -SHADE_FRACTION),
    (FaceRole::Side1, -SHADE_FRACTION),
    (FaceRole::Side2, -SHADE_FRACTION),
];

/// A shape update: optional geometry plus presentation properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    pub geometry: Option<GeometryPatch>,
    pub presentation: Vec<Presentation>,
}

impl Attrs {
    /// An update that only changes geometry.
    #[must_use]
    pub fn geometry(patch: impl Into<GeometryPatch>) -> Self {
        Self {
            geometry: Some(patch.into()),
            presentation: Vec::new(),
        }
    }

    /// An update that only changes presentation.
    #[must_use]
    pub fn presentation(property: Presentation) -> Self {
        Self {
            geometry: None,
            presentation: vec![property],
        }
    }

    /// Adds a presentation property.
    #[must_use]
    pub fn with(mut self, property: Presentation) -> Self {
        self.presentation.push(property);
        self
    }
}

/// Builds shape handles. Holds the projection boxes are drawn with.
#[derive(Debug, Clone)]
pub struct ShapeFactory<P> {
    projection: P,
}

impl<P: Projection + Clone> ShapeFactory<P> {
    /// Creates a factory drawing with `projection`.
    #[must_use]
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    /// Creates the elements of a box and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails to create or configure an element.
    pub fn cuboid<R: Renderer>(
        &self,
        renderer: &mut R,
        spec: CuboidSpec,
    ) -> Result<ShapeHandle<R::Id, P>> {
        ShapeHandle::create(renderer, self.projection.clone(), ShapeSpec::Cuboid(spec))
    }

    /// Creates the elements of a wedge and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails to create or configure an element.
    pub fn wedge<R: Renderer>(
        &self,
        renderer: &mut R,
        spec: WedgeSpec,
    ) -> Result<ShapeHandle<R::Id, P>> {
        ShapeHandle::create(renderer, self.projection.clone(), ShapeSpec::Wedge(spec))
    }
}

#[derive(Debug, Clone, Copy)]
struct SubFace<Id> {
    id: Id,
    role: FaceRole,
    shade: f64,
}

/// An in-flight animation. Geometry is re-derived from `from`/`to` on each
/// tick; nothing else is remembered.
struct Tween {
    from: ShapeSpec,
    to: Option<ShapeSpec>,
    duration: Duration,
    elapsed: Duration,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

/// A solid drawn as a group of face elements.
///
/// The handle is the only owner of its face elements. Geometry changes
/// recompute every face and rewrite the existing elements in place.
#[derive(Debug)]
pub struct ShapeHandle<Id, P> {
    projection: P,
    group: Id,
    faces: Vec<SubFace<Id>>,
    spec: ShapeSpec,
    fill: Option<Color>,
    tween: Option<Tween>,
}

impl<Id: Copy + Eq + fmt::Debug, P: Projection> ShapeHandle<Id, P> {
    fn create<R: Renderer<Id = Id>>(
        renderer: &mut R,
        projection: P,
        spec: ShapeSpec,
    ) -> Result<Self> {
        let table: &[(FaceRole, f64)] = match spec {
            ShapeSpec::Cuboid(_) => &CUBOID_FACES,
            ShapeSpec::Wedge(_) => &WEDGE_FACES,
        };
        let (results, group_z) = build_faces(&projection, &spec);

        let group = renderer.create_group()?;
        let mut faces = Vec::with_capacity(table.len());
        for (&(role, shade), face) in table.iter().zip(results) {
            let id = renderer.create_path(&face.path)?;
            renderer.set_attribute(id, Attribute::Class(role.class()))?;
            renderer.set_attribute(id, Attribute::ZIndex(face.z_order))?;
            faces.push(SubFace { id, role, shade });
        }
        renderer.set_attribute(group, Attribute::ZIndex(group_z))?;

        tracing::debug!(kind = spec.kind(), faces = faces.len(), "created shape");
        Ok(Self {
            projection,
            group,
            faces,
            spec,
            fill: None,
            tween: None,
        })
    }

    /// The current geometry, possibly mid-animation.
    #[must_use]
    pub fn spec(&self) -> &ShapeSpec {
        &self.spec
    }

    /// The group element holding the shape.
    #[must_use]
    pub fn group(&self) -> Id {
        self.group
    }

    /// The face elements with their roles, in builder order.
    #[must_use]
    pub fn faces(&self) -> Vec<(FaceRole, Id)> {
        self.faces.iter().map(|f| (f.role, f.id)).collect()
    }

    /// The element of the first face with `role`.
    #[must_use]
    pub fn face(&self, role: FaceRole) -> Option<Id> {
        self.faces.iter().find(|f| f.role == role).map(|f| f.id)
    }

    /// The last fill set on the shape.
    #[must_use]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Recomputes every face from `spec` and rewrites the existing elements.
    ///
    /// All faces are computed before any element is touched, and the handle
    /// takes `spec` as its current geometry before the writes start.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::KindMismatch` if `spec` is not the shape's kind;
    /// nothing is changed then. If the renderer rejects an attribute, the
    /// elements written before the failure already show `spec` and the rest
    /// still show the previous geometry. Calling `set_paths` again with
    /// [`spec`](Self::spec) re-applies every face.
    pub fn set_paths<R: Renderer<Id = Id>>(
        &mut self,
        renderer: &mut R,
        spec: ShapeSpec,
    ) -> Result<()> {
        if std::mem::discriminant(&spec) != std::mem::discriminant(&self.spec) {
            return Err(ShapeError::KindMismatch {
                patch: spec.kind(),
                shape: self.spec.kind(),
            }
            .into());
        }
        let (results, group_z) = build_faces(&self.projection, &spec);
        self.spec = spec;
        for (face, result) in self.faces.iter().zip(results) {
            renderer.set_attribute(face.id, Attribute::Path(result.path))?;
            renderer.set_attribute(face.id, Attribute::ZIndex(result.z_order))?;
        }
        renderer.set_attribute(self.group, Attribute::ZIndex(group_z))?;
        tracing::trace!(?spec, "recomputed shape faces");
        Ok(())
    }

    /// Applies geometry and presentation immediately.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::KindMismatch` for a patch of the other shape
    /// kind, or an error from the renderer.
    pub fn attr<R: Renderer<Id = Id>>(&mut self, renderer: &mut R, attrs: Attrs) -> Result<()> {
        if let Some(patch) = attrs.geometry {
            let spec = self.resolve(&patch)?;
            self.set_paths(renderer, spec)?;
        }
        for property in attrs.presentation {
            self.set_presentation(renderer, property)?;
        }
        Ok(())
    }

    /// Applies one presentation property to every face.
    ///
    /// # Errors
    ///
    /// Returns an error from the renderer.
    pub fn set_presentation<R: Renderer<Id = Id>>(
        &mut self,
        renderer: &mut R,
        property: Presentation,
    ) -> Result<()> {
        if let Presentation::Fill(color) = property {
            self.fill = Some(color);
        }
        for face in &self.faces {
            let attribute = face_attribute(&*renderer, face, property);
            renderer.set_attribute(face.id, attribute)?;
        }
        Ok(())
    }

    /// Fills lit faces with `color` and shades the others.
    ///
    /// # Errors
    ///
    /// Returns an error from the renderer.
    pub fn set_fill<R: Renderer<Id = Id>>(&mut self, renderer: &mut R, color: Color) -> Result<()> {
        self.set_presentation(renderer, Presentation::Fill(color))
    }

    /// Hides every face.
    ///
    /// # Errors
    ///
    /// Returns an error from the renderer.
    pub fn hide<R: Renderer<Id = Id>>(&mut self, renderer: &mut R) -> Result<()> {
        self.set_presentation(renderer, Presentation::Visibility(Visibility::Hidden))
    }

    /// Shows every face.
    ///
    /// # Errors
    ///
    /// Returns an error from the renderer.
    pub fn show<R: Renderer<Id = Id>>(&mut self, renderer: &mut R) -> Result<()> {
        self.set_presentation(renderer, Presentation::Visibility(Visibility::Visible))
    }

    /// Animates toward `attrs` over `duration`.
    ///
    /// Geometry is never tweened as path data: each [`advance`](Self::advance)
    /// interpolates the spec and recomputes the faces. Presentation
    /// properties are handed to the renderer's attribute animation. A zero
    /// duration applies everything at once and calls `on_complete`
    /// immediately. A new animation replaces the one in flight, starting from
    /// the current geometry.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::KindMismatch` for a patch of the other shape
    /// kind, or an error from the renderer.
    pub fn animate<R: Renderer<Id = Id>>(
        &mut self,
        renderer: &mut R,
        attrs: Attrs,
        duration: Duration,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> Result<()> {
        let target = attrs
            .geometry
            .map(|patch| self.resolve(&patch))
            .transpose()?;

        if duration.is_zero() {
            self.tween = None;
            if let Some(spec) = target {
                self.set_paths(renderer, spec)?;
            }
            for property in attrs.presentation {
                self.set_presentation(renderer, property)?;
            }
            if let Some(done) = on_complete {
                done();
            }
            return Ok(());
        }

        for property in attrs.presentation {
            if let Presentation::Fill(color) = property {
                self.fill = Some(color);
            }
            for face in &self.faces {
                let attribute = face_attribute(&*renderer, face, property);
                renderer.animate_attribute(face.id, attribute, duration)?;
            }
        }

        let to = target.filter(|spec| *spec != self.spec);
        tracing::debug!(?duration, geometry = to.is_some(), "starting shape animation");
        self.tween = Some(Tween {
            from: self.spec,
            to,
            duration,
            elapsed: Duration::ZERO,
            on_complete,
        });
        Ok(())
    }

    /// Advances the animation in flight by `dt`.
    ///
    /// Returns whether an animation is still running afterwards. When the
    /// animation reaches its end the target geometry is applied exactly and
    /// the completion callback runs.
    ///
    /// # Errors
    ///
    /// Returns an error from the renderer; the animation stays in flight.
    pub fn advance<R: Renderer<Id = Id>>(
        &mut self,
        renderer: &mut R,
        dt: Duration,
    ) -> Result<bool> {
        let Some(tween) = self.tween.as_mut() else {
            return Ok(false);
        };
        tween.elapsed = tween.elapsed.saturating_add(dt);
        let progress = (tween.elapsed.as_secs_f64() / tween.duration.as_secs_f64()).min(1.0);
        let (from, to) = (tween.from, tween.to);

        if let Some(to) = to {
            let spec = if progress >= 1.0 {
                to
            } else {
                from.lerp(&to, progress)
            };
            self.set_paths(renderer, spec)?;
        }

        if progress < 1.0 {
            return Ok(true);
        }
        tracing::debug!("shape animation finished");
        if let Some(done) = self.tween.take().and_then(|t| t.on_complete) {
            done();
        }
        Ok(false)
    }

    /// Drops the animation in flight without running its callback. The
    /// geometry stays where the last tick left it.
    pub fn stop(&mut self) {
        self.tween = None;
    }

    /// Destroys every face element, then the group.
    ///
    /// # Errors
    ///
    /// Returns the first error from the renderer; the remaining elements are
    /// still destroyed.
    pub fn destroy<R: Renderer<Id = Id>>(self, renderer: &mut R) -> Result<()> {
        let mut first_error = None;
        for id in self.faces.iter().map(|f| f.id).chain([self.group]) {
            if let Err(e) = renderer.destroy(id) {
                first_error.get_or_insert(e);
            }
        }
        tracing::debug!(kind = self.spec.kind(), "destroyed shape");
        first_error.map_or(Ok(()), Err)
    }

    fn resolve(&self, patch: &GeometryPatch) -> Result<ShapeSpec> {
        patch.apply(&self.spec).ok_or_else(|| {
            ShapeError::KindMismatch {
                patch: patch.kind(),
                shape: self.spec.kind(),
            }
            .into()
        })
    }
}

/// The attribute a presentation property becomes on one face.
fn face_attribute<R: Renderer>(
    renderer: &R,
    face: &SubFace<R::Id>,
    property: Presentation,
) -> Attribute {
    match property {
        Presentation::Fill(color) if face.shade != 0.0 => {
            Attribute::Fill(renderer.shade_color(color, face.shade))
        }
        other => other.into(),
    }
}

/// Runs the builder for `spec`; returns faces in table order and the group key.
fn build_faces<P: Projection + ?Sized>(
    projection: &P,
    spec: &ShapeSpec,
) -> (Vec<FaceResult>, f64) {
    match spec {
        ShapeSpec::Cuboid(s) => {
            let faces = CuboidPath::new(*s).execute(projection);
            // Negated so the group sorts behind its own faces.
            (vec![faces.front, faces.top, faces.side], -faces.group_z)
        }
        ShapeSpec::Wedge(s) => {
            let faces = WedgePath::new(*s).execute();
            (
                vec![faces.top, faces.out, faces.inn, faces.side1, faces.side2],
                faces.group_z,
            )
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CuboidPatch, WedgePatch};
    use crate::presentation::Scene;
    use crate::projection::Camera;
    use std::cell::Cell;
    use std::f64::consts::FRAC_PI_2;
    use std::rc::Rc;

    fn wedge_spec() -> WedgeSpec {
        WedgeSpec {
            x: 150.0,
            y: 150.0,
            r: 100.0,
            inner_r: 50.0,
            start: 0.0,
            end: FRAC_PI_2,
            depth: 20.0,
            alpha: 0.3,
            beta: 0.2,
        }
    }

    fn camera() -> Camera {
        Camera::new(15.0, 20.0, 300.0, 300.0).unwrap()
    }

    #[test]
    fn cuboid_creates_group_and_three_faces() {
        let mut scene = Scene::new();
        let shape = ShapeFactory::new(camera())
            .cuboid(&mut scene, CuboidSpec::new(10.0, 10.0, 0.0, 20.0, 20.0, 20.0))
            .unwrap();
        assert_eq!(shape.faces().len(), 3);
        assert_eq!(scene.len(), 4);
        let group = scene.element(shape.group()).unwrap();
        assert!(group.z_index <= 0.0);
        let front = scene.element(shape.face(FaceRole::Front).unwrap()).unwrap();
        assert_eq!(front.class, Some("facet3d-front"));
    }

    #[test]
    fn cuboid_fill_is_shaded_per_face() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera())
            .cuboid(&mut scene, CuboidSpec::new(10.0, 10.0, 0.0, 20.0, 20.0, 20.0))
            .unwrap();
        let base = Color::rgb(100, 100, 100);
        shape.set_fill(&mut scene, base).unwrap();
        let fill = |role| scene.element(shape.face(role).unwrap()).unwrap().fill;
        assert_eq!(fill(FaceRole::Front), Some(base));
        assert_eq!(fill(FaceRole::Top), Some(Color::rgb(125, 125, 125)));
        assert_eq!(fill(FaceRole::Side), Some(Color::rgb(75, 75, 75)));
        assert_eq!(shape.fill(), Some(base));
    }

    #[test]
    fn wedge_fill_darkens_walls() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera()).wedge(&mut scene, wedge_spec()).unwrap();
        let base = Color::rgb(100, 100, 100);
        shape
            .attr(&mut scene, Attrs::presentation(Presentation::Fill(base)))
            .unwrap();
        for (role, id) in shape.faces() {
            let expected = if role == FaceRole::Top {
                base
            } else {
                Color::rgb(75, 75, 75)
            };
            assert_eq!(scene.element(id).unwrap().fill, Some(expected));
        }
    }

    #[test]
    fn presentation_fans_out_to_every_face() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera()).wedge(&mut scene, wedge_spec()).unwrap();
        shape
            .attr(
                &mut scene,
                Attrs::presentation(Presentation::Opacity(0.4)).with(Presentation::TranslateX(7.0)),
            )
            .unwrap();
        shape.hide(&mut scene).unwrap();
        for (_, id) in shape.faces() {
            let e = scene.element(id).unwrap();
            assert!((e.opacity - 0.4).abs() < f64::EPSILON);
            assert!((e.translate_x - 7.0).abs() < f64::EPSILON);
            assert_eq!(e.visibility, Visibility::Hidden);
        }
        shape.show(&mut scene).unwrap();
        for (_, id) in shape.faces() {
            assert_eq!(scene.element(id).unwrap().visibility, Visibility::Visible);
        }
    }

    #[test]
    fn geometry_update_keeps_element_identity() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera()).wedge(&mut scene, wedge_spec()).unwrap();
        let before = shape.faces();
        let old_path = scene.element(before[0].1).unwrap().path.clone();
        let patch = WedgePatch {
            r: Some(120.0),
            ..WedgePatch::default()
        };
        shape.attr(&mut scene, Attrs::geometry(patch)).unwrap();
        assert_eq!(shape.faces(), before);
        assert_eq!(scene.len(), 6);
        assert_ne!(scene.element(before[0].1).unwrap().path, old_path);
    }

    #[test]
    fn patch_of_other_kind_is_rejected() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera()).wedge(&mut scene, wedge_spec()).unwrap();
        let err = shape.attr(&mut scene, Attrs::geometry(CuboidPatch::default()));
        assert!(err.is_err());
        assert_eq!(*shape.spec(), ShapeSpec::Wedge(wedge_spec()));
    }

    #[test]
    fn failed_write_keeps_new_spec_and_earlier_faces() {
        let mut scene = Scene::new();
        let spec = CuboidSpec::new(10.0, 10.0, 0.0, 20.0, 20.0, 20.0);
        let mut shape = ShapeFactory::new(camera()).cuboid(&mut scene, spec).unwrap();
        // Drop the last face behind the handle's back so the write loop fails on it.
        scene.destroy(shape.face(FaceRole::Side).unwrap()).unwrap();

        let target_box = CuboidSpec { width: 40.0, ..spec };
        let target = ShapeSpec::Cuboid(target_box);
        assert!(shape.set_paths(&mut scene, target).is_err());
        assert_eq!(*shape.spec(), target);

        let expected = CuboidPath::new(target_box).execute(&camera());
        let front = scene.element(shape.face(FaceRole::Front).unwrap()).unwrap();
        assert_eq!(front.path, expected.front.path);
    }

    #[test]
    fn geometry_animation_recomputes_each_tick() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera()).wedge(&mut scene, wedge_spec()).unwrap();
        let done = Rc::new(Cell::new(0));
        let flag = Rc::clone(&done);
        let patch = WedgePatch {
            end: Some(3.0),
            ..WedgePatch::default()
        };
        shape
            .animate(
                &mut scene,
                Attrs::geometry(patch),
                Duration::from_millis(100),
                Some(Box::new(move || flag.set(flag.get() + 1))),
            )
            .unwrap();
        assert!(shape.is_animating());

        assert!(shape.advance(&mut scene, Duration::from_millis(50)).unwrap());
        let ShapeSpec::Wedge(mid) = *shape.spec() else {
            panic!("expected a wedge");
        };
        let expected = FRAC_PI_2 + (3.0 - FRAC_PI_2) * 0.5;
        assert!((mid.end - expected).abs() < 1e-9);
        assert_eq!(done.get(), 0);

        assert!(!shape.advance(&mut scene, Duration::from_millis(80)).unwrap());
        let ShapeSpec::Wedge(last) = *shape.spec() else {
            panic!("expected a wedge");
        };
        assert!((last.end - 3.0).abs() < f64::EPSILON);
        assert_eq!(done.get(), 1);
        assert!(!shape.is_animating());
        assert!(!shape.advance(&mut scene, Duration::from_millis(10)).unwrap());
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn zero_duration_applies_immediately() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera())
            .cuboid(&mut scene, CuboidSpec::new(10.0, 10.0, 0.0, 20.0, 20.0, 20.0))
            .unwrap();
        let done = Rc::new(Cell::new(false));
        let flag = Rc::clone(&done);
        let patch = CuboidPatch {
            width: Some(40.0),
            ..CuboidPatch::default()
        };
        shape
            .animate(
                &mut scene,
                Attrs::geometry(patch),
                Duration::ZERO,
                Some(Box::new(move || flag.set(true))),
            )
            .unwrap();
        assert!(done.get());
        assert!(!shape.is_animating());
        let ShapeSpec::Cuboid(spec) = *shape.spec() else {
            panic!("expected a cuboid");
        };
        assert!((spec.width - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn presentation_only_animation_completes_after_duration() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera()).wedge(&mut scene, wedge_spec()).unwrap();
        let done = Rc::new(Cell::new(false));
        let flag = Rc::clone(&done);
        shape
            .animate(
                &mut scene,
                Attrs::presentation(Presentation::Opacity(0.2)),
                Duration::from_millis(40),
                Some(Box::new(move || flag.set(true))),
            )
            .unwrap();
        let top = shape.face(FaceRole::Top).unwrap();
        assert!((scene.element(top).unwrap().opacity - 0.2).abs() < f64::EPSILON);
        assert!(!done.get());
        shape.advance(&mut scene, Duration::from_millis(40)).unwrap();
        assert!(done.get());
        assert_eq!(*shape.spec(), ShapeSpec::Wedge(wedge_spec()));
    }

    #[test]
    fn stop_drops_callback() {
        let mut scene = Scene::new();
        let mut shape = ShapeFactory::new(camera()).wedge(&mut scene, wedge_spec()).unwrap();
        let done = Rc::new(Cell::new(false));
        let flag = Rc::clone(&done);
        let patch = WedgePatch {
            r: Some(10.0),
            ..WedgePatch::default()
        };
        shape
            .animate(
                &mut scene,
                Attrs::geometry(patch),
                Duration::from_secs(1),
                Some(Box::new(move || flag.set(true))),
            )
            .unwrap();
        shape.advance(&mut scene, Duration::from_millis(250)).unwrap();
        shape.stop();
        assert!(!shape.advance(&mut scene, Duration::from_secs(5)).unwrap());
        assert!(!done.get());
        let ShapeSpec::Wedge(spec) = *shape.spec() else {
            panic!("expected a wedge");
        };
        assert!((spec.r - 77.5).abs() < 1e-9);
    }

    #[test]
    fn destroy_removes_every_element() {
        let mut scene = Scene::new();
        let factory = ShapeFactory::new(camera());
        let keep = factory.wedge(&mut scene, wedge_spec()).unwrap();
        let shape = factory
            .cuboid(&mut scene, CuboidSpec::new(10.0, 10.0, 0.0, 20.0, 20.0, 20.0))
            .unwrap();
        assert_eq!(scene.len(), 10);
        shape.destroy(&mut scene).unwrap();
        assert_eq!(scene.len(), 6);
        assert!(scene.element(keep.group()).is_some());
    }
}
