use thiserror::Error;

/// Top-level error type for the facet3d engine.
#[derive(Debug, Error)]
pub enum Facet3dError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors raised while configuring a camera.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera parameter {parameter} = {value} must be {requirement}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

/// Errors related to colour parsing.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour: {0}")]
    InvalidHex(String),
}

/// Errors reported by a host renderer.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("element not found: {0}")]
    ElementNotFound(String),
}

/// Errors related to shape handles.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("{patch} geometry cannot be applied to a {shape} shape")]
    KindMismatch {
        patch: &'static str,
        shape: &'static str,
    },
}

/// Convenience type alias for results using [`Facet3dError`].
pub type Result<T> = std::result::Result<T, Facet3dError>;
