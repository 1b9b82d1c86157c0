//! Primitive mesh library abstraction
//!
//! Scene objects reference meshes only by shape kind. Vertex-buffer
//! construction and the draw call itself belong to the backend; the engine
//! relies on `load` being idempotent-to-call-once per shape and `draw` being
//! stateless apart from the uniform and texture state set beforehand.

/// The primitive shapes a scene object can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Flat ground/backdrop plane
    Plane,
    /// UV sphere
    Sphere,
    /// Axis-aligned unit box
    Box,
    /// Full torus
    Torus,
    /// Cylinder with differing top and bottom radii
    TaperedCylinder,
    /// Half torus (open ring, used for handles)
    HalfTorus,
}

/// Mesh loading and drawing contract implemented by mesh backends
pub trait MeshLibrary {
    /// Load one shape's geometry into GPU-resident buffers
    ///
    /// Each distinct shape needs loading exactly once no matter how many
    /// times it is drawn.
    fn load(&mut self, shape: ShapeKind);

    /// Draw one instance of a shape using the current uniform state
    fn draw(&mut self, shape: ShapeKind);
}
