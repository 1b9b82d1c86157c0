//! Headless backend doubles for running the scene without a window
//!
//! Each implementation logs the calls it receives instead of touching a
//! graphics API, so the full prepare/render pipeline can run anywhere and
//! its output can be inspected from the log.

use scene_engine::assets::ImageData;
use scene_engine::prelude::*;
use scene_engine::render::TextureParams;

/// Device double that allocates sequential handles and logs every call
#[derive(Default)]
pub struct HeadlessDevice {
    next_handle: u64,
    live_textures: usize,
}

impl HeadlessDevice {
    /// Number of textures created and not yet deleted
    pub fn live_textures(&self) -> usize {
        self.live_textures
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_texture_2d(&mut self, image: &ImageData, params: &TextureParams) -> TextureHandle {
        self.next_handle += 1;
        self.live_textures += 1;
        log::debug!(
            "create_texture_2d {}x{} ({} channel(s), mipmaps={}) -> handle {}",
            image.width,
            image.height,
            image.channels,
            params.generate_mipmaps,
            self.next_handle
        );
        TextureHandle(self.next_handle)
    }

    fn bind_texture_unit(&mut self, unit: u32, handle: TextureHandle) {
        log::debug!("bind_texture_unit {unit} <- handle {}", handle.0);
    }

    fn delete_texture(&mut self, handle: TextureHandle) {
        self.live_textures = self.live_textures.saturating_sub(1);
        log::debug!("delete_texture handle {}", handle.0);
    }
}

/// Shader double that logs every uniform write
#[derive(Default)]
pub struct HeadlessShader;

impl ShaderProgram for HeadlessShader {
    fn set_mat4(&mut self, name: &str, _value: &Mat4) {
        log::trace!("uniform mat4 {name}");
    }
    fn set_vec4(&mut self, name: &str, value: Vec4) {
        log::trace!("uniform vec4 {name} = {value:?}");
    }
    fn set_vec3(&mut self, name: &str, value: Vec3) {
        log::trace!("uniform vec3 {name} = {value:?}");
    }
    fn set_vec2(&mut self, name: &str, value: Vec2) {
        log::trace!("uniform vec2 {name} = {value:?}");
    }
    fn set_float(&mut self, name: &str, value: f32) {
        log::trace!("uniform float {name} = {value}");
    }
    fn set_int(&mut self, name: &str, value: i32) {
        log::trace!("uniform int {name} = {value}");
    }
    fn set_bool(&mut self, name: &str, value: bool) {
        log::trace!("uniform bool {name} = {value}");
    }
    fn set_sampler(&mut self, name: &str, unit: i32) {
        log::trace!("uniform sampler {name} = unit {unit}");
    }
}

/// Mesh library double that counts loads and draws
#[derive(Default)]
pub struct HeadlessMeshes {
    loaded: Vec<ShapeKind>,
    draw_count: usize,
}

impl HeadlessMeshes {
    /// Shapes loaded during preparation, in load order
    pub fn loaded(&self) -> &[ShapeKind] {
        &self.loaded
    }

    /// Total number of draw calls issued
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}

impl MeshLibrary for HeadlessMeshes {
    fn load(&mut self, shape: ShapeKind) {
        log::debug!("load mesh {shape:?}");
        self.loaded.push(shape);
    }

    fn draw(&mut self, shape: ShapeKind) {
        log::trace!("draw mesh {shape:?}");
        self.draw_count += 1;
    }
}
