//! Scene preparation and per-frame rendering
//!
//! `SceneManager` owns the texture registry, material registry and lighting
//! rig for the lifetime of the scene, and drives the two phases of the
//! pipeline: one-time preparation (register resources, configure lights,
//! load meshes) and per-frame rendering (fixed uniform-setter sequence per
//! object, then draw).
//!
//! Shader uniform state and texture-unit bindings are process-wide mutable
//! state on the graphics side. Correctness depends on the setter sequence
//! running immediately before each draw, which is why every binder method
//! takes the shader explicitly: the ordering dependency is visible in the
//! signatures.

use crate::foundation::math::{Vec2, Vec4};
use crate::render::{
    compose_model_matrix, submit_model_matrix, uniform, GraphicsDevice, LightingRig,
    MaterialRegistry, MeshLibrary, ShaderProgram, TextureError, TextureRegistry, TransformParams,
};
use crate::scene::object::{SceneDescription, Surface};
use crate::scene::SceneError;

/// Owns scene resources and renders the configured object list
pub struct SceneManager {
    scene: SceneDescription,
    textures: TextureRegistry,
    materials: MaterialRegistry,
    lighting: LightingRig,
}

impl SceneManager {
    /// Create a manager for the given scene content
    pub fn new(scene: SceneDescription) -> Self {
        Self {
            scene,
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
            lighting: LightingRig::new(),
        }
    }

    /// One-time scene preparation
    ///
    /// Registers material presets, configures and applies the lighting rig,
    /// loads and registers the scene textures, binds all texture units, and
    /// loads each distinct mesh shape exactly once.
    ///
    /// Texture preparation is best-effort: a file that fails to decode or has
    /// an unsupported channel count is logged and skipped, and preparation
    /// continues with that slot unfilled. Capacity and duplicate-tag
    /// violations are caller errors and abort preparation.
    pub fn prepare_scene(
        &mut self,
        device: &mut dyn GraphicsDevice,
        shader: &mut dyn ShaderProgram,
        meshes: &mut dyn MeshLibrary,
    ) -> Result<(), SceneError> {
        for material in &self.scene.materials {
            self.materials.register(material.clone());
        }

        for light in &self.scene.lights {
            self.lighting.push(light.clone());
        }
        self.lighting.apply(shader);

        for source in &self.scene.textures {
            match self.textures.register(device, &source.path, &source.tag) {
                Ok(()) => {}
                Err(err @ (TextureError::Load(_) | TextureError::UnsupportedChannels { .. })) => {
                    log::warn!("Skipping texture {:?}: {err}", source.tag);
                }
                Err(err) => return Err(err.into()),
            }
        }
        self.textures.bind_all(device);

        for shape in self.scene.distinct_shapes() {
            meshes.load(shape);
        }

        log::info!(
            "Scene prepared: {} material(s), {} light(s), {} texture(s), {} object(s)",
            self.materials.len(),
            self.lighting.len(),
            self.textures.len(),
            self.scene.objects.len()
        );
        Ok(())
    }

    /// Render one frame
    ///
    /// For each object in list order: compose and submit the transform, set
    /// the UV scale, bind the surface (texture tag or flat color), bind the
    /// material tag when present, and draw the mesh. Draw order equals list
    /// order on every frame.
    pub fn render_scene(&self, shader: &mut dyn ShaderProgram, meshes: &mut dyn MeshLibrary) {
        for object in &self.scene.objects {
            self.set_transformations(shader, &object.transform);
            self.set_texture_uv_scale(shader, object.uv_scale.0, object.uv_scale.1);
            match &object.surface {
                Surface::Textured { tag } => self.set_shader_texture(shader, tag),
                Surface::Flat { color } => {
                    self.set_shader_color(shader, color[0], color[1], color[2], color[3]);
                }
            }
            if let Some(tag) = &object.material_tag {
                self.set_shader_material(shader, tag);
            }
            meshes.draw(object.shape);
            log::trace!("Drew {:?} ({:?})", object.name, object.shape);
        }
    }

    /// Release all texture resources and clear the material registry
    pub fn teardown(&mut self, device: &mut dyn GraphicsDevice) {
        self.textures.release_all(device);
        self.materials.clear();
    }

    /// Compose a model matrix from `params` and submit it to the shader
    pub fn set_transformations(&self, shader: &mut dyn ShaderProgram, params: &TransformParams) {
        let matrix = compose_model_matrix(params);
        submit_model_matrix(shader, &matrix);
    }

    /// Disable texturing and submit a solid RGBA color for the next draw
    ///
    /// Mutually exclusive with [`set_shader_texture`](Self::set_shader_texture)
    /// for a given draw.
    pub fn set_shader_color(&self, shader: &mut dyn ShaderProgram, r: f32, g: f32, b: f32, a: f32) {
        shader.set_bool(uniform::USE_TEXTURE, false);
        shader.set_vec4(uniform::OBJECT_COLOR, Vec4::new(r, g, b, a));
    }

    /// Enable texturing and submit the sampler unit resolved from `tag`
    ///
    /// An unresolved tag submits the `-1` sentinel (undefined sampling, a
    /// caller error) and is reported with a warning.
    pub fn set_shader_texture(&self, shader: &mut dyn ShaderProgram, tag: &str) {
        shader.set_bool(uniform::USE_TEXTURE, true);
        let unit = match self.textures.find_unit(tag) {
            Some(unit) => unit as i32,
            None => {
                log::warn!("Texture tag {:?} is not registered; submitting sentinel unit", tag);
                -1
            }
        };
        shader.set_sampler(uniform::OBJECT_TEXTURE, unit);
    }

    /// Submit the texture coordinate multiplier for the next draw
    pub fn set_texture_uv_scale(&self, shader: &mut dyn ShaderProgram, u: f32, v: f32) {
        shader.set_vec2(uniform::UV_SCALE, Vec2::new(u, v));
    }

    /// Resolve `tag` in the material registry and submit its uniform fields
    ///
    /// No-op while no materials are registered. An unresolved tag submits
    /// nothing (previous material state stays active) and is reported with a
    /// warning.
    pub fn set_shader_material(&self, shader: &mut dyn ShaderProgram, tag: &str) {
        if self.materials.is_empty() {
            return;
        }
        match self.materials.find(tag) {
            Some(material) => material.submit_uniforms(shader),
            None => {
                log::warn!("Material tag {:?} is not registered; keeping previous material", tag);
            }
        }
    }

    /// The texture registry owned by this scene
    pub fn texture_registry(&self) -> &TextureRegistry {
        &self.textures
    }

    /// The material registry owned by this scene
    pub fn material_registry(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// The lighting rig owned by this scene
    pub fn lighting(&self) -> &LightingRig {
        &self.lighting
    }

    /// The scene content this manager renders
    pub fn scene(&self) -> &SceneDescription {
        &self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::foundation::math::{Mat4, Vec3};
    use crate::render::{Material, ShapeKind, TextureHandle, TextureParams};
    use crate::scene::object::SceneObject;

    #[derive(Default)]
    struct RecordingShader {
        events: Vec<String>,
    }

    impl RecordingShader {
        fn record(&mut self, kind: &str, name: &str) {
            self.events.push(format!("{kind} {name}"));
        }
    }

    impl ShaderProgram for RecordingShader {
        fn set_mat4(&mut self, name: &str, _value: &Mat4) {
            self.record("mat4", name);
        }
        fn set_vec4(&mut self, name: &str, _value: Vec4) {
            self.record("vec4", name);
        }
        fn set_vec3(&mut self, name: &str, _value: Vec3) {
            self.record("vec3", name);
        }
        fn set_vec2(&mut self, name: &str, _value: Vec2) {
            self.record("vec2", name);
        }
        fn set_float(&mut self, name: &str, _value: f32) {
            self.record("float", name);
        }
        fn set_int(&mut self, name: &str, _value: i32) {
            self.record("int", name);
        }
        fn set_bool(&mut self, name: &str, value: bool) {
            self.events.push(format!("bool {name}={value}"));
        }
        fn set_sampler(&mut self, name: &str, unit: i32) {
            self.events.push(format!("sampler {name}={unit}"));
        }
    }

    #[derive(Default)]
    struct NullDevice {
        next_handle: u64,
    }

    impl GraphicsDevice for NullDevice {
        fn create_texture_2d(
            &mut self,
            _image: &ImageData,
            _params: &TextureParams,
        ) -> TextureHandle {
            self.next_handle += 1;
            TextureHandle(self.next_handle)
        }
        fn bind_texture_unit(&mut self, _unit: u32, _handle: TextureHandle) {}
        fn delete_texture(&mut self, _handle: TextureHandle) {}
    }

    #[derive(Default)]
    struct RecordingMeshes {
        loads: Vec<ShapeKind>,
        draws: Vec<ShapeKind>,
    }

    impl MeshLibrary for RecordingMeshes {
        fn load(&mut self, shape: ShapeKind) {
            self.loads.push(shape);
        }
        fn draw(&mut self, shape: ShapeKind) {
            self.draws.push(shape);
        }
    }

    #[test]
    fn test_shader_color_disables_texturing() {
        let manager = SceneManager::new(SceneDescription::new());
        let mut shader = RecordingShader::default();

        manager.set_shader_color(&mut shader, 1.0, 0.5, 0.0, 1.0);

        assert_eq!(
            shader.events,
            vec!["bool bUseTexture=false", "vec4 objectColor"]
        );
    }

    #[test]
    fn test_unresolved_texture_submits_sentinel() {
        let manager = SceneManager::new(SceneDescription::new());
        let mut shader = RecordingShader::default();

        manager.set_shader_texture(&mut shader, "ghost");

        assert_eq!(
            shader.events,
            vec!["bool bUseTexture=true", "sampler objectTexture=-1"]
        );
    }

    #[test]
    fn test_material_binding_is_noop_on_empty_registry() {
        let manager = SceneManager::new(SceneDescription::new());
        let mut shader = RecordingShader::default();

        manager.set_shader_material(&mut shader, "silver");

        assert!(shader.events.is_empty());
    }

    #[test]
    fn test_unresolved_material_submits_nothing() {
        let scene = SceneDescription::new().with_material(Material::new("silver"));
        let mut manager = SceneManager::new(scene);
        let mut device = NullDevice::default();
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();
        manager
            .prepare_scene(&mut device, &mut shader, &mut meshes)
            .unwrap();

        shader.events.clear();
        manager.set_shader_material(&mut shader, "nonexistent");
        assert!(shader.events.is_empty());

        manager.set_shader_material(&mut shader, "silver");
        assert_eq!(shader.events.len(), 5);
    }

    #[test]
    fn test_prepare_continues_past_missing_textures() {
        let scene = SceneDescription::new()
            .with_texture("missing/one.jpg", "one")
            .with_texture("missing/two.png", "two")
            .with_object(SceneObject::new("floor", ShapeKind::Plane));
        let mut manager = SceneManager::new(scene);
        let mut device = NullDevice::default();
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();

        manager
            .prepare_scene(&mut device, &mut shader, &mut meshes)
            .expect("missing files are skipped, not fatal");

        assert!(manager.texture_registry().is_empty());
        assert_eq!(meshes.loads, vec![ShapeKind::Plane]);
    }

    #[test]
    fn test_prepare_loads_each_distinct_shape_once() {
        let scene = SceneDescription::new()
            .with_object(SceneObject::new("a", ShapeKind::Sphere))
            .with_object(SceneObject::new("b", ShapeKind::Box))
            .with_object(SceneObject::new("c", ShapeKind::Sphere));
        let mut manager = SceneManager::new(scene);
        let mut device = NullDevice::default();
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();

        manager
            .prepare_scene(&mut device, &mut shader, &mut meshes)
            .unwrap();

        assert_eq!(meshes.loads, vec![ShapeKind::Sphere, ShapeKind::Box]);
    }

    #[test]
    fn test_render_draws_in_list_order() {
        let scene = SceneDescription::new()
            .with_object(SceneObject::new("floor", ShapeKind::Plane))
            .with_object(SceneObject::new("ball", ShapeKind::Sphere).with_color(0.2, 0.2, 0.9, 1.0))
            .with_object(SceneObject::new("crate", ShapeKind::Box));
        let manager = SceneManager::new(scene);
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();

        manager.render_scene(&mut shader, &mut meshes);

        assert_eq!(
            meshes.draws,
            vec![ShapeKind::Plane, ShapeKind::Sphere, ShapeKind::Box]
        );
    }

    #[test]
    fn test_render_sets_transform_before_surface_uniforms() {
        let scene = SceneDescription::new()
            .with_object(SceneObject::new("ball", ShapeKind::Sphere).with_texture("ghost"));
        let manager = SceneManager::new(scene);
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();

        manager.render_scene(&mut shader, &mut meshes);

        assert_eq!(
            shader.events,
            vec![
                "mat4 model",
                "vec2 UVscale",
                "bool bUseTexture=true",
                "sampler objectTexture=-1",
            ]
        );
    }

    #[test]
    fn test_teardown_clears_materials() {
        let scene = SceneDescription::new().with_material(Material::new("silver"));
        let mut manager = SceneManager::new(scene);
        let mut device = NullDevice::default();
        let mut shader = RecordingShader::default();
        let mut meshes = RecordingMeshes::default();
        manager
            .prepare_scene(&mut device, &mut shader, &mut meshes)
            .unwrap();
        assert_eq!(manager.material_registry().len(), 1);

        manager.teardown(&mut device);

        assert!(manager.material_registry().is_empty());
        assert!(manager.texture_registry().is_empty());
    }
}
