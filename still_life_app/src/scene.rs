//! Still-life scene content
//!
//! A fruit bowl arrangement on a wooden chest: a textured backdrop, a
//! three-part vase, a chest with two metal straps, a melon, and eight
//! flattened spheres forming leaf clusters. All values are literal scene
//! data; the engine draws whatever this module describes.

use scene_engine::prelude::*;

/// Leaf clusters share one footprint and differ only in lean and placement
fn leaf(name: &str, scale: (f32, f32, f32), z_lean_deg: f32, position: (f32, f32, f32)) -> SceneObject {
    SceneObject::new(name, ShapeKind::Sphere)
        .with_scale(scale.0, scale.1, scale.2)
        .with_rotation_deg(0.0, 0.0, z_lean_deg)
        .with_position(position.0, position.1, position.2)
        .with_texture("leaf")
        .with_material("turqoise")
}

/// Build the complete still-life scene description
pub fn still_life() -> SceneDescription {
    SceneDescription::new()
        .with_material(
            Material::new("silver")
                .with_ambient(Vec3::new(0.09225, 0.09225, 0.09225), 0.1)
                .with_diffuse(Vec3::new(0.40754, 0.40754, 0.40754))
                .with_specular(Vec3::new(0.408_273, 0.408_273, 0.408_273))
                .with_shininess(1.0),
        )
        .with_material(
            Material::new("metal")
                .with_ambient(Vec3::new(0.2, 0.2, 0.2), 0.3)
                .with_diffuse(Vec3::new(0.2, 0.2, 0.2))
                .with_specular(Vec3::new(0.5, 0.5, 0.5))
                .with_shininess(22.0),
        )
        .with_material(
            Material::new("blackmetal")
                .with_ambient(Vec3::new(0.02, 0.02, 0.02), 0.01)
                .with_diffuse(Vec3::new(0.01, 0.01, 0.01))
                .with_specular(Vec3::new(0.01, 0.01, 0.01))
                .with_shininess(0.01),
        )
        .with_material(
            Material::new("bluewood")
                .with_ambient(Vec3::new(0.01, 0.01, 0.01), 0.1)
                .with_diffuse(Vec3::new(0.1, 0.1, 0.2))
                .with_specular(Vec3::new(0.1, 0.1, 0.3))
                .with_shininess(0.1),
        )
        .with_material(
            Material::new("cheese")
                .with_ambient(Vec3::new(0.01, 0.01, 0.01), 0.1)
                .with_diffuse(Vec3::new(0.6, 0.6, 0.6))
                .with_specular(Vec3::new(0.1, 0.1, 0.1))
                .with_shininess(0.3),
        )
        .with_material(
            Material::new("turqoise")
                .with_ambient(Vec3::new(0.1, 0.18725, 0.1745), 0.2)
                .with_diffuse(Vec3::new(0.396, 0.74151, 0.69102))
                .with_specular(Vec3::new(0.297_254, 0.30829, 0.306_678))
                .with_shininess(0.1),
        )
        // Main overhead white light
        .with_light(
            PointLight::at(Vec3::new(0.0, 100.0, 0.0))
                .with_ambient(Vec3::new(0.2, 0.2, 0.2))
                .with_diffuse(Vec3::new(1.0, 1.0, 1.0))
                .with_specular(Vec3::new(0.8, 0.8, 0.8))
                .with_focal_strength(25.0)
                .with_specular_intensity(0.9),
        )
        // Soft blue foreground light for specular highlights on the vase handle
        .with_light(
            PointLight::at(Vec3::new(-2.0, 0.0, 10.0))
                .with_ambient(Vec3::new(0.01, 0.01, 0.1))
                .with_diffuse(Vec3::new(0.5, 0.5, 1.0))
                .with_specular(Vec3::new(0.05, 0.05, 1.0))
                .with_focal_strength(1.5)
                .with_specular_intensity(0.9),
        )
        .with_texture("textures/BackgroundTile.jpg", "background")
        .with_texture("textures/PotGold.jpg", "pot")
        .with_texture("textures/gold-seamless-texture.jpg", "gold")
        .with_texture("textures/BlueRusticWood2.png", "rustic")
        .with_texture("textures/melon.bmp", "melon")
        .with_texture("textures/leaf.bmp", "leaf")
        .with_texture("textures/knife_handle.jpg", "knife")
        .with_object(
            SceneObject::new("backdrop", ShapeKind::Plane)
                .with_scale(50.0, 1.0, 50.0)
                .with_rotation_deg(90.0, 0.0, 0.0)
                .with_position(0.0, 0.0, -10.0)
                .with_texture("background")
                .with_material("turqoise"),
        )
        .with_object(
            SceneObject::new("vase base", ShapeKind::Torus)
                .with_scale(2.5, 2.5, 10.0)
                .with_rotation_deg(90.0, 0.0, 0.0)
                .with_position(4.0, 3.0, 0.0)
                .with_uv_scale(2.5, 2.5)
                .with_texture("pot")
                .with_material("silver"),
        )
        .with_object(
            SceneObject::new("vase neck", ShapeKind::TaperedCylinder)
                .with_scale(2.5, 1.5, 2.5)
                .with_position(4.0, 5.0, 0.0)
                .with_uv_scale(2.5, 0.5)
                .with_texture("pot")
                .with_material("silver"),
        )
        .with_object(
            SceneObject::new("vase handle", ShapeKind::HalfTorus)
                .with_scale(2.8, 3.5, 0.5)
                .with_rotation_deg(130.0, 35.0, 40.0)
                .with_position(3.8, 5.3, 0.5)
                .with_uv_scale(2.5, 0.5)
                .with_texture("gold")
                .with_material("metal"),
        )
        .with_object(
            SceneObject::new("chest", ShapeKind::Box)
                .with_scale(24.0, 12.0, 8.0)
                .with_position(0.0, -5.0, 0.0)
                .with_texture("rustic")
                .with_material("bluewood"),
        )
        .with_object(
            SceneObject::new("chest strap left", ShapeKind::Box)
                .with_scale(0.8, 11.8, 0.5)
                .with_position(-6.0, -5.0, 4.0)
                .with_texture("knife")
                .with_material("blackmetal"),
        )
        .with_object(
            SceneObject::new("chest strap right", ShapeKind::Box)
                .with_scale(0.8, 11.8, 0.5)
                .with_position(6.0, -5.0, 4.0)
                .with_texture("knife")
                .with_material("blackmetal"),
        )
        .with_object(
            SceneObject::new("melon", ShapeKind::Sphere)
                .with_scale(3.5, 2.5, 2.5)
                .with_rotation_deg(-70.0, 0.0, -40.0)
                .with_position(-3.0, 3.5, -2.0)
                .with_texture("melon")
                .with_material("cheese"),
        )
        .with_object(leaf("leaf 1", (1.3, 0.8, 0.01), 0.0, (-7.5, 2.0, 0.7)))
        .with_object(leaf("leaf 2", (1.0, 0.6, 0.01), -5.0, (-5.0, 2.0, 0.7)))
        .with_object(leaf("leaf 3", (1.0, 0.6, 0.01), 75.0, (-6.1, 3.0, 0.7)))
        .with_object(leaf("leaf 4", (1.0, 0.6, 0.01), -25.0, (-0.5, 1.7, 2.0)))
        .with_object(leaf("leaf 5", (1.0, 0.6, 0.01), 75.0, (1.0, 1.7, 2.0)))
        .with_object(leaf("leaf 6", (1.0, 0.6, 0.01), 25.0, (5.3, 5.7, 2.3)))
        .with_object(leaf("leaf 7", (1.0, 0.6, 0.01), -75.0, (6.3, 1.7, 2.6)))
        .with_object(leaf("leaf 8", (1.0, 0.6, 0.01), 55.0, (7.8, 1.7, 2.5)))
}
