//! Still-life scene demo
//!
//! Builds the still-life scene description, prepares it against headless
//! backend doubles, renders one frame, and reports what was drawn. Set
//! `RUST_LOG=trace` to see every uniform write and draw call.

mod backend;
mod scene;

use scene_engine::foundation::logging;
use scene_engine::prelude::*;

use backend::{HeadlessDevice, HeadlessMeshes, HeadlessShader};

fn run() -> Result<(), SceneError> {
    let mut device = HeadlessDevice::default();
    let mut shader = HeadlessShader;
    let mut meshes = HeadlessMeshes::default();

    let mut manager = SceneManager::new(scene::still_life());
    log::info!(
        "Preparing still-life scene with {} object(s)",
        manager.scene().objects.len()
    );
    manager.prepare_scene(&mut device, &mut shader, &mut meshes)?;
    log::info!(
        "Prepared {} texture(s) across units 0..{}, {} mesh shape(s) loaded",
        manager.texture_registry().len(),
        manager.texture_registry().len(),
        meshes.loaded().len()
    );

    manager.render_scene(&mut shader, &mut meshes);
    log::info!("Rendered one frame: {} draw call(s)", meshes.draw_count());

    manager.teardown(&mut device);
    log::info!("Teardown complete, {} live texture(s)", device.live_textures());
    Ok(())
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        log::error!("Scene preparation failed: {err}");
        std::process::exit(1);
    }
}
