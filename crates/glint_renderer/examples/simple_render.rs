//! Simple ray tracer example.
//!
//! Renders a seeded random scene with every shading mode and saves each as PNG.

use glint_core::{random_scene, RandomSceneParams};
use glint_renderer::{render, save_png, Light, RenderConfig, ShaderConfig, ShadingMode, Vec3};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let params = RandomSceneParams {
        count: 10,
        ..Default::default()
    };
    let scene = random_scene(&params, 2020).expect("Failed to generate scene");
    let light = Light::new(Vec3::new(-500.0, -400.0, 100.0));
    println!("Created {} spheres", scene.len());

    for mode in [
        ShadingMode::Flat,
        ShadingMode::RecursiveSimple,
        ShadingMode::RecursiveMedium,
        ShadingMode::DistanceAttenuated,
    ] {
        let config = RenderConfig::default().with_shader(ShaderConfig::default().with_mode(mode));

        let start = std::time::Instant::now();
        let image = render(&scene, light, &config).expect("Render failed");
        println!("{:?} rendered in {:?}", mode, start.elapsed());

        let filename = format!("output_{:?}.png", mode).to_lowercase();
        save_png(&image, &filename).expect("Failed to save image");
        println!("Saved to {}", filename);
    }
}
