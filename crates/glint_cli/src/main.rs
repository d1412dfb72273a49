//! glint: render a sphere scene to a PNG.
//!
//! The scene comes from a JSON file, a seeded random generator, or the
//! built-in reference scene. Flags override settings stored in the file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_core::{
    load_scene, random_scene, FanNormalization, HitRule, Light, RandomSceneParams, RenderConfig,
    Scene, SceneDescription, ShadingMode, SphereDescription,
};
use glint_math::{to_rgb8, Vec3};
use glint_renderer::{render, save_png};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Flat,
    RecursiveSimple,
    RecursiveMedium,
    DistanceAttenuated,
}

impl From<ModeArg> for ShadingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Flat => ShadingMode::Flat,
            ModeArg::RecursiveSimple => ShadingMode::RecursiveSimple,
            ModeArg::RecursiveMedium => ShadingMode::RecursiveMedium,
            ModeArg::DistanceAttenuated => ShadingMode::DistanceAttenuated,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HitRuleArg {
    FirstInList,
    Nearest,
}

impl From<HitRuleArg> for HitRule {
    fn from(rule: HitRuleArg) -> Self {
        match rule {
            HitRuleArg::FirstInList => HitRule::FirstInList,
            HitRuleArg::Nearest => HitRule::Nearest,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FanArg {
    HalfWidth,
    SampleCount,
}

impl From<FanArg> for FanNormalization {
    fn from(normalization: FanArg) -> Self {
        match normalization {
            FanArg::HalfWidth => FanNormalization::HalfWidth,
            FanArg::SampleCount => FanNormalization::SampleCount,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(version)]
#[command(about = "Recursive sphere ray tracer")]
#[command(long_about = "
glint casts rays from a pinhole camera through a scene of spheres and writes
the shaded image as a PNG.

Example usage:
  glint --output reference.png
  glint --scene scenes/glass.json --mode recursive-medium --bounces 3
  glint --random 12 --seed 7 --fan 2 --fan-normalization sample-count
")]
struct Cli {
    /// Image width [default: 640]
    #[arg(long)]
    width: Option<u32>,

    /// Image height [default: 480]
    #[arg(long)]
    height: Option<u32>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// JSON scene description
    #[arg(short, long, conflicts_with = "random")]
    scene: Option<PathBuf>,

    /// Generate a random scene with this many spheres
    #[arg(long, value_name = "COUNT")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Smallest sphere radius for --random [default: 20]
    #[arg(long, requires = "random")]
    radius_min: Option<f32>,

    /// Largest sphere radius for --random [default: 100]
    #[arg(long, requires = "random")]
    radius_max: Option<f32>,

    /// Half-extent of the --random placement box [default: 300 200 150]
    #[arg(long, requires = "random", num_args = 3, value_names = ["X", "Y", "Z"])]
    jitter: Option<Vec<f32>>,

    /// Override the light position
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    light: Option<Vec<f32>>,

    /// Shading mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Bounce limit for the recursive modes
    #[arg(long)]
    bounces: Option<u32>,

    /// Ray fan half-width (2n + 1 rays per pixel)
    #[arg(long)]
    fan: Option<u32>,

    /// How a ray fan is averaged
    #[arg(long, value_enum)]
    fan_normalization: Option<FanArg>,

    /// Which sphere a ray hits
    #[arg(long, value_enum)]
    hit_rule: Option<HitRuleArg>,

    /// Pinhole focal length in pixels
    #[arg(long)]
    focal: Option<f32>,

    /// Let spheres cast shadows onto themselves (`--self-shadowing false` to disable)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    self_shadowing: Option<bool>,

    /// Color surfaces by their normals (`--debug-normals false` to disable)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    debug_normals: Option<bool>,

    /// Write the rendered scene description to this JSON file
    #[arg(long, value_name = "PATH")]
    save_scene: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

impl Cli {
    /// Apply flag overrides on top of a base configuration.
    fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(focal) = self.focal {
            config.focal_length = focal;
        }
        if let Some(fan) = self.fan {
            config.fan_half_width = fan;
        }
        if let Some(normalization) = self.fan_normalization {
            config.fan_normalization = normalization.into();
        }
        if let Some(mode) = self.mode {
            config.shader.mode = mode.into();
        }
        if let Some(bounces) = self.bounces {
            config.shader.max_bounces = bounces;
        }
        if let Some(rule) = self.hit_rule {
            config.shader.hit_rule = rule.into();
        }
        if let Some(enabled) = self.self_shadowing {
            config.shader.self_shadowing = enabled;
        }
        if let Some(enabled) = self.debug_normals {
            config.shader.debug_normals = enabled;
        }
        config
    }

    /// Random scene parameters for `count` spheres with flag overrides.
    fn random_params(&self, count: usize) -> RandomSceneParams {
        let mut params = RandomSceneParams {
            count,
            ..Default::default()
        };
        if let Some(radius_min) = self.radius_min {
            params.radius_min = radius_min;
        }
        if let Some(radius_max) = self.radius_max {
            params.radius_max = radius_max;
        }
        if let Some(xyz) = self.jitter.as_deref() {
            params.jitter = Vec3::new(xyz[0], xyz[1], xyz[2]);
        }
        params
    }

    /// Light position from --light, if given.
    fn light_override(&self) -> Option<Vec3> {
        self.light
            .as_deref()
            .map(|xyz| Vec3::new(xyz[0], xyz[1], xyz[2]))
    }
}

fn init_logging(level: Option<LogLevel>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder.init();
}

/// Resolve the scene, light and base configuration from the command line.
fn load_inputs(cli: &Cli) -> Result<(Scene, Light, RenderConfig, SceneDescription)> {
    if let Some(path) = &cli.scene {
        let description = load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?;
        let (scene, mut light) = description.build().context("Invalid scene description")?;
        if let Some(position) = cli.light_override() {
            light.position = position;
        }
        let config = description.config.clone().unwrap_or_default();
        return Ok((scene, light, config, description));
    }

    let mut description = SceneDescription::reference();
    if let Some(position) = cli.light_override() {
        description.light = position;
    }

    if let Some(count) = cli.random {
        let params = cli.random_params(count);
        let scene = random_scene(&params, cli.seed).context("Failed to generate random scene")?;
        log::info!("Generated {} spheres from seed {}", scene.len(), cli.seed);

        description.spheres = scene
            .spheres()
            .iter()
            .map(|sphere| SphereDescription {
                center: sphere.center(),
                radius: sphere.radius(),
                color: to_rgb8(sphere.color()),
            })
            .collect();
        return Ok((scene, Light::new(description.light), RenderConfig::default(), description));
    }

    let (scene, light) = description.build().context("Invalid reference scene")?;
    Ok((scene, light, RenderConfig::default(), description))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let (scene, light, base_config, mut description) = load_inputs(&cli)?;
    let config = cli.apply(base_config);
    config.validate().context("Invalid render configuration")?;

    let image = render(&scene, light, &config).context("Render failed")?;
    save_png(&image, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    if let Some(path) = &cli.save_scene {
        description.light = light.position;
        description.config = Some(config);
        let json = description.to_json_string()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write scene {}", path.display()))?;
        log::info!("Wrote scene description to {}", path.display());
    }

    Ok(())
}
