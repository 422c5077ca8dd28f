use std::f32::consts::TAU;

use cgmath::Vector3;

use crate::mesh::{build_disc_shell, build_enclosure};
use crate::outline::extract_outline;
use crate::render::{Material, MeshBatch, RenderSink};
use crate::scanner::DeviceScanner;
use crate::texture::{disc_texture_path, glass_texture_path, TextureHost, TextureStatus};
use crate::world::WorldHost;

/// Disc center height above the device cell center.
const DISC_RAISE: f32 = 0.525;
/// Glass top ring height above the device cell center.
const GLASS_RAISE: f32 = 0.69;
/// Rim extrusion depth as a fraction of the disc size.
const EXTRUSION_FACTOR: f32 = 0.06;

/// Tunables for the floating-disc display.
#[derive(Clone, Copy, Debug)]
pub struct VisualConfig {
    /// Overall disc diameter factor.
    pub disc_size: f32,
    /// Overall enclosure size factor.
    pub glass_size: f32,
    /// Disc spin in radians per second of render-tick time.
    pub spin_speed: f32,
    /// Vertical bob frequency; the bob stays off while the amplitude is 0.
    pub bob_speed: f32,
    pub bob_amplitude: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            disc_size: 0.7,
            glass_size: 0.8,
            spin_speed: 0.05,
            bob_speed: 0.0,
            bob_amplitude: 0.0,
        }
    }
}

/// The plugin core. Owns the scanned device table and the per-frame
/// geometry pass; [`on_scan_tick`](Self::on_scan_tick) and
/// [`on_render_tick`](Self::on_render_tick) are the two entry points the
/// host dispatcher invokes, never concurrently.
pub struct JukeboxVisuals {
    config: VisualConfig,
    scanner: DeviceScanner,
    rotation_angle: f32,
    elapsed: f32,
}

impl JukeboxVisuals {
    pub fn new(config: VisualConfig) -> Self {
        Self {
            config,
            scanner: DeviceScanner::new(),
            rotation_angle: 0.0,
            elapsed: 0.0,
        }
    }

    /// Device table rebuilt by the last completed scan tick.
    pub fn scanner(&self) -> &DeviceScanner {
        &self.scanner
    }

    /// Scan-tick subscription: refresh the device table.
    pub fn on_scan_tick(&mut self, world: &dyn WorldHost) {
        self.scanner.scan(world);
    }

    /// Render-tick subscription: advance the spin, then rebuild and submit
    /// disc and enclosure geometry for every known device. A device whose
    /// texture is not ready yet is skipped for this frame only; it stays
    /// in the table and retries next frame.
    pub fn on_render_tick(
        &mut self,
        delta: f32,
        textures: &dyn TextureHost,
        sink: &mut dyn RenderSink,
    ) {
        self.rotation_angle = advance_rotation(self.rotation_angle, self.config.spin_speed, delta);
        self.elapsed += delta;

        let angle = self.rotation_angle;
        let bob = (self.elapsed * self.config.bob_speed).sin() * self.config.bob_amplitude;

        for (pos, state) in self.scanner.devices() {
            let Some(record_id) = state.record_id.as_deref() else {
                continue;
            };
            sink.set_ambient_light(*pos, state.brightness);

            let disc_texture = disc_texture_path(record_id);
            if textures.status(&disc_texture) != TextureStatus::Loaded {
                log::trace!("{} not ready, skipping device", disc_texture.as_str());
                continue;
            }
            let Some(image) = textures.load_image(&disc_texture) else {
                continue;
            };
            let mask = extract_outline(&image);

            let mut disc_center = pos.center();
            disc_center.y += DISC_RAISE + bob;
            let right = Vector3::new(angle.cos(), 0.0, angle.sin()) * 0.5 * self.config.disc_size;
            let forward =
                Vector3::new(-angle.sin(), 0.0, angle.cos()) * 0.5 * self.config.disc_size;
            let shell = build_disc_shell(
                &mask,
                disc_center,
                right,
                forward,
                EXTRUSION_FACTOR * self.config.disc_size,
            );
            sink.submit(MeshBatch {
                texture: disc_texture,
                material: Material::Cutout,
                mesh: shell,
            });

            let glass_texture = glass_texture_path();
            if textures.status(&glass_texture) != TextureStatus::Loaded {
                continue;
            }
            let mut glass_center = pos.center();
            glass_center.y += GLASS_RAISE;
            // The enclosure does not spin with the disc.
            let glass_right = Vector3::new(0.5 * self.config.glass_size, 0.0, 0.0);
            let glass_forward = Vector3::new(0.0, 0.0, 0.5 * self.config.glass_size);
            let enclosure = build_enclosure(
                glass_center,
                glass_right,
                glass_forward,
                self.config.glass_size,
            );
            sink.submit(MeshBatch {
                texture: glass_texture,
                material: Material::Translucent,
                mesh: enclosure,
            });
        }
    }
}

/// Advance a spin angle by `speed * delta`, wrapped into [0, 2π).
pub fn advance_rotation(angle: f32, speed: f32, delta: f32) -> f32 {
    (angle + speed * delta).rem_euclid(TAU)
}
