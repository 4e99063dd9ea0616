// robigo-luculenta -- Spectral path tracer with a pipeline task scheduler
// Copyright (C) 2026 robigo-luculenta contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::scene::object::MaterialBox;
use crate::scene::ray::Ray;
use crate::scene::{monte_carlo, Scene};

/// The number of paths traced in one batch.
const NUMBER_OF_PHOTONS: usize = 1024 * 64;

/// A single traced photon, mapped onto the screen.
#[derive(Clone, Copy)]
pub struct MappedPhoton {
    pub x: f32,
    pub y: f32,
    pub probability: f32,
    pub wavelength: f32,
}

impl Default for MappedPhoton {
    fn default() -> MappedPhoton {
        MappedPhoton {
            x: 0.0,
            y: 0.0,
            probability: 0.0,
            wavelength: 0.0,
        }
    }
}

/// Traces one batch of wavelength samples through the scene.
///
/// Holds its own reproducibly-seeded random state (`spec.md` §3,
/// "Lifecycle"), so two trace units never share an RNG and a render is
/// reproducible given a fixed seed per unit.
pub struct TraceUnit {
    /// The pool index of this unit; stable for its entire lifetime.
    pub id: usize,

    aspect_ratio: f32,
    rng: SmallRng,

    pub mapped_photons: Vec<MappedPhoton>,
}

impl TraceUnit {
    pub fn new(id: usize, width: usize, height: usize) -> TraceUnit {
        TraceUnit {
            id,
            aspect_ratio: width as f32 / height as f32,
            rng: SmallRng::seed_from_u64(id as u64),
            mapped_photons: vec![MappedPhoton::default(); NUMBER_OF_PHOTONS],
        }
    }

    /// Returns the contribution of a photon travelling backwards along
    /// `initial_ray`, via Russian-roulette-terminated path tracing.
    fn render_ray(scene: &Scene, initial_ray: Ray, rng: &mut SmallRng) -> f32 {
        let mut ray = initial_ray;
        let mut continue_chance = 1.0f32;
        let mut intensity = 1.0f32;

        loop {
            let hit = match scene.intersect(&ray) {
                None => return 0.0,
                Some(hit) => hit,
            };
            let (isect, object) = hit;

            match &object.material {
                MaterialBox::Emissive(mat) => {
                    return intensity * mat.get_intensity(ray.wavelength);
                }
                MaterialBox::Reflective(mat) => {
                    ray = mat.get_new_ray(&ray, &isect, rng);
                    intensity *= ray.probability;
                }
            }

            ray.origin = ray.origin + ray.direction * 1.0e-4;
            continue_chance *= 0.96;

            if monte_carlo::get_unit(rng) * 0.85
                > continue_chance * (1.0 - (intensity * -20.0).exp())
            {
                return 0.0;
            }
        }
    }

    /// Fills the buffer of mapped photons once.
    pub fn render(&mut self, scene: &Scene) {
        for photon in self.mapped_photons.iter_mut() {
            let wavelength = monte_carlo::get_wavelength(&mut self.rng);
            let x = monte_carlo::get_bi_unit(&mut self.rng);
            let y = monte_carlo::get_bi_unit(&mut self.rng) / self.aspect_ratio;

            photon.wavelength = wavelength;
            photon.x = x;
            photon.y = y;

            let t = monte_carlo::get_unit(&mut self.rng);
            let camera = (scene.get_camera_at_time)(t);
            let ray = camera.get_ray(x, y, wavelength);

            photon.probability = TraceUnit::render_ray(scene, ray, &mut self.rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::demo_scene;

    #[test]
    fn render_fills_every_photon_slot() {
        let scene = demo_scene();
        let mut unit = TraceUnit::new(0, 64, 36);
        unit.render(&scene);
        assert_eq!(unit.mapped_photons.len(), NUMBER_OF_PHOTONS);
        assert!(unit.mapped_photons.iter().all(|p| p.wavelength >= 380.0));
    }

    #[test]
    fn two_units_with_different_ids_sample_different_paths() {
        let scene = demo_scene();
        let mut a = TraceUnit::new(0, 64, 36);
        let mut b = TraceUnit::new(1, 64, 36);
        a.render(&scene);
        b.render(&scene);
        assert_ne!(a.mapped_photons[0].x, b.mapped_photons[0].x);
    }
}
