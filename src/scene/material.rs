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

use rand::RngCore;

use super::constants::{BOLTZMANNS_CONSTANT, PLANCKS_CONSTANT, SPEED_OF_LIGHT};
use super::intersection::Intersection;
use super::monte_carlo;
use super::ray::Ray;
use super::vector3::{cross, dot, Vector3};

/// A material that reflects rays, continuing the light path.
pub trait Material: Send + Sync {
    /// Returns the ray that continues the light path, backwards from the
    /// camera to the light source.
    fn get_new_ray(&self, incoming: &Ray, isect: &Intersection, rng: &mut dyn RngCore) -> Ray;
}

/// A perfectly diffuse (Lambertian) material.
pub struct DiffuseGreyMaterial {
    reflectance: f32,
}

impl DiffuseGreyMaterial {
    pub fn new(reflectance: f32) -> DiffuseGreyMaterial {
        DiffuseGreyMaterial { reflectance }
    }
}

impl Material for DiffuseGreyMaterial {
    fn get_new_ray(&self, incoming: &Ray, isect: &Intersection, rng: &mut dyn RngCore) -> Ray {
        let hemi = monte_carlo::get_hemisphere_vector(rng);
        let normal = if dot(incoming.direction, isect.normal) < 0.0 {
            isect.normal
        } else {
            -isect.normal
        };
        Ray {
            origin: isect.position,
            direction: align_to_normal(hemi, normal),
            wavelength: incoming.wavelength,
            probability: self.reflectance,
        }
    }
}

/// Rotates a hemisphere sample (aligned to +z) towards `normal`.
fn align_to_normal(v: Vector3, normal: Vector3) -> Vector3 {
    let up = if normal.z.abs() < 0.999 {
        Vector3::new(0.0, 0.0, 1.0)
    } else {
        Vector3::new(1.0, 0.0, 0.0)
    };
    let tangent = cross(up, normal).normalise();
    let bitangent = cross(normal, tangent);
    tangent * v.x + bitangent * v.y + normal * v.z
}

/// A material that emits light instead of reflecting it.
pub trait EmissiveMaterial: Send + Sync {
    /// Returns the radiant intensity at the given wavelength (nm).
    fn get_intensity(&self, wavelength: f32) -> f32;
}

/// A black body radiator at a given temperature, per Planck's law.
pub struct BlackBodyMaterial {
    temperature: f64,
    brightness: f32,
}

impl BlackBodyMaterial {
    pub fn new(temperature: f64, brightness: f32) -> BlackBodyMaterial {
        BlackBodyMaterial {
            temperature,
            brightness,
        }
    }
}

impl EmissiveMaterial for BlackBodyMaterial {
    fn get_intensity(&self, wavelength: f32) -> f32 {
        let lambda = (wavelength as f64) * 1.0e-9;
        let c1 = 2.0 * PLANCKS_CONSTANT * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
        let c2 =
            (PLANCKS_CONSTANT * SPEED_OF_LIGHT) / (lambda * BOLTZMANNS_CONSTANT * self.temperature);
        let spectral_radiance = c1 / (lambda.powi(5) * (c2.exp() - 1.0));
        (spectral_radiance * 1.0e-13) as f32 * self.brightness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_body_intensity_is_positive_in_visible_range() {
        let sun = BlackBodyMaterial::new(5778.0, 1.0);
        assert!(sun.get_intensity(550.0) > 0.0);
    }
}
