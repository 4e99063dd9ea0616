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

use std::f32::consts::PI;

use rand::{Rng, RngCore};

use super::vector3::Vector3;

/// Returns a random number in the range [0, 1), using `rng`.
pub fn get_unit(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Returns a random number in the range [-1, 1), using `rng`.
pub fn get_bi_unit(rng: &mut dyn RngCore) -> f32 {
    get_unit(rng) * 2.0 - 1.0
}

/// Returns a random wavelength in the range [380, 780) nm, using `rng`.
pub fn get_wavelength(rng: &mut dyn RngCore) -> f32 {
    get_unit(rng) * 400.0 + 380.0
}

/// Returns a uniformly distributed random direction on the unit hemisphere
/// around the positive z-axis, using `rng`.
pub fn get_hemisphere_vector(rng: &mut dyn RngCore) -> Vector3 {
    let longitude = get_unit(rng) * 2.0 * PI;
    let latitude = get_unit(rng).sqrt().acos();
    Vector3::new(
        latitude.sin() * longitude.cos(),
        latitude.sin() * longitude.sin(),
        latitude.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn hemisphere_vector_points_into_upper_half() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..64 {
            let v = get_hemisphere_vector(&mut rng);
            assert!(v.z >= 0.0);
            assert!((v.magnitude() - 1.0).abs() < 1.0e-4);
        }
    }
}
