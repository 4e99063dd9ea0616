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

use crate::scene::cie1931;
use crate::scene::vector3::Vector3;

use super::trace_unit::MappedPhoton;

/// Accumulates the contribution of one or more trace units into a local
/// CIE XYZ framebuffer.
pub struct PlotUnit {
    /// The pool index of this unit; stable for its entire lifetime.
    pub id: usize,

    image_width: usize,
    image_height: usize,
    aspect_ratio: f32,

    pub tristimulus_buffer: Vec<Vector3>,
}

impl PlotUnit {
    pub fn new(id: usize, width: usize, height: usize) -> PlotUnit {
        PlotUnit {
            id,
            image_width: width,
            image_height: height,
            aspect_ratio: width as f32 / height as f32,
            tristimulus_buffer: vec![Vector3::zero(); width * height],
        }
    }

    /// Splats one pixel, bilinearly, into the buffer (additively).
    fn plot_pixel(&mut self, x: f32, y: f32, cie: Vector3) {
        let w = self.image_width;
        let h = self.image_height;
        let px = (x * 0.5 + 0.5) * (w as f32 - 1.0);
        let py = (y * self.aspect_ratio * 0.5 + 0.5) * (h as f32 - 1.0);

        if !px.is_finite() || !py.is_finite() {
            return;
        }

        let px1 = px.floor().clamp(0.0, w as f32 - 1.0) as usize;
        let px2 = px.ceil().clamp(0.0, w as f32 - 1.0) as usize;
        let py1 = py.floor().clamp(0.0, h as f32 - 1.0) as usize;
        let py2 = py.ceil().clamp(0.0, h as f32 - 1.0) as usize;

        let cx = px - px1 as f32;
        let cy = py - py1 as f32;
        let c11 = (1.0 - cx) * (1.0 - cy);
        let c12 = (1.0 - cx) * cy;
        let c21 = cx * (1.0 - cy);
        let c22 = cx * cy;

        let buffer = &mut self.tristimulus_buffer;
        buffer[py1 * w + px1] = buffer[py1 * w + px1] + cie * c11;
        buffer[py1 * w + px2] = buffer[py1 * w + px2] + cie * c21;
        buffer[py2 * w + px1] = buffer[py2 * w + px1] + cie * c12;
        buffer[py2 * w + px2] = buffer[py2 * w + px2] + cie * c22;
    }

    /// Plots every photon in `photons` onto the canvas.
    pub fn plot(&mut self, photons: &[MappedPhoton]) {
        for photon in photons.iter() {
            let cie = cie1931::get_tristimulus(photon.wavelength);
            self.plot_pixel(photon.x, photon.y, cie * photon.probability);
        }
    }

    /// Resets the tristimulus buffer to black, so the unit can be reused.
    pub fn clear(&mut self) {
        for v in self.tristimulus_buffer.iter_mut() {
            *v = Vector3::zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plotting_a_photon_adds_energy_to_the_buffer() {
        let mut unit = PlotUnit::new(0, 4, 4);
        let photon = MappedPhoton {
            x: 0.0,
            y: 0.0,
            probability: 1.0,
            wavelength: 550.0,
        };
        unit.plot(&[photon]);
        let total: f32 = unit.tristimulus_buffer.iter().map(|v| v.y).sum();
        assert!(total > 0.0);
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut unit = PlotUnit::new(0, 2, 2);
        unit.plot(&[MappedPhoton {
            x: 0.0,
            y: 0.0,
            probability: 1.0,
            wavelength: 550.0,
        }]);
        unit.clear();
        assert!(unit.tristimulus_buffer.iter().all(|v| *v == Vector3::zero()));
    }
}
