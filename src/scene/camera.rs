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

use super::quaternion::{rotate, Quaternion};
use super::ray::Ray;
use super::vector3::Vector3;

pub struct Camera {
    /// Location of the camera in the scene.
    pub position: Vector3,

    /// Horizontal field of view, in radians.
    pub field_of_view: f32,

    /// The distance along the optical axis that is perfectly in focus.
    pub focal_distance: f32,

    /// The direction in which the camera is looking.
    pub orientation: Quaternion,
}

impl Camera {
    /// Returns a camera ray through screen coordinate `(x, y)`, where both
    /// range over roughly `[-1, 1]`, at the given `wavelength`.
    pub fn get_ray(&self, x: f32, y: f32, wavelength: f32) -> Ray {
        let screen_distance = 1.0 / (self.field_of_view * 0.5).tan();
        let direction = Vector3::new(x, screen_distance, -y).normalise();

        Ray {
            origin: self.position,
            direction: rotate(direction, self.orientation),
            wavelength,
            probability: 1.0,
        }
    }
}
