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

use super::vector3::Vector3;

#[derive(Clone, Copy)]
pub struct Ray {
    /// The origin of the ray.
    pub origin: Vector3,

    /// The normalised direction in which the ray is pointing.
    pub direction: Vector3,

    /// The wavelength of the light ray in nm (in the range 380-780).
    pub wavelength: f32,

    /// The probability that a simulated photon followed this path.
    pub probability: f32,
}
