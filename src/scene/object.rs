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

use super::geometry::Surface;
use super::material::{EmissiveMaterial, Material};

/// Either a reflective or an emissive material.
pub enum MaterialBox {
    Reflective(Box<dyn Material>),
    Emissive(Box<dyn EmissiveMaterial>),
}

/// A surface paired with the material it is made of.
pub struct Object {
    pub surface: Box<dyn Surface>,
    pub material: MaterialBox,
}

impl Object {
    pub fn new(surface: Box<dyn Surface>, material: MaterialBox) -> Object {
        Object { surface, material }
    }
}
