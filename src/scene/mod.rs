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

//! The scene representation and the numerical bodies of the trace/plot/gather/
//! tonemap stages. None of this is the subject of the specification this
//! crate implements (see `spec.md` §1); it exists only so the scheduler has
//! real units of work to dispatch.

pub mod camera;
pub mod cie1931;
pub mod constants;
pub mod geometry;
pub mod intersection;
pub mod material;
pub mod monte_carlo;
pub mod object;
pub mod quaternion;
pub mod ray;
pub mod srgb;
pub mod vector3;

use camera::Camera;
use intersection::Intersection;
use object::Object;
use ray::Ray;

/// A collection of renderable objects, seen through a time-varying camera.
pub struct Scene {
    pub objects: Vec<Object>,

    /// Returns the camera through which the scene is seen at time `t`
    /// (sampled randomly in `[0, 1]` to produce effects such as motion
    /// blur, if the camera function varies with `t`).
    pub get_camera_at_time: fn(f32) -> Camera,
}

impl Scene {
    /// Intersects `ray` with every object, returning the nearest hit.
    pub fn intersect(&self, ray: &Ray) -> Option<(Intersection, &Object)> {
        let mut result = None;
        let mut nearest = f32::MAX;

        for obj in self.objects.iter() {
            if let Some(isect) = obj.surface.intersect(ray) {
                if isect.distance < nearest {
                    nearest = isect.distance;
                    result = Some((isect, obj));
                }
            }
        }

        result
    }
}

/// Builds a small demonstration scene: an emissive sphere above a diffuse
/// floor, seen through a camera that slowly orbits the origin.
pub fn demo_scene() -> Scene {
    use geometry::{Plane, Sphere};
    use material::{BlackBodyMaterial, DiffuseGreyMaterial};
    use object::MaterialBox::{Emissive, Reflective};
    use quaternion::Quaternion;
    use std::f32::consts::PI;
    use vector3::Vector3;

    let sun_radius = 5.0;
    let sun = Object::new(
        Box::new(Sphere::new(Vector3::zero(), sun_radius)),
        Emissive(Box::new(BlackBodyMaterial::new(6504.0, 1.0))),
    );

    let floor = Object::new(
        Box::new(Plane::new(
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -sun_radius),
        )),
        Reflective(Box::new(DiffuseGreyMaterial::new(0.8))),
    );

    fn make_camera(t: f32) -> Camera {
        let phi = PI * (1.0 + 0.01 * t);
        let distance = 30.0;
        let position = Vector3::new(phi.sin() * distance, phi.cos() * distance, distance * 0.3);
        Camera {
            position,
            field_of_view: PI * 0.35,
            focal_distance: distance,
            orientation: Quaternion::rotation(0.0, 0.0, -1.0, phi + PI),
        }
    }

    Scene {
        objects: vec![sun, floor],
        get_camera_at_time: make_camera,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ray::Ray;
    use vector3::Vector3;

    #[test]
    fn demo_scene_camera_ray_hits_something() {
        let scene = demo_scene();
        let camera = (scene.get_camera_at_time)(0.0);
        let ray = camera.get_ray(0.0, 0.0, 550.0);
        assert!(scene.intersect(&ray).is_some());
    }

    #[test]
    fn empty_scene_never_intersects() {
        fn cam(_: f32) -> Camera {
            Camera {
                position: Vector3::zero(),
                field_of_view: 1.0,
                focal_distance: 1.0,
                orientation: quaternion::Quaternion::new(0.0, 0.0, 0.0, 1.0),
            }
        }
        let scene = Scene {
            objects: Vec::new(),
            get_camera_at_time: cam,
        };
        let ray = Ray {
            origin: Vector3::zero(),
            direction: Vector3::new(0.0, 1.0, 0.0),
            wavelength: 550.0,
            probability: 1.0,
        };
        assert!(scene.intersect(&ray).is_none());
    }
}
