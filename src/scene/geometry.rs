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

use super::intersection::Intersection;
use super::ray::Ray;
use super::vector3::{dot, Vector3};

/// Something a ray can be intersected with.
pub trait Surface: Send + Sync {
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;
}

/// An infinitely large plane.
pub struct Plane {
    normal: Vector3,
    offset: Vector3,
}

impl Plane {
    pub fn new(normal: Vector3, offset: Vector3) -> Plane {
        Plane {
            normal: normal.normalise(),
            offset,
        }
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let denom = dot(self.normal, ray.direction);
        if denom.abs() < 1.0e-6 {
            return None;
        }
        let distance = dot(self.normal, self.offset - ray.origin) / denom;
        if distance <= 0.0 {
            return None;
        }
        Some(Intersection {
            position: ray.origin + ray.direction * distance,
            normal: self.normal,
            distance,
        })
    }
}

/// A sphere centred at `position` with the given `radius`.
pub struct Sphere {
    position: Vector3,
    radius: f32,
}

impl Sphere {
    pub fn new(position: Vector3, radius: f32) -> Sphere {
        Sphere { position, radius }
    }

    pub fn lies_inside(&self, p: Vector3) -> bool {
        (p - self.position).magnitude_squared() <= self.radius * self.radius
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let to_origin = ray.origin - self.position;
        let b = dot(to_origin, ray.direction);
        let c = to_origin.magnitude_squared() - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t1 = -b - sqrt_d;
        let t2 = -b + sqrt_d;
        let distance = if t1 > 1.0e-4 {
            t1
        } else if t2 > 1.0e-4 {
            t2
        } else {
            return None;
        };
        let position = ray.origin + ray.direction * distance;
        let normal = (position - self.position) * (1.0 / self.radius);
        Some(Intersection {
            position,
            normal,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_lies_inside_is_symmetric_around_centre() {
        let s = Sphere::new(Vector3::zero(), 2.0);
        assert!(s.lies_inside(Vector3::new(1.0, 0.0, 0.0)));
        assert!(!s.lies_inside(Vector3::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn ray_through_sphere_centre_intersects_at_near_side() {
        let s = Sphere::new(Vector3::zero(), 2.0);
        let ray = Ray {
            origin: Vector3::new(0.0, 0.0, -10.0),
            direction: Vector3::new(0.0, 0.0, 1.0),
            wavelength: 550.0,
            probability: 1.0,
        };
        let isect = s.intersect(&ray).expect("ray should hit the sphere");
        assert!((isect.distance - 8.0).abs() < 1.0e-4);
    }
}
