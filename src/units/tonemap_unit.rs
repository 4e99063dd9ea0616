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

use crate::scene::srgb;
use crate::scene::vector3::Vector3;

/// Converts the result of a `GatherUnit` into a displayable sRGB image.
/// The shape of the tonemap curve itself is an explicit Non-goal
/// (`spec.md` §1); this is a minimal Reinhard-style exposure estimate,
/// just enough to produce a real image for the display sink.
pub struct TonemapUnit {
    image_width: usize,
    image_height: usize,

    pub rgb_buffer: Vec<u8>,
}

impl TonemapUnit {
    pub fn new(width: usize, height: usize) -> TonemapUnit {
        TonemapUnit {
            image_width: width,
            image_height: height,
            rgb_buffer: vec![0u8; width * height * 3],
        }
    }

    /// Returns the average luminance (CIE Y) of the buffer, used as an
    /// exposure estimate: the average intensity becomes mid-grey.
    fn find_exposure(tristimuli: &[Vector3]) -> f32 {
        if tristimuli.is_empty() {
            return 1.0;
        }
        let sum: f32 = tristimuli.iter().map(|v| v.y).sum();
        let mean = sum / tristimuli.len() as f32;
        if mean > 1.0e-6 {
            mean
        } else {
            1.0
        }
    }

    /// Converts the unweighted CIE XYZ values in `tristimuli` to tonemapped,
    /// gamma-corrected sRGB bytes, tightly packed as `width*height*3`
    /// (`spec.md` §6).
    pub fn tonemap(&mut self, tristimuli: &[Vector3]) {
        let exposure = Self::find_exposure(tristimuli);

        for (i, cie) in tristimuli.iter().enumerate() {
            let exposed = *cie * (1.0 / (2.0 * exposure));
            let reinhard = Vector3::new(
                exposed.x / (1.0 + exposed.x),
                exposed.y / (1.0 + exposed.y),
                exposed.z / (1.0 + exposed.z),
            );
            let srgb = srgb::transform(reinhard);

            self.rgb_buffer[i * 3] = to_byte(srgb.x);
            self.rgb_buffer[i * 3 + 1] = to_byte(srgb.y);
            self.rgb_buffer[i * 3 + 2] = to_byte(srgb.z);
        }
    }

    pub fn width(&self) -> usize {
        self.image_width
    }

    pub fn height(&self) -> usize {
        self.image_height
    }
}

fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
