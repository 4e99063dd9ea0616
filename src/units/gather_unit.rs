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

use crate::scene::vector3::Vector3;

/// The single canonical HDR accumulator into which every plot unit is
/// eventually summed.
///
/// Unlike the upstream renderer's `GatherUnit`, this does not checkpoint the
/// buffer to disk: persistence of partial renders is an explicit Non-goal
/// (`spec.md` §1).
pub struct GatherUnit {
    pub tristimulus_buffer: Vec<Vector3>,

    /// Running compensation for rounding error in the Kahan summation below.
    compensation_buffer: Vec<Vector3>,
}

impl GatherUnit {
    pub fn new(width: usize, height: usize) -> GatherUnit {
        GatherUnit {
            tristimulus_buffer: vec![Vector3::zero(); width * height],
            compensation_buffer: vec![Vector3::zero(); width * height],
        }
    }

    /// Adds the contents of a plot unit's buffer into the accumulator,
    /// using Kahan compensated summation to keep rounding error bounded
    /// over many accumulations.
    pub fn accumulate(&mut self, tristimuli: &[Vector3]) {
        for ((acc, comp), px) in self
            .tristimulus_buffer
            .iter_mut()
            .zip(self.compensation_buffer.iter_mut())
            .zip(tristimuli.iter())
        {
            let extra = *px - *comp;
            let sum = *acc + extra;
            *comp = (sum - *acc) - extra;
            *acc = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_sums_multiple_plot_buffers() {
        let mut gather = GatherUnit::new(2, 1);
        gather.accumulate(&[Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)]);
        gather.accumulate(&[Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)]);
        assert_eq!(gather.tristimulus_buffer[0], Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(gather.tristimulus_buffer[1], Vector3::new(0.0, 2.0, 0.0));
    }
}
