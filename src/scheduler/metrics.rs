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

use std::collections::VecDeque;

/// Capacity of the throughput sample ring (`spec.md` §3, §4.6).
pub const CAPACITY: usize = 512;

/// A bounded sliding window of throughput samples (batches/sec), with mean
/// and standard deviation recomputed on every push.
pub struct PerformanceWindow {
    samples: VecDeque<f32>,
}

impl PerformanceWindow {
    pub fn new() -> PerformanceWindow {
        PerformanceWindow {
            samples: VecDeque::with_capacity(CAPACITY),
        }
    }

    /// Appends `sample`, evicting the oldest entry once the window is at
    /// capacity.
    pub fn push(&mut self, sample: f32) {
        if self.samples.len() == CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean of the window; `0.0` if empty.
    pub fn mean(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.samples.iter().sum();
        sum / self.samples.len() as f32
    }

    /// Population standard deviation of the window; `0.0` if empty.
    pub fn stddev(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let n = self.samples.len() as f32;
        let mean = self.mean();
        let sum_sq: f32 = self.samples.iter().map(|x| x * x).sum();
        (sum_sq / n - mean * mean).max(0.0).sqrt()
    }
}

impl Default for PerformanceWindow {
    fn default() -> PerformanceWindow {
        PerformanceWindow::new()
    }
}
