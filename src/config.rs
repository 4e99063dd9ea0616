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

use std::time::Duration;

/// Construction inputs for a render (`spec.md` §6). The CLI binary builds
/// this from flags; library users can build it directly.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Number of worker threads driving the scheduler.
    pub workers: usize,

    /// Canvas width, in pixels.
    pub width: usize,

    /// Canvas height, in pixels.
    pub height: usize,

    /// Minimum wall-clock gap between display refreshes (`spec.md` §3,
    /// "Scheduling clock"). Defaults to 30 seconds.
    pub tonemap_interval: Duration,
}

impl RenderConfig {
    pub fn new(workers: usize, width: usize, height: usize) -> RenderConfig {
        RenderConfig {
            workers: workers.max(1),
            width: width.max(1),
            height: height.max(1),
            tonemap_interval: Duration::from_secs(30),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig::new(num_cpus::get(), 1280, 720)
    }
}
