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

//! Drives a pool of worker threads, each repeatedly trading a completed
//! [`Task`] for a new one and executing whatever comes back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::scene::Scene;
use crate::scheduler::{Scheduler, Task};

/// How long a worker sleeps when the scheduler has nothing to dispatch.
const SLEEP_TASK_DURATION: Duration = Duration::from_millis(100);

/// A running pool of worker threads sharing one [`Scheduler`].
pub struct WorkerPool {
    stop: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `workers` threads, each looping `get_new_task`/`execute_task`
    /// against `scheduler` until [`WorkerPool::stop`] is called. `scene` is
    /// shared read-only by every thread (`spec.md` §9: the scheduler never
    /// touches scene data, only unit ownership).
    pub fn spawn(workers: usize, scheduler: Scheduler, scene: Arc<Scene>) -> WorkerPool {
        let stop = Arc::new(AtomicBool::new(false));
        let mut handles = Vec::with_capacity(workers);

        for _ in 0..workers {
            let scheduler = scheduler.clone();
            let scene = scene.clone();
            let stop = stop.clone();

            handles.push(thread::spawn(move || {
                let mut task = Task::Sleep;
                while !stop.load(Ordering::Relaxed) {
                    task = scheduler.get_new_task(task);
                    execute_task(&mut task, &scene);
                }
            }));
        }

        WorkerPool { stop, handles }
    }

    /// Signals every worker to stop after its current task, and waits for
    /// them to exit.
    pub fn join(self) {
        self.stop.store(true, Ordering::Relaxed);
        for handle in self.handles {
            let _ = handle.join();
        }
    }
}

fn execute_task(task: &mut Task, scene: &Scene) {
    match task {
        Task::Sleep => thread::sleep(SLEEP_TASK_DURATION),
        Task::Trace(trace_unit) => trace_unit.render(scene),
        Task::Plot(plot_unit, trace_units) => {
            for unit in trace_units.iter() {
                plot_unit.plot(&unit.mapped_photons);
            }
        }
        Task::Gather(gather_unit, plot_units) => {
            for unit in plot_units.iter_mut() {
                gather_unit.accumulate(&unit.tristimulus_buffer);
                unit.clear();
            }
        }
        Task::Tonemap(tonemap_unit, gather_unit) => {
            tonemap_unit.tonemap(&gather_unit.tristimulus_buffer);
        }
    }
}
