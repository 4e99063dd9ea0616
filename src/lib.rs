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

//! A spectral path tracer whose rendering pipeline is driven by a
//! dependency-aware task scheduler: worker threads repeatedly ask a shared
//! [`scheduler::Scheduler`] for work, which hands out trace, plot, gather
//! and tonemap tasks in the order their inputs become available.

pub mod config;
pub mod error;
pub mod scene;
pub mod scheduler;
pub mod units;
pub mod worker;

pub use config::RenderConfig;
pub use error::SchedulerError;
pub use scheduler::{DisplaySink, Frame, Scheduler, Task, TaskKind};
