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

/// Errors the scheduler can report. Per `spec.md` §7, only resource
/// exhaustion at construction is a reportable `Result` error; contract
/// violations by a caller and transient liveness gaps are not represented
/// here (the former aborts the process, the latter is `Task::Sleep`).
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("failed to allocate {requested} units for the {pool} pool")]
    PoolAllocation {
        pool: &'static str,
        requested: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}
