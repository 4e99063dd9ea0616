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

//! The four unit kinds the scheduler dispatches tasks over. Their numerical
//! bodies are minimal, real implementations grounded in the upstream
//! renderer's `trace_unit.rs`/`plot_unit.rs`/`gather_unit.rs`/
//! `tonemap_unit.rs`, but are not themselves the subject of this crate's
//! specification (see `spec.md` §1).

pub mod gather_unit;
pub mod plot_unit;
pub mod tonemap_unit;
pub mod trace_unit;

pub use gather_unit::GatherUnit;
pub use plot_unit::PlotUnit;
pub use tonemap_unit::TonemapUnit;
pub use trace_unit::{MappedPhoton, TraceUnit};
