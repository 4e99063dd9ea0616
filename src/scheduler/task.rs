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

use crate::units::{GatherUnit, PlotUnit, TonemapUnit, TraceUnit};

/// A unit of dispatched work: a stage kind plus the units it owns for the
/// duration of the task (`spec.md` §3, "Task").
///
/// Units travel with the task by value, rather than by index into a shared
/// table: the scheduler gives up ownership of a unit the moment it is
/// dispatched and only regains it when the completed task is handed back to
/// `get_new_task`. That is what makes the "no two tasks may alias a unit"
/// and "the scheduler holds no reference into an in-flight unit" invariants
/// (`spec.md` §3 Invariant 1, §5) hold by construction rather than by a
/// runtime check.
pub enum Task {
    /// Nothing useful can be dispatched right now; back off briefly and
    /// ask again.
    Sleep,

    /// Trace a batch of rays and store the mapped photons.
    Trace(Box<TraceUnit>),

    /// Plot the mapped photons of one or more completed trace units onto a
    /// CIE XYZ canvas.
    Plot(Box<PlotUnit>, Vec<Box<TraceUnit>>),

    /// Sum one or more completed plot canvases into the final accumulator.
    Gather(Box<GatherUnit>, Vec<Box<PlotUnit>>),

    /// Convert the accumulator to sRGB and hand it to the display sink.
    Tonemap(Box<TonemapUnit>, Box<GatherUnit>),
}

/// The stage kind of a [`Task`], without its payload. Useful for logging
/// and for tests that only care about which branch of the dispatch policy
/// fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TaskKind {
    Sleep,
    Trace,
    Plot,
    Gather,
    Tonemap,
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Sleep => TaskKind::Sleep,
            Task::Trace(..) => TaskKind::Trace,
            Task::Plot(..) => TaskKind::Plot,
            Task::Gather(..) => TaskKind::Gather,
            Task::Tonemap(..) => TaskKind::Tonemap,
        }
    }

    /// The pool index of the unit this task will produce, if any
    /// (`spec.md` §3, "primaryUnit"). `Gather`, `Tonemap` and `Sleep` have
    /// no single produced unit.
    pub fn primary_unit_id(&self) -> Option<usize> {
        match self {
            Task::Trace(unit) => Some(unit.id),
            Task::Plot(unit, _) => Some(unit.id),
            Task::Sleep | Task::Gather(..) | Task::Tonemap(..) => None,
        }
    }

    /// The pool indices this task reads (`spec.md` §3, "inputUnits").
    pub fn input_unit_ids(&self) -> Vec<usize> {
        match self {
            Task::Sleep | Task::Trace(_) | Task::Tonemap(..) => Vec::new(),
            Task::Plot(_, inputs) => inputs.iter().map(|u| u.id).collect(),
            Task::Gather(_, inputs) => inputs.iter().map(|u| u.id).collect(),
        }
    }
}
