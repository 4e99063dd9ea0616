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

//! Scenario tests driving the scheduler purely through its public API
//! (`Scheduler::get_new_task`), mirroring the literal walkthroughs used to
//! validate the dispatch policy.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use robigo_luculenta::{RenderConfig, Scheduler, Task, TaskKind};

struct CountingSink {
    frames: AtomicUsize,
    last_size: Mutex<(usize, usize)>,
}

impl CountingSink {
    fn new() -> CountingSink {
        CountingSink {
            frames: AtomicUsize::new(0),
            last_size: Mutex::new((0, 0)),
        }
    }
}

impl robigo_luculenta::DisplaySink for CountingSink {
    fn on_frame(&self, width: usize, height: usize, rgb: &[u8]) {
        assert_eq!(rgb.len(), width * height * 3);
        *self.last_size.lock().unwrap() = (width, height);
        self.frames.fetch_add(1, Ordering::SeqCst);
    }
}

fn scheduler(workers: usize, tonemap_interval: Duration) -> (Scheduler, Arc<CountingSink>) {
    let sink = Arc::new(CountingSink::new());
    let config = RenderConfig {
        workers,
        width: 4,
        height: 4,
        tonemap_interval,
    };
    let scheduler = Scheduler::new(&config, sink.clone()).expect("pools should allocate");
    (scheduler, sink)
}

/// Scenario 1: cold start (`spec.md` §8). N = 2, so T = 6. The first call
/// with a sentinel completion returns Trace on unit 0.
#[test]
fn cold_start_dispatches_trace_on_unit_zero() {
    let (scheduler, _sink) = scheduler(2, Duration::from_secs(3600));
    let task = scheduler.get_new_task(Task::Sleep);
    assert_eq!(task.kind(), TaskKind::Trace);
    assert_eq!(task.primary_unit_id(), Some(0));
}

/// Trace drain. N = 2, so T = 6 trace units and P = 1 plot unit. With every
/// trace unit dispatched and none yet done, completing the first one is the
/// only matching branch besides rule 4 (plot to recycle traces): no trace
/// units remain available, and the lone plot unit is free.
#[test]
fn trace_drain_then_plot_recycles_via_rule_four() {
    let (scheduler, _sink) = scheduler(2, Duration::from_secs(3600));

    let mut in_flight = Vec::new();
    let mut task = Task::Sleep;
    for expected_id in 0..6 {
        task = scheduler.get_new_task(task);
        assert_eq!(task.kind(), TaskKind::Trace);
        assert_eq!(task.primary_unit_id(), Some(expected_id));
        in_flight.push(task);
        task = Task::Sleep;
    }

    let plot_task = scheduler.get_new_task(in_flight.remove(0));
    assert_eq!(plot_task.kind(), TaskKind::Plot);
    assert_eq!(plot_task.input_unit_ids(), vec![0]);

    // The remaining five trace completions find no plot unit free (it is
    // tied up in `plot_task`) and no gather work waiting, so each is a
    // cooperative no-op.
    for completed in in_flight {
        let next = scheduler.get_new_task(completed);
        assert_eq!(next.kind(), TaskKind::Sleep);
    }
}

/// Completing a Plot task sends its trace inputs back to `availableTrace`
/// but sends the plot unit itself to `donePlot`, not back to available
/// (`spec.md` §4.4), so the very next dispatch goes back to Trace, not
/// Plot again, even though a plot "completed".
#[test]
fn plot_completion_recycles_traces_but_not_the_plot_unit() {
    let (scheduler, _sink) = scheduler(2, Duration::from_secs(3600));

    let mut in_flight = Vec::new();
    let mut task = Task::Sleep;
    for _ in 0..6 {
        task = scheduler.get_new_task(task);
        in_flight.push(task);
        task = Task::Sleep;
    }

    let plot_task = scheduler.get_new_task(in_flight.remove(0));
    assert_eq!(plot_task.kind(), TaskKind::Plot);
    for completed in in_flight {
        let next = scheduler.get_new_task(completed);
        assert_eq!(next.kind(), TaskKind::Sleep);
    }

    let next = scheduler.get_new_task(plot_task);
    assert_eq!(next.kind(), TaskKind::Trace);
    assert_eq!(next.primary_unit_id(), Some(0));
}

/// Scenario 4: display refresh path. With a zero tonemap interval (so the
/// clock is always "elapsed"), driving the pipeline forward eventually
/// yields a Tonemap task whose completion invokes the display sink with a
/// correctly sized frame.
#[test]
fn display_refresh_path_invokes_sink_with_a_full_frame() {
    let (scheduler, sink) = scheduler(2, Duration::from_secs(0));

    let mut task = Task::Sleep;
    for _ in 0..60 {
        task = scheduler.get_new_task(task);
    }

    assert!(sink.frames.load(Ordering::SeqCst) >= 1);
    assert_eq!(*sink.last_size.lock().unwrap(), (4, 4));
}

/// Scenario 5: deadlock escape. With N = 1 (T = 3, P = 1), asking for work
/// three times in a row without ever completing anything exhausts every
/// trace unit; the next call must return Sleep rather than panicking or
/// handing out a unit twice, and completing that Sleep is a no-op (the
/// scheduler keeps returning Sleep until something is actually completed).
#[test]
fn deadlock_escape_returns_sleep_when_everything_is_in_flight() {
    let (scheduler, _sink) = scheduler(1, Duration::from_secs(3600));

    for _ in 0..3 {
        let task = scheduler.get_new_task(Task::Sleep);
        assert_eq!(task.kind(), TaskKind::Trace);
    }

    let next = scheduler.get_new_task(Task::Sleep);
    assert_eq!(next.kind(), TaskKind::Sleep);

    let still_sleep = scheduler.get_new_task(Task::Sleep);
    assert_eq!(still_sleep.kind(), TaskKind::Sleep);
}

/// No two outstanding tasks ever name the same trace unit: driving a single
/// worker's completion/dispatch chain forward, a trace id must never be
/// handed out again while it is still in flight (i.e. before its own
/// completion has been reported back).
#[test]
fn no_two_in_flight_tasks_share_a_trace_unit() {
    let (scheduler, _sink) = scheduler(2, Duration::from_secs(3600));

    let mut outstanding = std::collections::HashSet::new();
    let mut task = Task::Sleep;
    for _ in 0..30 {
        // `task` is about to be completed by this call; if it was a Trace
        // task, that unit is no longer in flight as of this call.
        if task.kind() == TaskKind::Trace {
            outstanding.remove(&task.primary_unit_id().unwrap());
        }

        task = scheduler.get_new_task(task);

        if task.kind() == TaskKind::Trace {
            let id = task.primary_unit_id().unwrap();
            assert!(
                outstanding.insert(id),
                "trace unit {id} dispatched while already in flight"
            );
        }
    }
}

/// Scenario 6: performance ring bound. Simulating many tonemap completions
/// (by racing the clock) keeps the performance window from growing without
/// bound; this is only observable indirectly through the sink still being
/// invoked sanely after hundreds of refreshes.
#[test]
fn many_tonemaps_keep_the_pipeline_live() {
    let (scheduler, sink) = scheduler(2, Duration::from_secs(0));

    let mut task = Task::Sleep;
    for _ in 0..2000 {
        task = scheduler.get_new_task(task);
    }

    assert!(sink.frames.load(Ordering::SeqCst) > 1);
}
