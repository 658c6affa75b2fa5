// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The serial lane that renders and writes admitted records.
//!
//! Records are queued on a single FIFO channel drained by one worker thread, so lines reach the
//! append in the order they were submitted, whatever the rendering cost.

use std::fmt;
use std::sync::Arc;

use jiff::tz::TimeZone;

use crate::Error;
use crate::Format;
use crate::Formatter;
use crate::Record;
use crate::Trap;
use crate::append::Append;

use self::state::DispatchState;
use self::worker::Worker;

mod state;
mod worker;

/// The logger settings a record is rendered and written with, captured when it is submitted.
#[derive(Clone)]
pub(crate) struct Snapshot {
    pub(crate) format: Arc<Format>,
    pub(crate) terminator: Arc<String>,
    pub(crate) append: Arc<Box<dyn Append>>,
    pub(crate) timezone: TimeZone,
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("format", &self.format)
            .field("terminator", &self.terminator)
            .field("append", &self.append)
            .finish_non_exhaustive()
    }
}

impl Snapshot {
    fn write(&self, record: &Record) -> Result<(), Error> {
        let line = Formatter::new(&self.format, record, &self.terminator)
            .timezone(self.timezone.clone())
            .render();
        self.append.append(line.as_bytes())
    }
}

pub(crate) enum Task {
    Log {
        record: Box<Record>,
        snapshot: Snapshot,
    },
    Flush {
        append: Arc<Box<dyn Append>>,
        done: crossbeam_channel::Sender<()>,
    },
}

#[derive(Debug)]
pub(crate) struct Dispatcher {
    // `None` if the worker thread could not be spawned, in which case records are written inline
    state: Option<DispatchState>,
    trap: Arc<dyn Trap>,
}

impl Dispatcher {
    pub(crate) fn new(thread_name: String, trap: Arc<dyn Trap>) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();

        let worker = Worker::new(receiver, trap.clone());
        let state = match std::thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || worker.run())
        {
            Ok(handle) => Some(DispatchState::new(sender, handle)),
            Err(err) => {
                let err = Error::new("failed to spawn log dispatch thread")
                    .with_context("thread", thread_name)
                    .with_source(err);
                trap.trap(&err);
                None
            }
        };

        Self { state, trap }
    }

    /// Queue a record for the worker. Return immediately.
    pub(crate) fn submit(&self, record: Record, snapshot: Snapshot) {
        let Some(state) = &self.state else {
            return self.execute(record, snapshot);
        };

        let task = Task::Log {
            record: Box::new(record),
            snapshot,
        };
        if let Err(err) = state.send_task(task) {
            self.trap.trap(&err);
        }
    }

    /// Render and write a record on the calling thread.
    pub(crate) fn execute(&self, record: Record, snapshot: Snapshot) {
        if let Err(err) = snapshot.write(&record) {
            let err = Error::new("failed to write log line").with_source(err);
            self.trap.trap(&err);
        }
    }

    /// Wait until every record submitted so far is written, then flush `append`.
    pub(crate) fn flush(&self, append: Arc<Box<dyn Append>>) {
        if let Some(state) = &self.state {
            let (done, finished) = crossbeam_channel::bounded(1);
            match state.send_task(Task::Flush { append, done }) {
                // the worker drops `done` without sending if it exits early
                Ok(()) => {
                    let _ = finished.recv();
                }
                Err(err) => self.trap.trap(&err),
            }
            return;
        }

        if let Err(err) = append.flush() {
            let err = Error::new("failed to flush").with_source(err);
            self.trap.trap(&err);
        }
    }
}
