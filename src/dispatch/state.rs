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

use std::sync::Arc;
use std::thread::JoinHandle;

use arc_swap::ArcSwapOption;
use crossbeam_channel::Sender;

use crate::Error;
use crate::dispatch::Task;

#[derive(Debug)]
pub(crate) struct DispatchState(ArcSwapOption<State>);

#[derive(Debug)]
struct State {
    sender: Sender<Task>,
    handle: JoinHandle<()>,
}

impl DispatchState {
    pub(crate) fn new(sender: Sender<Task>, handle: JoinHandle<()>) -> Self {
        let state = State { sender, handle };
        Self(ArcSwapOption::from(Some(Arc::new(state))))
    }

    pub(crate) fn send_task(&self, task: Task) -> Result<(), Error> {
        let state = self.0.load();
        let Some(state) = state.as_ref() else {
            return Err(Error::new("log dispatch thread has been shut down"));
        };

        state.sender.send(task).map_err(|err| {
            Error::new(match err.0 {
                Task::Log { .. } => "failed to send log task to dispatch thread",
                Task::Flush { .. } => "failed to send flush task to dispatch thread",
            })
        })
    }

    pub(crate) fn destroy(&self) {
        if let Some(state) = self.0.swap(None) {
            let Some(State { sender, handle }) = Arc::into_inner(state) else {
                return;
            };

            // drop our sender, the worker breaks its loop once the queue is drained
            drop(sender);

            // wait for the thread to finish
            let _ = handle.join();
        }
    }
}

impl Drop for DispatchState {
    fn drop(&mut self) {
        self.destroy();
    }
}
