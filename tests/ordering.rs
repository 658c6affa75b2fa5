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

use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use timberline::Attribute;
use timberline::Format;
use timberline::Level;
use timberline::Logger;
use timberline::append::Writer;

#[derive(Debug, Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).lines().map(str::to_owned).collect()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // write in small pieces so that interleaving would show
        let mut inner = self.0.lock().unwrap();
        let n = buf.len().min(3);
        inner.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn message_logger(buffer: &SharedBuffer) -> Logger {
    Logger::builder()
        .min_level(Level::Debug)
        .format(Format::new("%@", [Attribute::Message]))
        .append(Writer::new(buffer.clone()))
        .build()
}

#[test]
fn test_records_keep_submission_order() {
    let buffer = SharedBuffer::default();
    let logger = message_logger(&buffer);

    timberline::info!(logger: logger; "a");
    timberline::info!(logger: logger; "b");
    timberline::info!(logger: logger; "c");
    logger.flush();

    assert_eq!(buffer.lines(), ["a", "b", "c"]);
}

#[test]
fn test_records_from_one_thread_stay_ordered() {
    let buffer = SharedBuffer::default();
    let logger = message_logger(&buffer);

    for i in 0..1000 {
        timberline::debug!(logger: logger; i);
    }
    logger.flush();

    let expected: Vec<String> = (0..1000).map(|i| i.to_string()).collect();
    assert_eq!(buffer.lines(), expected);
}

#[test]
fn test_concurrent_records_never_interleave() {
    const THREADS: usize = 8;
    const RECORDS: usize = 200;

    let buffer = SharedBuffer::default();
    let logger = Arc::new(message_logger(&buffer));
    logger.set_separator("-");

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..RECORDS {
                    timberline::info!(logger: logger; "thread", t, "record", i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    logger.flush();

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * RECORDS);

    // every line is intact, and each thread's lines appear in its own order
    let mut next = [0; THREADS];
    for line in &lines {
        let parts: Vec<&str> = line.split('-').collect();
        assert_eq!(parts.len(), 4, "{line}");
        assert_eq!(parts[0], "thread");
        assert_eq!(parts[2], "record");
        let t: usize = parts[1].parse().unwrap();
        let i: usize = parts[3].parse().unwrap();
        assert_eq!(i, next[t]);
        next[t] += 1;
    }
    assert_eq!(next, [RECORDS; THREADS]);
}

#[test]
fn test_dropping_the_logger_drains_pending_records() {
    let buffer = SharedBuffer::default();
    let logger = message_logger(&buffer);

    for i in 0..100 {
        timberline::info!(logger: logger; i);
    }
    drop(logger);

    assert_eq!(buffer.lines().len(), 100);
}
