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

use timberline::Attribute;
use timberline::Format;
use timberline::Level;
use timberline::Logger;
use timberline::append;
use timberline::trap::StderrTrap;

fn main() {
    let logger = Logger::builder()
        .min_level(Level::Fatal)
        .format(Format::new(
            "%@ %@ %@:%@ %@() %@",
            [
                Attribute::date("yyyy-MM-dd'T'HH:mm:ss.SSSZZZZZ"),
                Attribute::Level,
                Attribute::file_name(false, true),
                Attribute::Line,
                Attribute::Function,
                Attribute::Message,
            ],
        ))
        .separator(" ")
        .append(append::Stderr::default())
        .trap(StderrTrap::default())
        .build();

    timberline::error!(logger: logger; "dropped, below the global level");

    timberline::register_file!(logger: logger, Level::Error);
    timberline::error!(logger: logger; "written, this file is registered at", Level::Error);
    timberline::warn!(logger: logger; "dropped, below the file level");

    logger.set_enabled(false);
    timberline::error!(logger: logger; "still written while disabled");

    logger.flush();
}
