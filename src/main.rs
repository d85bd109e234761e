// Copyright 2026 The kidquiz Authors
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

mod cli;
mod cmd;
mod settings;
mod utils;

use std::process::exit;

use crate::cli::entrypoint;

fn main() {
    env_logger::init();
    match entrypoint() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("kidquiz: {e}");
            exit(-1);
        }
    }
}
