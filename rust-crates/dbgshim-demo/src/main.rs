// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Prints a few lines through the debug shim.
//!
//! Build with `--release` (or `--features force-disable`) to check that
//! nothing is printed and `--fail` no longer aborts.

use argh::FromArgs;
use dbgshim::Level;
use std::thread;
use std::time::Duration;

/// Exercise the dbgshim debug logger.
#[derive(FromArgs)]
struct Args {
    /// level of the message: debug, warning or error
    #[argh(option, default = "Level::Debug")]
    level: Level,

    /// keep a scope timer open for this many milliseconds
    #[argh(option, default = "0")]
    hold_ms: u64,

    /// log the message from this many threads at once
    #[argh(option, default = "1")]
    threads: usize,

    /// trigger the hard-fail assertion at the end
    #[argh(switch)]
    fail: bool,

    /// message to print
    #[argh(positional)]
    message: Vec<String>,
}

fn main() {
    let args: Args = argh::from_env();
    let message = if args.message.is_empty() {
        "hello from dbgshim".to_owned()
    } else {
        args.message.join(" ")
    };

    if !dbgshim::ENABLED {
        eprintln!("dbgshim is inert in this build; expect no output");
    }

    {
        let _timer = dbgshim::scope_timer!();
        broadcast(args.level, &message, args.threads.max(1));
        if args.hold_ms > 0 {
            thread::sleep(Duration::from_millis(args.hold_ms));
        }
    }

    dbgshim::debug!(?args.level);
    dbgshim::fail!(if args.fail, "requested with --fail");
}

fn broadcast(level: Level, message: &str, threads: usize) {
    thread::scope(|s| {
        for worker in 0..threads {
            s.spawn(move || dbgshim::log!(level, "[{worker}] {message}"));
        }
    });
}
