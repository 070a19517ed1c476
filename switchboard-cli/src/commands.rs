//! Built-in commands for the switchboard console.
//!
//! Each command is a [`BoundCommand`] over a small options struct; the
//! dispatcher runs the first one whose required members the store can
//! satisfy.

use colored::Colorize;
use serde::Deserialize;
use tracing::debug;

use switchboard_core::prelude::*;

/// Options for the `greet` command (`switchboard -name "John Smith"`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GreetOptions {
    name: String,
    greeting: String,
    shout: bool,
    repeat: i64,
}

impl Bindable for GreetOptions {
    fn members() -> &'static [Member] {
        const MEMBERS: &[Member] = &[
            Member::required("name", ValueKind::String),
            Member::optional("greeting", ValueKind::String),
            Member::optional("shout", ValueKind::Bool),
            Member::optional("repeat", ValueKind::Integer),
        ];
        MEMBERS
    }
}

/// Options for the `echo` command (`switchboard --echo -x 1 2`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EchoOptions {
    echo: bool,
    upper: bool,
}

impl Bindable for EchoOptions {
    fn members() -> &'static [Member] {
        const MEMBERS: &[Member] = &[
            Member::required("echo", ValueKind::Bool),
            Member::optional("upper", ValueKind::Bool),
        ];
        MEMBERS
    }
}

/// Register the built-in commands on a dispatcher.
///
/// The echo command needs the store itself to re-serialize it, so it
/// captures an isolated clone; mutating that clone never affects the
/// store the dispatcher runs against.
pub fn register_all(dispatcher: &mut Dispatcher, params: &Parameters) {
    let echoed = params.clone();

    dispatcher.register(BoundCommand::<EchoOptions>::new(move |options| {
        let mut copy = echoed.clone();
        copy.remove("echo");
        copy.remove("upper");

        let line = copy.to_string();
        debug!(tokens = copy.len(), "echoing remaining parameters");

        if options.upper {
            println!("{}", line.to_uppercase());
        } else {
            println!("{}", line);
        }

        ExitCode::Success.into()
    }));

    dispatcher.register(BoundCommand::<GreetOptions>::new(|options| {
        let greeting = if options.greeting.is_empty() {
            "Hello"
        } else {
            &options.greeting
        };

        let mut line = format!("{}, {}!", greeting, options.name);
        if options.shout {
            line = line.to_uppercase();
        }

        // A zero or negative repeat still greets once
        for _ in 0..options.repeat.max(1) {
            println!("{}", line.green());
        }

        ExitCode::Success.into()
    }));
}
