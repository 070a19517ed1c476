//! Command dispatch over bound options.
//!
//! A [`Command`] decides whether it can run against a parameter store and,
//! when it can, produces a process exit code. [`BoundCommand`] is the
//! standard implementation: it binds the store onto a typed options struct
//! on every `can_execute` call and hands the bound options to a handler.
//! The [`Dispatcher`] runs the first registered command that accepts the
//! store.

use crate::binder::{bind, Bindable};
use crate::params::Parameters;

/// Conventional process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Zero, the only code that means success
    Success,
    /// The conventional catch-all failure code (-1)
    GeneralError,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        match code {
            ExitCode::Success => 0,
            ExitCode::GeneralError => -1,
        }
    }
}

/// Core interface for all commands.
pub trait Command {
    /// Whether this command can execute against the given parameters.
    ///
    /// Implementations are expected to (re)bind their options here; the
    /// result of the most recent call decides what `execute` runs with.
    fn can_execute(&mut self, params: &Parameters) -> bool;

    /// Execute with the options bound by the last `can_execute` call and
    /// return a process exit code.
    ///
    /// Callers must call `can_execute` first in the same cycle. Executing
    /// a command that never bound returns the general error code.
    fn execute(&mut self, params: &Parameters) -> i32;
}

/// A command bound to typed options (e.g. `program -parameter value`).
///
/// Options are rebound from scratch on every `can_execute` call, so a
/// store that changes between calls changes what `execute` sees.
pub struct BoundCommand<T: Bindable> {
    options: Option<T>,
    handler: Box<dyn FnMut(&T) -> i32>,
}

impl<T: Bindable> BoundCommand<T> {
    pub fn new(handler: impl FnMut(&T) -> i32 + 'static) -> Self {
        Self {
            options: None,
            handler: Box::new(handler),
        }
    }
}

impl<T: Bindable> Command for BoundCommand<T> {
    fn can_execute(&mut self, params: &Parameters) -> bool {
        self.options = bind::<T>(params).ok();

        self.options.is_some()
    }

    fn execute(&mut self, _params: &Parameters) -> i32 {
        match &self.options {
            Some(options) => (self.handler)(options),
            None => ExitCode::GeneralError.into(),
        }
    }
}

/// Ordered command list that executes the first command accepting the
/// store.
#[derive(Default)]
pub struct Dispatcher {
    commands: Vec<Box<dyn Command>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command. Registration order is dispatch order.
    pub fn register(&mut self, command: impl Command + 'static) {
        self.commands.push(Box::new(command));
    }

    /// Run the first command whose `can_execute` accepts the parameters.
    ///
    /// Returns the command's exit code, or the general error code when no
    /// registered command accepts the store.
    pub fn run(&mut self, params: &Parameters) -> i32 {
        for command in &mut self.commands {
            if command.can_execute(params) {
                return command.execute(params);
            }
        }

        ExitCode::GeneralError.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{Member, ValueKind};
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct PingOptions {
        target: String,
        count: i64,
    }

    impl Bindable for PingOptions {
        fn members() -> &'static [Member] {
            const MEMBERS: &[Member] = &[
                Member::required("target", ValueKind::String),
                Member::optional("count", ValueKind::Integer),
            ];
            MEMBERS
        }
    }

    #[test]
    fn exit_codes_convert_to_i32() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::GeneralError), -1);
    }

    #[test]
    fn can_execute_binds_options() {
        let mut command = BoundCommand::<PingOptions>::new(|opts| opts.count as i32);
        let params = Parameters::parse("-target host -count 4");

        assert!(command.can_execute(&params));
        assert_eq!(command.execute(&params), 4);
    }

    #[test]
    fn can_execute_rejects_unbindable_store() {
        let mut command = BoundCommand::<PingOptions>::new(|_| 0);
        let params = Parameters::parse("-count 4");

        assert!(!command.can_execute(&params));
    }

    #[test]
    fn execute_without_bind_returns_general_error() {
        let mut command = BoundCommand::<PingOptions>::new(|_| 0);
        let params = Parameters::parse("-target host");

        assert_eq!(command.execute(&params), i32::from(ExitCode::GeneralError));
    }

    #[test]
    fn options_are_rebound_on_every_can_execute() {
        let mut command = BoundCommand::<PingOptions>::new(|opts| opts.count as i32);

        let first = Parameters::parse("-target host -count 1");
        assert!(command.can_execute(&first));
        assert_eq!(command.execute(&first), 1);

        let second = Parameters::parse("-target host -count 2");
        assert!(command.can_execute(&second));
        assert_eq!(command.execute(&second), 2);
    }

    #[test]
    fn rejected_bind_clears_previous_options() {
        let mut command = BoundCommand::<PingOptions>::new(|_| 0);

        let good = Parameters::parse("-target host");
        assert!(command.can_execute(&good));

        let bad = Parameters::parse("-count 4");
        assert!(!command.can_execute(&bad));
        assert_eq!(command.execute(&bad), i32::from(ExitCode::GeneralError));
    }

    #[test]
    fn dispatcher_runs_first_accepting_command() {
        #[derive(Debug, Default, Deserialize)]
        #[serde(default)]
        struct OtherOptions {
            other: String,
        }

        impl Bindable for OtherOptions {
            fn members() -> &'static [Member] {
                const MEMBERS: &[Member] = &[Member::required("other", ValueKind::String)];
                MEMBERS
            }
        }

        let mut dispatcher = Dispatcher::new();
        dispatcher.register(BoundCommand::<OtherOptions>::new(|_| 10));
        dispatcher.register(BoundCommand::<PingOptions>::new(|_| 20));

        let params = Parameters::parse("-target host");
        assert_eq!(dispatcher.run(&params), 20);

        let params = Parameters::parse("-other x");
        assert_eq!(dispatcher.run(&params), 10);
    }

    #[test]
    fn dispatcher_returns_general_error_when_nothing_matches() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(BoundCommand::<PingOptions>::new(|_| 0));

        let params = Parameters::parse("--unknown");
        assert_eq!(dispatcher.run(&params), i32::from(ExitCode::GeneralError));
    }
}
