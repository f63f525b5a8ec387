//! Condition checks that report failures to a pluggable fatal callback.
//!
//! An [`Assert`] routes failures to its [`FatalHandler`]. The process-wide
//! instance returned by [`global`] panics on failure until replaced with
//! [`set_global`]; the free functions in this module delegate to it.

use arc_swap::ArcSwap;
use std::fmt;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<ArcSwap<Assert>> =
    LazyLock::new(|| ArcSwap::from_pointee(Assert::with(PanicHandler)));

/// Receives the message of a failed check.
///
/// Implementations usually do not return (panic, abort, fail a test), but
/// returning is allowed; the check simply ends.
pub trait FatalHandler: Send + Sync {
    fn fatal(&self, message: &str);
}

/// Panics with the failure message.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicHandler;

impl FatalHandler for PanicHandler {
    fn fatal(&self, message: &str) {
        panic!("{}", message);
    }
}

/// Calls a closure with the failure message.
pub struct FuncHandler<F>(pub F);

impl<F> FatalHandler for FuncHandler<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn fatal(&self, message: &str) {
        (self.0)(message)
    }
}

#[derive(Clone)]
pub struct Assert {
    handler: Arc<dyn FatalHandler>,
}

impl Assert {
    pub fn with(handler: impl FatalHandler + 'static) -> Self {
        Assert {
            handler: Arc::new(handler),
        }
    }

    /// Fails with `"assert failed"` unless `condition` holds.
    pub fn is_true(&self, condition: bool) {
        self.is_true_with(condition, "assert failed");
    }

    /// Fails with `message` unless `condition` holds.
    pub fn is_true_with(&self, condition: bool, message: impl fmt::Display) {
        if !condition {
            self.handler.fatal(&message.to_string());
        }
    }

    pub fn is_none<T: fmt::Debug>(&self, value: &Option<T>) {
        if let Some(inner) = value {
            self.handler.fatal(&format!("expected None, got {:?}", inner));
        }
    }

    /// Fails with `message` if `value` is `Some`.
    pub fn is_none_with<T>(&self, value: &Option<T>, message: impl fmt::Display) {
        if value.is_some() {
            self.handler.fatal(&message.to_string());
        }
    }

    pub fn unreachable(&self) {
        self.handler.fatal("unreachable code reached");
    }
}

impl fmt::Debug for Assert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assert").finish_non_exhaustive()
    }
}

/// Current process-wide instance.
pub fn global() -> Arc<Assert> {
    GLOBAL.load_full()
}

/// Replace the process-wide instance. Checks already running keep the
/// instance they loaded.
pub fn set_global(assert: Assert) {
    GLOBAL.store(Arc::new(assert));
}

pub fn is_true(condition: bool) {
    global().is_true(condition);
}

pub fn is_true_with(condition: bool, message: impl fmt::Display) {
    global().is_true_with(condition, message);
}

pub fn is_none<T: fmt::Debug>(value: &Option<T>) {
    global().is_none(value);
}

pub fn is_none_with<T>(value: &Option<T>, message: impl fmt::Display) {
    global().is_none_with(value, message);
}

pub fn unreachable() {
    global().unreachable();
}
