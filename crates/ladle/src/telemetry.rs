// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Structured logging for adapter activity.
//!
//! Every event carries the constant message `loader.event` plus
//! `loader.operation` and `loader.activity` fields, so log pipelines can
//! filter without parsing. Emitting never alters control flow; results and
//! completions pass through the adapters exactly as they would without the
//! `logs` feature.

use ladle_loader::Result;

/// The loader operation being translated.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Operation {
    Load,
    Reload,
    AsyncLoad,
    AsyncReload,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Reload => "reload",
            Self::AsyncLoad => "async_load",
            Self::AsyncReload => "async_reload",
        }
    }
}

fn emit(operation: Operation, activity: &'static str, failed: bool) {
    let op = operation.as_str();

    // Tracing level must be constant, so a macro selects it.
    macro_rules! emit_event {
        ($level:ident) => {
            tracing::$level!(loader.operation = op, loader.activity = activity, "loader.event")
        };
    }

    if failed {
        emit_event!(error);
    } else {
        emit_event!(debug);
    }
}

/// Records that a wrapped function was invoked.
pub(crate) fn invoked(operation: Operation) {
    emit(operation, "invoked", false);
}

/// Records that a reload fell back to the contract's default policy.
pub(crate) fn fallback(operation: Operation) {
    emit(operation, "fallback", false);
}

/// Records the outcome of a synchronous invocation.
pub(crate) fn outcome<V>(operation: Operation, result: &Result<V>) {
    match result {
        Ok(_) => emit(operation, "invoked", false),
        Err(_) => emit(operation, "failed", true),
    }
}
