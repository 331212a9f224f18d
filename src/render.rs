//! Header text generation.
//!
//! Output layout (LF newlines):
//!
//! ```text
//! #ifndef INC_K_CONFIG_H_
//! #define INC_K_CONFIG_H_
//!
//! #define KVERSION "0.1.0"
//!
//! extern STACK Thread_0[128];
//! extern STACK Thread_1[128];
//!
//! #endif /* INC_K_CONFIG_H_ */
//! ```
//!
//! Only the version and the thread stacks are emitted. Scheduler,
//! communication, synchronization and trace options are validated by the
//! model but do not appear in the header.

use crate::config::INCLUDE_GUARD;
use crate::error::PreconditionError;
use crate::model::{ConfigModel, ThreadEntry};

/// Render the header for `model`.
///
/// Fails with [`PreconditionError`] when [`ConfigModel::validate`] reports
/// any violation.
pub fn render(model: &ConfigModel) -> Result<String, PreconditionError> {
    let violations = model.validate();
    if !violations.is_empty() {
        return Err(PreconditionError { violations });
    }
    Ok(render_header(model.kernel_version(), model.threads()))
}

/// One `extern STACK NAME[SIZE];` line per thread, newline-separated,
/// without a trailing newline. Empty for an empty table.
pub fn extern_block(threads: &[ThreadEntry]) -> String {
    threads
        .iter()
        .map(|t| format!("extern STACK {}[{}];", t.name, t.stack_size))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_header(version: &str, threads: &[ThreadEntry]) -> String {
    let mut out = String::with_capacity(128 + threads.len() * 32);
    out.push_str(&format!("#ifndef {}\n", INCLUDE_GUARD));
    out.push_str(&format!("#define {}\n\n", INCLUDE_GUARD));
    out.push_str(&format!("#define KVERSION \"{}\"\n\n", version));
    if !threads.is_empty() {
        out.push_str(&extern_block(threads));
        out.push_str("\n\n");
    }
    out.push_str(&format!("#endif /* {} */\n", INCLUDE_GUARD));
    out
}
