use libc::{signal, SIGINT, SIGQUIT, SIG_DFL};

/// Give a freshly forked child the default interrupt behaviour.
///
/// Must only be called in the child, between `fork` and `exec`.
pub fn restore_default_handlers() {
    // SAFETY: resetting dispositions to SIG_DFL installs no Rust code as a handler.
    unsafe {
        signal(SIGINT, SIG_DFL);
        signal(SIGQUIT, SIG_DFL);
    }
}
