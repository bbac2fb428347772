use std::sync::Mutex;

// Env vars are process-global; serialize access so parallel tests that
// touch them cannot race each other.
static ENV_GUARD: Mutex<()> = Mutex::new(());

/// Run `f` with environment variables temporarily set or removed.
///
/// Each `(key, value)` pair sets the variable to `value`, or removes it
/// when `value` is `None`. Previous values are restored afterwards even if
/// `f` panics.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_GUARD.lock().expect("ENV_GUARD poisoned");

    let restore = RestoreEnv {
        saved: changes
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect(),
    };

    for (key, value) in changes {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    let result = f();
    drop(restore);
    result
}

struct RestoreEnv {
    saved: Vec<(String, Option<String>)>,
}

impl Drop for RestoreEnv {
    fn drop(&mut self) {
        // Restore in reverse so a key listed twice ends up at its original
        // value.
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}
