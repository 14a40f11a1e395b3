//! Shorthand for the error paths the commands share.

/// `writeln!` inside a function returning an exit code: a closed stream
/// ends the function with [`crate::exit_code::ERROR`].
#[macro_export]
macro_rules! writeln_or_bail {
    ($dest:expr, $($arg:tt)*) => {
        match writeln!($dest, $($arg)*) {
            Ok(()) => {}
            Err(_) => return $crate::exit_code::ERROR,
        }
    };
}

/// Deserializes one JSONL line. A bad line is reported on `$err` and the
/// enclosing loop moves on to the next one.
///
/// ```ignore
/// let record: RoundRecord = record_or_skip!(line, err, "rounds.jsonl line 3");
/// ```
#[macro_export]
macro_rules! record_or_skip {
    ($line:expr, $err:expr, $location:expr) => {
        match serde_json::from_str($line) {
            Ok(record) => record,
            Err(e) => {
                let msg = format!("Skipping {}: {}", $location, e);
                let _ = $crate::ui::write_error($err, &msg);
                continue;
            }
        }
    };
}
