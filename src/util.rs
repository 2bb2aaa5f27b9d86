use chrono::Local;

/// Print a user-facing status line with a local timestamp.
///
/// Diagnostics go to stderr through tracing; these lines are the
/// program's actual output and stay on stdout.
pub fn print_status(msg: &str) {
    println!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), msg);
}
