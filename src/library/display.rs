/// Name shown for a file: everything before the first `.`.
pub fn display_name(file_name: &str) -> &str {
    match file_name.split_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}

/// Format seconds as `m:ss`. Minutes are never folded into hours.
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}
