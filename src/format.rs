//! Compact number formatting for insight and recommendation text.

/// Format a USD amount compactly: `$1.34M`, `$247.0K`, `$156`.
pub fn format_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

/// Join names as "a", "a and b", or "a, b and c".
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}
