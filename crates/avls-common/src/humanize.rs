//! Human-readable renderings of byte counts and durations.

/// Binary prefixes tried in order before falling back to `Y`.
const SIZE_UNITS: &[&str] = &["", "K", "M", "G", "T", "P", "E", "Z"];

const SECONDS_PER_DAY: u64 = 86_400;

/// Format a byte count with 1024-based prefixes and one decimal place.
///
/// # Examples
///
/// ```
/// use avls_common::humanize::file_size;
///
/// assert_eq!(file_size(1023), "1023.0B");
/// assert_eq!(file_size(1024), "1.0KB");
/// assert_eq!(file_size(1_048_576), "1.0MB");
/// ```
pub fn file_size(bytes: u64) -> String {
    scaled_size(bytes as f64)
}

/// Scale `size` through [`SIZE_UNITS`], using `Y` once the table runs out.
///
/// A `u64` byte count tops out in the `E` range; wider inputs reach `Y`.
pub fn scaled_size(size: f64) -> String {
    let mut size = size;
    for unit in SIZE_UNITS {
        if size.abs() < 1024.0 {
            return format!("{size:3.1}{unit}B");
        }
        size /= 1024.0;
    }
    format!("{size:.1}YB")
}

/// Format a duration in seconds as `H:MM:SS`, truncated to whole seconds.
///
/// Durations of a day or longer are prefixed with the day count
/// (`1 day, 2:03:04`). Negative and non-finite inputs clamp to zero.
///
/// # Examples
///
/// ```
/// use avls_common::humanize::clock;
///
/// assert_eq!(clock(125.4), "0:02:05");
/// assert_eq!(clock(3600.0), "1:00:00");
/// ```
pub fn clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };

    let days = total / SECONDS_PER_DAY;
    let rest = total % SECONDS_PER_DAY;
    let hms = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => hms,
        1 => format!("1 day, {hms}"),
        n => format!("{n} days, {hms}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_size_below_one_kib() {
        assert_eq!(file_size(0), "0.0B");
        assert_eq!(file_size(5), "5.0B");
        assert_eq!(file_size(1023), "1023.0B");
    }

    #[test]
    fn test_file_size_unit_boundaries() {
        assert_eq!(file_size(1024), "1.0KB");
        assert_eq!(file_size(1536), "1.5KB");
        assert_eq!(file_size(1_048_576), "1.0MB");
        assert_eq!(file_size(1 << 30), "1.0GB");
        assert_eq!(file_size(1 << 40), "1.0TB");
        assert_eq!(file_size(1 << 50), "1.0PB");
        assert_eq!(file_size(1 << 60), "1.0EB");
    }

    #[test]
    fn test_file_size_largest_u64() {
        // u64::MAX is 16 EiB, still inside the table.
        assert_eq!(file_size(u64::MAX), "16.0EB");
    }

    #[test]
    fn test_scaled_size_past_the_table() {
        let zib = 1024f64.powi(7);
        assert_eq!(scaled_size(zib), "1.0ZB");
        assert_eq!(scaled_size(zib * 1024.0), "1.0YB");
        assert_eq!(scaled_size(zib * 1024.0 * 2048.0), "2048.0YB");
    }

    #[test]
    fn test_clock_truncates() {
        assert_eq!(clock(0.0), "0:00:00");
        assert_eq!(clock(59.999), "0:00:59");
        assert_eq!(clock(125.4), "0:02:05");
        assert_eq!(clock(3599.9), "0:59:59");
        assert_eq!(clock(36_000.0), "10:00:00");
    }

    #[test]
    fn test_clock_days() {
        assert_eq!(clock(86_400.0), "1 day, 0:00:00");
        assert_eq!(clock(90_061.0), "1 day, 1:01:01");
        assert_eq!(clock(2.0 * 86_400.0 + 5.0), "2 days, 0:00:05");
    }

    #[test]
    fn test_clock_degenerate_inputs() {
        assert_eq!(clock(-4.0), "0:00:00");
        assert_eq!(clock(f64::NAN), "0:00:00");
        assert_eq!(clock(f64::INFINITY), "0:00:00");
    }
}
