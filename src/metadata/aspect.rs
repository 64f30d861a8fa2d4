//! Aspect ratio reduction for still images.

/// Reduce `width:height` to lowest terms, e.g. `1920, 1080` -> `"16:9"`.
///
/// Returns `None` when either side is not strictly positive.
pub fn reduce(width: i64, height: i64) -> Option<String> {
    if width <= 0 || height <= 0 {
        return None;
    }
    let divisor = gcd(width, height);
    Some(format!("{}:{}", width / divisor, height / divisor))
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
