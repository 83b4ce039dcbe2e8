/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took, and evaluates to the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of hexes within `radius` steps of a center hex,
/// including the center itself. Radius 0 means 1 hex, 1 is 7 hexes, 2 is 19,
/// etc.
pub fn hex_count(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_count() {
        assert_eq!(hex_count(0), 1);
        assert_eq!(hex_count(1), 7);
        assert_eq!(hex_count(2), 19);
        assert_eq!(hex_count(3), 37);
    }

    #[test]
    fn test_timed_returns_value() {
        let value = timed!("addition", log::Level::Trace, 2 + 2);
        assert_eq!(value, 4);
    }
}
