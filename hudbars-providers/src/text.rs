//! Number formatting shared by the providers.

/// Abbreviates large numbers ("12.3K", "1.5M").
pub fn format_number(n: f64) -> String {
    let abs = n.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{n:.0}")
    }
}

/// Formats `current / max` with abbreviated numbers.
pub fn format_progress(current: f64, max: f64) -> String {
    format!("{} / {}", format_number(current), format_number(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(950.0), "950");
        assert_eq!(format_number(12_300.0), "12.3K");
        assert_eq!(format_number(1_500_000.0), "1.5M");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(50.0, 200.0), "50 / 200");
    }
}
