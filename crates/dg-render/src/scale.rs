//! Linear mapping from the time domain to pixels.

/// A linear scale mapping a domain interval onto a range interval.
///
/// Used vertically: minutes from the day origin map to y pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a domain value to its range position.
    ///
    /// A degenerate (zero-width) domain maps everything to the range start.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Maps a domain interval to its range extent (`map(b) - map(a)`).
    #[must_use]
    pub fn extent(&self, a: f64, b: f64) -> f64 {
        self.map(b) - self.map(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn maps_endpoints_to_range_endpoints() {
        let scale = LinearScale::new((0.0, 720.0), (0.0, 360.0));
        assert!(close(scale.map(0.0), 0.0));
        assert!(close(scale.map(720.0), 360.0));
    }

    #[test]
    fn maps_midpoints_linearly() {
        let scale = LinearScale::new((0.0, 720.0), (0.0, 360.0));
        assert!(close(scale.map(360.0), 180.0));
        assert!(close(scale.map(90.0), 45.0));
    }

    #[test]
    fn handles_nonzero_domain_origin() {
        let scale = LinearScale::new((60.0, 120.0), (0.0, 600.0));
        assert!(close(scale.map(60.0), 0.0));
        assert!(close(scale.map(90.0), 300.0));
    }

    #[test]
    fn extent_is_difference_of_mappings() {
        let scale = LinearScale::new((0.0, 720.0), (0.0, 720.0));
        assert!(close(scale.extent(30.0, 90.0), 60.0));
        assert!(close(scale.extent(90.0, 90.0), 0.0));
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert!(close(scale.map(5.0), 0.0));
        assert!(close(scale.map(400.0), 0.0));
    }
}
