//! Uniform sampling of a function into a polyline.

use crate::constants::{CURVE_STEPS, CURVE_Y_MARGIN};
use crate::viewport::ViewportConfig;

/// Lazy iterator over `(x, f(x))` pairs at uniform spacing on `[start, end]`.
///
/// Yields `steps + 1` candidates; those whose `y` falls outside the visible
/// band (with a margin of one unit) are skipped, so the emitted polyline can
/// jump over a region. Cloning before iteration gives an independent pass.
#[derive(Clone, Debug)]
pub struct CurveSampler<F> {
    func: F,
    start: f64,
    end: f64,
    steps: usize,
    y_lo: f64,
    y_hi: f64,
    i: usize,
}

impl<F: Fn(f64) -> f64> CurveSampler<F> {
    pub fn new(func: F, start: f64, end: f64, viewport: &ViewportConfig) -> Self {
        Self::with_steps(func, start, end, CURVE_STEPS, viewport)
    }

    pub fn with_steps(
        func: F,
        start: f64,
        end: f64,
        steps: usize,
        viewport: &ViewportConfig,
    ) -> Self {
        Self {
            func,
            start,
            end,
            steps: steps.max(1),
            y_lo: viewport.y_min - CURVE_Y_MARGIN,
            y_hi: viewport.y_max + CURVE_Y_MARGIN,
            i: 0,
        }
    }
}

impl<F: Fn(f64) -> f64> Iterator for CurveSampler<F> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i <= self.steps {
            let i = self.i;
            self.i += 1;
            let x = self.start + (i as f64 / self.steps as f64) * (self.end - self.start);
            let y = (self.func)(x);
            if y >= self.y_lo && y <= self.y_hi {
                return Some((x, y));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.steps + 1).saturating_sub(self.i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::f;

    #[test]
    fn emits_inclusive_endpoints_when_visible() {
        let vp = ViewportConfig::default();
        let pts: Vec<_> = CurveSampler::with_steps(f, 0.0, 3.0, 3, &vp).collect();
        assert_eq!(pts, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]);
    }

    #[test]
    fn drops_points_above_the_band() {
        let vp = ViewportConfig::default();
        // y limit is 11, so x beyond sqrt(11) ~ 3.317 is dropped
        let pts: Vec<_> = CurveSampler::new(f, -1.0, 5.0, &vp).collect();
        assert!(pts.len() < CURVE_STEPS + 1);
        assert!(pts.iter().all(|&(_, y)| y <= 11.0));
        assert_eq!(pts.first().copied(), Some((-1.0, 1.0)));
        let last_x = pts.last().map(|p| p.0).unwrap_or_default();
        assert!(last_x < 11f64.sqrt() && last_x > 3.2);
    }

    #[test]
    fn clone_restarts_from_the_beginning() {
        let vp = ViewportConfig::default();
        let sampler = CurveSampler::with_steps(f, 0.0, 1.0, 10, &vp);
        let first: Vec<_> = sampler.clone().collect();
        let second: Vec<_> = sampler.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 11);
    }
}
