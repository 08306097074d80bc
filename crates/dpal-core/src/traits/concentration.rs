/// Source of the Dirichlet-Process concentration parameter.
///
/// A pool feeds `(number of categories, total count)` into the link on every
/// update that tracks concentration, and reads the current estimate whenever
/// a DP-aware strategy runs.
pub trait ConcentrationLink: Send {
    /// Refresh the estimate from the latest category statistics.
    fn update(&mut self, num_categories: usize, total_count: f64);

    /// Current concentration. Never negative.
    fn get(&self) -> f64;
}

/// A concentration that never changes. Updates are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedConcentration(f64);

impl FixedConcentration {
    /// Negative or non-finite values are stored as 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self(0.0)
        }
    }
}

impl Default for FixedConcentration {
    fn default() -> Self {
        Self(1.0)
    }
}

impl ConcentrationLink for FixedConcentration {
    fn update(&mut self, _num_categories: usize, _total_count: f64) {}

    fn get(&self) -> f64 {
        self.0
    }
}

impl<T: ConcentrationLink + ?Sized> ConcentrationLink for Box<T> {
    fn update(&mut self, num_categories: usize, total_count: f64) {
        (**self).update(num_categories, total_count);
    }

    fn get(&self) -> f64 {
        (**self).get()
    }
}
