//! Numerical parameters for a simulation run.

/// Runtime settings: total simulated time and the fixed step size.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total simulated time [yr]
    pub dt: f64,    // fixed step size [yr]
}

impl Parameters {
    /// Number of fixed steps covering `t_end`, rounded to the nearest
    /// whole step.
    pub fn steps(&self) -> usize {
        (self.t_end / self.dt).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_rounds() {
        let p = Parameters { t_end: 1.0, dt: 0.001 };
        assert_eq!(p.steps(), 1000);
        let p = Parameters { t_end: 0.9999, dt: 0.001 };
        assert_eq!(p.steps(), 1000);
    }
}
