//! Core state types for the N-body simulation.
//!
//! Defines the celestial `Body` record and the `System` that owns the
//! body collection together with its aggregate observables (kinetic and
//! potential energy, angular momentum).
//!
//! Units follow the astronomical convention throughout: mass in solar
//! masses, distance in AU, time in years.

use nalgebra::Vector3;

use crate::error::{Error, Result};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position [AU]
    pub v: NVec3, // velocity [AU/yr]
    pub force: NVec3, // per-step force accumulator, valid only right after a force evaluation
    pub m: f64, // mass [solar masses], positive, fixed at creation
}

/// The full simulation state: bodies in insertion order plus aggregate
/// scalars recomputed from scratch on every force evaluation.
///
/// Insertion order is the stable identity used for pairwise indexing.
/// Energies and angular momentum are valid only immediately after a
/// force evaluation; integrators that move bodies invalidate them.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, insertion order is stable
    pub t: f64, // current simulation time [yr]
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub angular_momentum: NVec3, // L = sum_i m_i * x_i x v_i
}

impl System {
    /// Empty system at t = 0.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
            kinetic_energy: 0.0,
            potential_energy: 0.0,
            angular_momentum: NVec3::zeros(),
        }
    }

    /// Append a new body and return a mutable reference to it.
    ///
    /// Rejects non-positive or non-finite masses. There is no removal
    /// operation; bodies live for the duration of the run.
    pub fn create_body(&mut self, x: NVec3, v: NVec3, m: f64) -> Result<&mut Body> {
        if !m.is_finite() || m <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "body mass must be positive and finite, got {m}"
            )));
        }
        self.bodies.push(Body {
            x,
            v,
            force: NVec3::zeros(),
            m,
        });
        // push above guarantees non-empty
        Ok(self.bodies.last_mut().unwrap())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Kinetic plus potential energy, valid only right after a force evaluation.
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_rejects_bad_mass() {
        let mut sys = System::new();
        assert!(sys.create_body(NVec3::zeros(), NVec3::zeros(), 0.0).is_err());
        assert!(sys.create_body(NVec3::zeros(), NVec3::zeros(), -1.0).is_err());
        assert!(sys
            .create_body(NVec3::zeros(), NVec3::zeros(), f64::NAN)
            .is_err());
        assert_eq!(sys.body_count(), 0);
    }

    #[test]
    fn create_body_appends_in_order() {
        let mut sys = System::new();
        sys.create_body(NVec3::new(1.0, 0.0, 0.0), NVec3::zeros(), 1.0)
            .unwrap();
        sys.create_body(NVec3::new(2.0, 0.0, 0.0), NVec3::zeros(), 2.0)
            .unwrap();
        assert_eq!(sys.body_count(), 2);
        assert_eq!(sys.bodies[0].m, 1.0);
        assert_eq!(sys.bodies[1].m, 2.0);
    }
}
