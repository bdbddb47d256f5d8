//! Pairwise gravitational force and energy evaluation.
//!
//! Two force laws behind the [`Gravity`] trait: plain Newtonian gravity
//! and a relativistic-corrected variant used for perihelion-precession
//! runs. Both are direct O(n^2) all-pairs sums that overwrite every
//! body's force accumulator and the system's aggregate energies.
//!
//! In astronomical units (solar masses, AU, years) the gravitational
//! constant folds into 4 pi^2, so the pair force is
//! `F = -4 pi^2 * m_i * m_j / dr^3 * (x_i - x_j)`.

use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::simulation::states::{NVec3, System};

/// 4 pi^2: G * M_sun expressed in AU^3 / yr^2.
pub const FOUR_PI_SQ: f64 = 4.0 * PI * PI;

/// Speed of light in AU per year.
pub const SPEED_OF_LIGHT: f64 = 63239.7263;

/// A force law that evaluates all pairwise forces on a system.
///
/// Implementations overwrite every body's `force`, recompute
/// `kinetic_energy`, `potential_energy` and `angular_momentum` from
/// scratch, and fail on coincident bodies.
pub trait Gravity {
    fn compute(&self, sys: &mut System) -> Result<()>;
}

/// Plain Newtonian all-pairs gravity.
pub struct NewtonianGravity;

impl Gravity for NewtonianGravity {
    fn compute(&self, sys: &mut System) -> Result<()> {
        accumulate_pairwise(sys, None)
    }
}

/// Newtonian gravity with a first-order relativistic correction.
///
/// The pair force is scaled by `1 + 3 l^2 / (dr^2 c^2)` where
/// `l = |x_j x v_j|` is the specific angular momentum of body j about
/// the origin. The correction is deliberately asymmetric (body j only),
/// matching the sun-at-origin setup it was derived for; it is not
/// symmetrized between the pair.
pub struct RelativisticGravity {
    pub c: f64, // speed of light [AU/yr]
}

impl Default for RelativisticGravity {
    fn default() -> Self {
        Self { c: SPEED_OF_LIGHT }
    }
}

impl Gravity for RelativisticGravity {
    fn compute(&self, sys: &mut System) -> Result<()> {
        accumulate_pairwise(sys, Some(self.c))
    }
}

/// Shared all-pairs loop for both force laws.
///
/// Zeroes every force accumulator and the aggregate observables, then
/// walks each unordered pair (i, j) with i < j in stable body order,
/// applying strict action-reaction (`force_i += F`, `force_j -= F`).
/// Kinetic energy and angular momentum are accumulated once per body
/// after its inner pair loop completes.
fn accumulate_pairwise(sys: &mut System, rel_c: Option<f64>) -> Result<()> {
    sys.kinetic_energy = 0.0;
    sys.potential_energy = 0.0;
    sys.angular_momentum = NVec3::zeros();
    for body in sys.bodies.iter_mut() {
        body.force = NVec3::zeros();
    }

    let n = sys.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let delta = sys.bodies[i].x - sys.bodies[j].x;
            let dr = delta.norm();
            if dr == 0.0 {
                return Err(Error::DegenerateGeometry { i, j });
            }

            let mi = sys.bodies[i].m;
            let mj = sys.bodies[j].m;

            // F = -4 pi^2 m_i m_j / dr^3 * delta; the sign makes the
            // force on i point toward j (attraction), required for
            // stable closed orbits.
            let mut coef = -FOUR_PI_SQ * mi * mj / (dr * dr * dr);
            if let Some(c) = rel_c {
                let l = sys.bodies[j].x.cross(&sys.bodies[j].v).norm();
                coef *= 1.0 + 3.0 * l * l / (dr * dr * c * c);
            }

            let force = coef * delta;
            sys.bodies[i].force += force;
            sys.bodies[j].force -= force;

            sys.potential_energy += -FOUR_PI_SQ * mi * mj / dr;
        }

        let body = &sys.bodies[i];
        sys.kinetic_energy += 0.5 * body.m * body.v.norm_squared();
        sys.angular_momentum += body.m * body.x.cross(&body.v);
    }

    Ok(())
}

impl System {
    /// Evaluate Newtonian forces and energies for the current state.
    pub fn compute_forces(&mut self) -> Result<()> {
        NewtonianGravity.compute(self)
    }

    /// Evaluate relativistic-corrected forces and energies at the
    /// physical speed of light.
    pub fn compute_forces_relativistic(&mut self) -> Result<()> {
        RelativisticGravity::default().compute(self)
    }
}
