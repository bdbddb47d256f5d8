//! Fixed-step time integrators for the N-body system.
//!
//! Provides forward Euler and velocity-Verlet, plus a Verlet variant
//! that evaluates the relativistic-corrected force law. The method is
//! resolved once at construction into the closed [`Method`] enum;
//! unrecognized method names fail there instead of silently stepping
//! as a no-op.

use crate::error::{Error, Result};
use crate::simulation::forces::{Gravity, NewtonianGravity, RelativisticGravity};
use crate::simulation::states::{NVec3, System};

/// Closed set of integration methods, selected once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Euler,
    Verlet,
    VerletRelativistic,
}

impl Method {
    /// Resolve a method name to its enum variant.
    ///
    /// Accepts the historical spellings `"Euler"`, `"Verlet"` and
    /// `"VerletREL"`; anything else is an [`Error::UnknownMethod`].
    pub fn from_name(name: &str) -> Result<Method> {
        match name {
            "Euler" => Ok(Method::Euler),
            "Verlet" => Ok(Method::Verlet),
            "VerletREL" => Ok(Method::VerletRelativistic),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }
}

/// Advances a [`System`] by one fixed time step per [`step`](Integrator::step) call.
///
/// Holds the step size, the resolved method and the force law it
/// implies; all physical state lives in the system. The integrator
/// borrows the system mutably for the duration of one step only.
pub struct Integrator {
    dt: f64, // fixed step size [yr]
    method: Method,
    per_body_reeval: bool, // legacy Verlet compatibility mode
    gravity: Box<dyn Gravity + Send + Sync>,
}

impl Integrator {
    /// Build an integrator for `method` with fixed step `dt > 0`.
    ///
    /// The force law is fixed here: relativistic for
    /// [`Method::VerletRelativistic`], Newtonian otherwise.
    pub fn new(method: Method, dt: f64) -> Result<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "time step must be positive and finite, got {dt}"
            )));
        }
        let gravity: Box<dyn Gravity + Send + Sync> = match method {
            Method::VerletRelativistic => Box::new(RelativisticGravity::default()),
            Method::Euler | Method::Verlet => Box::new(NewtonianGravity),
        };
        Ok(Self {
            dt,
            method,
            per_body_reeval: false,
            gravity,
        })
    }

    /// Enable the legacy Verlet behavior that re-evaluates the whole
    /// system's forces after each individual body's position update
    /// (n full O(n^2) passes per step). Off by default; the default
    /// Verlet re-evaluates once after all positions are updated.
    pub fn with_per_body_reeval(mut self, on: bool) -> Self {
        self.per_body_reeval = on;
        self
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Advance the system by one time step.
    pub fn step(&self, sys: &mut System) -> Result<()> {
        if !sys.bodies.is_empty() {
            match self.method {
                Method::Euler => self.euler(sys)?,
                Method::Verlet | Method::VerletRelativistic => {
                    if self.per_body_reeval {
                        self.verlet_per_body(sys)?;
                    } else {
                        self.verlet(sys)?;
                    }
                }
            }
        }
        sys.t += self.dt;
        Ok(())
    }

    /// Forward Euler: one force evaluation from the pre-update
    /// positions, then x += v h and v += (f/m) h per body.
    fn euler(&self, sys: &mut System) -> Result<()> {
        self.gravity.compute(sys)?;
        let h = self.dt;
        for b in sys.bodies.iter_mut() {
            b.x += b.v * h;
            b.v += b.force / b.m * h;
        }
        Ok(())
    }

    /// Velocity Verlet with a single force re-evaluation after the
    /// full position update:
    ///   a1 = f(x_n)/m
    ///   x_n+1 = x_n + v_n h + 0.5 a1 h^2
    ///   v_n+1 = v_n + 0.5 (a1 + f(x_n+1)/m) h
    fn verlet(&self, sys: &mut System) -> Result<()> {
        let h = self.dt;

        self.gravity.compute(sys)?;
        let a_old: Vec<NVec3> = sys.bodies.iter().map(|b| b.force / b.m).collect();

        for (b, a1) in sys.bodies.iter_mut().zip(a_old.iter()) {
            b.x += b.v * h + 0.5 * *a1 * h * h;
        }

        self.gravity.compute(sys)?;

        for (b, a1) in sys.bodies.iter_mut().zip(a_old.iter()) {
            b.v += 0.5 * (*a1 + b.force / b.m) * h;
        }
        Ok(())
    }

    /// Legacy velocity Verlet: after moving each individual body, the
    /// whole system's forces are re-evaluated before that body's
    /// velocity update, so later bodies see partially-updated
    /// positions. Kept for compatibility with existing runs.
    fn verlet_per_body(&self, sys: &mut System) -> Result<()> {
        let h = self.dt;

        self.gravity.compute(sys)?;
        for i in 0..sys.bodies.len() {
            let a1 = sys.bodies[i].force / sys.bodies[i].m;
            let v = sys.bodies[i].v;
            sys.bodies[i].x += v * h + 0.5 * a1 * h * h;

            self.gravity.compute(sys)?;

            let a2 = sys.bodies[i].force / sys.bodies[i].m;
            sys.bodies[i].v += 0.5 * (a1 + a2) * h;
        }
        Ok(())
    }
}
