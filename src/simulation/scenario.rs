//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a [`ScenarioConfig`] (YAML-facing) and produces the runtime
//! bundle consumed by the driver:
//! - numerical parameters ([`Parameters`])
//! - system state ([`System`] with bodies at t = 0)
//! - a ready [`Integrator`] with the method resolved
//! - the optional trajectory output path
//!
//! All scenario validation happens here: step size, total time, body
//! masses and vector dimensions are checked before any stepping starts.

use std::path::PathBuf;

use crate::configuration::config::{BodyConfig, MethodConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::integrator::{Integrator, Method};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, System};

/// A fully-initialized simulation run: parameters, initial system
/// state, integrator, and output destination.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub integrator: Integrator,
    pub trajectory: Option<PathBuf>,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        if !p_cfg.t_end.is_finite() || p_cfg.t_end < 0.0 {
            return Err(Error::InvalidParam(format!(
                "t_end must be non-negative and finite, got {}",
                p_cfg.t_end
            )));
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
        };

        let method = match cfg.engine.method {
            MethodConfig::Euler => Method::Euler,
            MethodConfig::Verlet => Method::Verlet,
            MethodConfig::VerletRelativistic => Method::VerletRelativistic,
        };
        // Integrator::new validates dt
        let integrator =
            Integrator::new(method, parameters.dt)?.with_per_body_reeval(cfg.engine.per_body_reeval);

        let mut system = System::new();
        for (idx, bc) in cfg.bodies.iter().enumerate() {
            let (x, v) = body_vectors(idx, bc)?;
            system.create_body(x, v, bc.m)?;
        }

        Ok(Self {
            parameters,
            system,
            integrator,
            trajectory: cfg.output.trajectory,
        })
    }
}

/// Map a body config's coordinate lists to vectors, rejecting anything
/// that is not exactly 3 components.
fn body_vectors(idx: usize, bc: &BodyConfig) -> Result<(NVec3, NVec3)> {
    if bc.x.len() != 3 || bc.v.len() != 3 {
        return Err(Error::InvalidParam(format!(
            "body {idx}: x and v must each have exactly 3 components, got {} and {}",
            bc.x.len(),
            bc.v.len()
        )));
    }
    Ok((
        NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
        NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> ScenarioConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    const BASE_YAML: &str = r#"
engine:
  method: "Euler"
parameters:
  t_end: 1.0
  dt: 0.01
bodies:
  - x: [0.0, 0.0, 0.0]
    v: [0.0, 0.0, 0.0]
    m: 1.0
"#;

    #[test]
    fn builds_valid_scenario() {
        let scenario = Scenario::build(parse(BASE_YAML)).unwrap();
        assert_eq!(scenario.system.body_count(), 1);
        assert_eq!(scenario.parameters.steps(), 100);
        assert_eq!(scenario.integrator.method(), Method::Euler);
        assert!(scenario.trajectory.is_none());
    }

    #[test]
    fn rejects_nonpositive_mass() {
        let yaml = BASE_YAML.replace("m: 1.0", "m: -1.0");
        assert!(Scenario::build(parse(&yaml)).is_err());
    }

    #[test]
    fn rejects_bad_vector_length() {
        let yaml = BASE_YAML.replace("x: [0.0, 0.0, 0.0]", "x: [0.0, 0.0]");
        assert!(Scenario::build(parse(&yaml)).is_err());
    }

    #[test]
    fn rejects_bad_dt() {
        let yaml = BASE_YAML.replace("dt: 0.01", "dt: 0.0");
        assert!(Scenario::build(parse(&yaml)).is_err());
    }
}
