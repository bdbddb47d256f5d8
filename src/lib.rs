pub mod simulation;
pub mod configuration;
pub mod output;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::forces::{
    Gravity, NewtonianGravity, RelativisticGravity, FOUR_PI_SQ, SPEED_OF_LIGHT,
};
pub use simulation::integrator::{Integrator, Method};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, EngineConfig, MethodConfig, OutputConfig, ParametersConfig, ScenarioConfig,
};

pub use output::trajectory::{TrajectoryWriter, FRAME_COMMENT};

pub use error::{Error, Result};
