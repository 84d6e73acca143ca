//! Local search over line plans.
//!
//! - [`HillClimber`] — strict-ascent hill climbing with a pluggable
//!   [`RouteGenerator`](crate::generators::RouteGenerator)
//! - [`hill_climb`] — random walk replacements
//! - [`depth_climb`] — enumerated route replacements between random
//!   station pairs

mod hill_climber;

pub use hill_climber::{
    depth_climb, hill_climb, AcceptedStep, ClimbResult, ClimberConfig, HillClimber, SweepResult,
};
