// Domain layer: survey models and the job-board port. No HTTP here.

pub mod model;
pub mod ports;
