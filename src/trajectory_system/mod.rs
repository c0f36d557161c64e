pub mod forces;
pub mod integrator;
pub mod spring;
