/*
 * Particle Web Simulation - Module Definitions
 *
 * This file defines the module structure for the particle web application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use particle::ParticleField;
pub use links::LinkGeometry;
pub use camera::Camera;
pub use params::SimulationParams;
pub use debug::DebugInfo;
pub use app::{FieldPhase, Model};

// Define modules
pub mod particle;
pub mod physics;
pub mod links;
pub mod camera;
pub mod params;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const MAX_PARTICLES: usize = 1000;
pub const DOMAIN_SIZE: f32 = 800.0;
pub const POINT_SIZE: f32 = 3.0;
