//! Dashboard screen: state, renderer, and components

pub mod components;
pub mod renderer;
pub mod state;

pub use renderer::render_dashboard;
pub use state::DashboardState;
