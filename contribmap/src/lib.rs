pub mod config;
pub mod server;

// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{describe_resolution, handle_render, handle_resolve, handle_serve};
pub use server::{AppState, HeatmapQuery, build_heatmap, parse_refresh_flag, router, select_repo};
