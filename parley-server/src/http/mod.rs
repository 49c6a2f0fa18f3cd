mod app;
mod handlers;

pub use app::*;
pub use handlers::*;
