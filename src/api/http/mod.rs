// src/api/http/mod.rs

mod debate;
mod handlers;
mod router;

pub use debate::{debate_stream, start_debate};
pub use handlers::{health_handler, root_handler};
pub use router::api_router;
