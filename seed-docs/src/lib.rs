pub mod config;
pub mod content;
pub mod error;
pub mod generate;
pub mod render;

pub use config::Config;
pub use content::{Block, SeedDocument};
pub use error::{Result, SeedError};
pub use generate::{generate, generate_all, GeneratedFile};
pub use render::{render, render_to, RenderOptions};
