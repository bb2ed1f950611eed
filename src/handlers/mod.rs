pub mod health;
pub mod games;
pub mod achievements;
pub mod schema;

pub use health::health_handler;
pub use games::games_handler;
pub use achievements::achievements_handler;
pub use schema::{achievement_schema_handler, fetch_schema_handler};
