//! Domain clients: typed wrappers around each actor's `ResourceClient`.

pub mod roadmap_client;
pub mod user_client;

pub use roadmap_client::RoadmapClient;
pub use user_client::UserClient;
