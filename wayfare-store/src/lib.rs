pub mod app_config;
pub mod memory_repo;
pub mod sky_scrapper;

pub use app_config::Config;
pub use memory_repo::MemoryStore;
pub use sky_scrapper::SkyScrapperClient;
