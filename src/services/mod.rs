//! Business logic services

pub mod reports;
pub mod seeder;

use crate::{config::SeedConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub seeder: seeder::SeederService,
    pub reports: reports::ReportService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, seed_config: SeedConfig) -> Self {
        Self {
            seeder: seeder::SeederService::new(repository.clone(), seed_config),
            reports: reports::ReportService::new(repository),
        }
    }
}
