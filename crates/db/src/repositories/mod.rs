pub mod demand_repo;

pub use demand_repo::DemandRepo;
