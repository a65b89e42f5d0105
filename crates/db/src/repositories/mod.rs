pub mod breed_repo;

pub use breed_repo::BreedRepo;
