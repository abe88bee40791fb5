pub mod cluster_mocks;
pub mod objects;
