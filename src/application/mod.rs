// Application layer - Use cases over the vitals dataset
pub mod dashboard_service;
pub mod dataset_cache;
pub mod dispatch_service;
pub mod rescue_backend;
pub mod unit_service;
pub mod vitals_repository;
