mod pickup_service;

pub use pickup_service::PickupService;
