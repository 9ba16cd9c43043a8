pub mod pickup_handler;

pub use pickup_handler::{__path_create_pickup, __path_list_pickups, create_pickup, list_pickups};
