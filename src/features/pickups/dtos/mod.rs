mod pickup_dto;

pub use pickup_dto::{CreatePickupDto, PickupResponseDto};
