mod contribution;

pub use contribution::{Contribution, TrackingState};
