pub mod review;

pub use review::{review_page, ReviewVm};
