mod ranking;
pub mod utils;
