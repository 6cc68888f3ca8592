pub mod daily;

pub use daily::{run, DailyReport};
