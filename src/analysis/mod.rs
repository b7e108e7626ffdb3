pub mod forecast;
pub mod format;
pub mod history;
pub mod report;
pub mod sentiment;

pub use forecast::*;
pub use history::*;
pub use report::*;
pub use sentiment::*;
