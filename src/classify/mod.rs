pub mod contact;
pub mod report;
pub mod station;
pub mod voter;

pub use contact::*;
pub use report::*;
pub use station::*;
pub use voter::*;
