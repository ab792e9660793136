pub mod config;
pub mod error;
pub mod requests;
pub mod requirements;

pub use config::*;
pub use error::*;
pub use requests::*;
pub use requirements::*;
