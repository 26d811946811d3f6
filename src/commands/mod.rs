pub mod config;
pub mod detect;
pub mod editors;
pub mod ignored;
pub mod list;
pub mod open;

pub use config::*;
pub use detect::*;
pub use editors::*;
pub use ignored::*;
pub use list::*;
pub use open::*;
