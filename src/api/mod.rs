pub mod common;
pub mod de;
pub mod decode;
pub mod error;
pub mod image;
pub mod search;
pub mod tags;
