pub mod catalogue;
pub mod discovery;
pub mod quality;
