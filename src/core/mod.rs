pub mod logging;
pub mod personality;
