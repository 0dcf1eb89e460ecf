pub mod descriptor;
pub mod settings;

pub use descriptor::*;
pub use settings::*;
