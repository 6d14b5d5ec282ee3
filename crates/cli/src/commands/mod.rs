pub mod catalog;
pub mod icons;
pub mod manifests;
pub mod util;

pub use catalog::*;
pub use icons::*;
pub use manifests::*;
pub use util::*;
