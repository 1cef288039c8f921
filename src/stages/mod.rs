pub mod intake;
pub mod normalize;
pub mod quality;
pub mod routing;
pub mod summarize;

pub use intake::*;
pub use normalize::*;
pub use quality::*;
pub use routing::*;
pub use summarize::*;
