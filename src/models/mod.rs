pub mod analysis;
pub mod intake;
pub mod scores;
pub mod summary;
pub mod transcript;

pub use analysis::*;
pub use intake::*;
pub use scores::*;
pub use summary::*;
pub use transcript::*;
