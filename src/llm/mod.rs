pub mod client;
pub mod decode;
pub mod prompts;
#[cfg(test)]
pub mod testing;

pub use client::*;
pub use decode::*;
pub use prompts::*;
