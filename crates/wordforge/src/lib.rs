#![doc = include_str!("../README.md")]

mod collector;
mod combinator;
mod error;
mod filter;
mod options;
mod pipeline;
mod sink;
mod variants;


pub use crate::collector::*;
pub use crate::combinator::*;
pub use crate::error::*;
pub use crate::filter::*;
pub use crate::options::*;
pub use crate::pipeline::*;
pub use crate::sink::*;
pub use crate::variants::*;
