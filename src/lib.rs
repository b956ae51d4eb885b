#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::deglibm;
pub use maths::deglibm::{cosd, cscd, sind};
