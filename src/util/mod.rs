#[cfg(test)]
pub mod alloc;
#[cfg(feature = "collections")]
pub mod error;
#[cfg(test)]
pub mod panic;
