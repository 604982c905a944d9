pub mod error;
pub mod forecast;
pub mod json;
pub mod problem;
pub mod scenario;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
