pub mod dtos;
pub mod queries;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
