pub mod array_generator;
pub mod coordinating_generator;
pub mod example_generator;
pub mod media_generator;
pub mod object_generator;
pub mod recursion;
pub mod scalar_generator;
pub mod string_generator;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod array_generator_test;
