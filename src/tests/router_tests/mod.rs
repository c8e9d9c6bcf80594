mod error_tests;
mod properties_tests;
