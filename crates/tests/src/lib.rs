#[cfg(test)]
mod common;

#[cfg(test)]
mod reset_endpoint_tests;
