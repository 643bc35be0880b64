pub mod relay_wishes;

#[cfg(test)]
pub(crate) mod test_support;
