#[cfg(test)]
pub mod sandbox;
