pub mod extract;
pub mod scoring;
pub mod signals;

#[cfg(test)]
mod tests;
