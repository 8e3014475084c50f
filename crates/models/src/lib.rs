pub mod errors;
pub mod db;
pub mod line;

#[cfg(test)]
mod tests;
