pub mod errors;
pub mod db;
pub mod stock;

#[cfg(test)]
mod tests;
