pub mod errors;
pub mod db;
pub mod course;
pub mod module;
pub mod assignment;

#[cfg(test)]
mod tests;
