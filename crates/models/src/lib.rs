pub mod db;
pub mod maintenance_request;

#[cfg(test)]
mod tests;
