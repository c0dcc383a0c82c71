pub mod ai;
pub mod db;
pub mod notify;
pub mod password;
pub mod payment;
pub mod rate_limit;
