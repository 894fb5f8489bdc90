
pub mod auth;
pub mod cabins;
pub mod health;
pub mod issues;
pub mod logs;
pub mod users;
