pub mod content;
pub mod health;
pub mod proxy;
pub mod reminder;
