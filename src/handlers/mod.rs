pub mod health;
pub mod page;
pub mod send_message;
