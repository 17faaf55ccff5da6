pub mod dispatch;
pub mod messaging;
pub mod template;
pub mod validation;
