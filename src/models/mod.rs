pub mod lead;

pub use lead::DispatchRequest;
