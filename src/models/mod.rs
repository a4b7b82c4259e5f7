pub mod event;
pub mod recommendation;

pub use event::Event;
pub use recommendation::Recommendation;
