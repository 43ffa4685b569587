pub mod session;
pub mod state;

pub use session::CatalogSession;
pub use state::{BookListState, LoadPhase};
