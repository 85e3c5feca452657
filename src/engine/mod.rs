pub mod controller;
pub mod filter;
pub mod load;
pub mod paginate;
pub mod query;

pub use controller::FeedController;
pub use load::{CancelToken, LoadOutcome, LoadTicket};
pub use paginate::{PageState, PageView};
pub use query::{FilterKind, Query};
