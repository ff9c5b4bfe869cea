pub mod listing;
pub mod request;
pub mod result;
pub mod seller;

pub use listing::*;
pub use request::*;
pub use result::*;
pub use seller::*;
