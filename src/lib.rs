mod catalog {
    pub mod engine;
    pub mod error;
    pub mod load;
    pub mod schema;
    pub mod stats;
}
mod session {
    pub mod favorites;
    pub mod preferences;
}
mod constants;

mod storage {
    pub mod store;
}

mod share {
    pub mod export;
}

pub use catalog::*;
pub use catalog::engine::*;
pub use catalog::error::*;
pub use catalog::load::*;
pub use catalog::schema::*;
pub use catalog::stats::*;
pub use constants::*;
pub use session::favorites::*;
pub use session::preferences::*;
pub use share::export::*;
pub use storage::*;
pub use storage::store::*;
