mod client;
mod errors;
mod media;
mod normalize;
mod query;
mod session;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::media::{make_absolute, strip_base_url};
pub use self::normalize::{classify, normalize, normalize_value, ResultShape};
pub use self::query::{PageQuery, SizeParam};
pub use self::session::Session;
