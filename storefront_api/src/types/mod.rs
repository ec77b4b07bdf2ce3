mod envelope;
pub use self::envelope::{EntityId, Envelope, LoginResponse, PaginatedResult, UploadResult};

mod user;
pub use self::user::User;

mod product;
pub use self::product::{Product, ProductImage};

mod category;
pub use self::category::Category;

mod blog;
pub use self::blog::{Blog, Image, Seo};

mod quote;
pub use self::quote::{Quote, QuoteProduct};

mod contact;
pub use self::contact::Contact;

pub(crate) mod time;

/// Preferred display identifier: `_id` when present, else `id`, else empty.
pub(crate) fn preferred_id(record_id: &Option<EntityId>, id: &Option<EntityId>) -> String {
    record_id
        .as_ref()
        .or(id.as_ref())
        .map(ToString::to_string)
        .unwrap_or_default()
}
