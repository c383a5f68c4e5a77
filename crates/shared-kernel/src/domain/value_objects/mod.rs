mod counter;
mod post_id;
mod user_id;
mod value_object;

pub use counter::Counter;
pub use post_id::PostId;
pub use user_id::UserId;
pub use value_object::ValueObject;
