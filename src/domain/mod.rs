mod identity;
mod inquiry;
mod new_subscriber;
mod subscriber_email;
mod subscriber_name;

pub use identity::Identity;
pub use inquiry::Inquiry;
pub use new_subscriber::{NewSubscriber, ParseSubscriberError};
pub use subscriber_email::SubscriberEmail;
pub use subscriber_name::SubscriberName;
