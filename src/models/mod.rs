mod notification;

pub use notification::{ChannelType, NewNotification, Notification};
