mod notification_item;

pub use notification_item::NotificationItem;
