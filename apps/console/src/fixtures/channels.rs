use crate::models::{ApiConnection, Channel, ChannelKind, LinkStatus};

use super::s;

pub fn sample_channels() -> Vec<Channel> {
    vec![
        Channel {
            id: s("1"),
            name: s("Facebook Messenger"),
            kind: ChannelKind::Messenger,
            status: LinkStatus::Connected,
            description: s("Connect your bots to Facebook Messenger for customer interactions"),
            bot_count: Some(2),
        },
        Channel {
            id: s("2"),
            name: s("Zalo Official Account"),
            kind: ChannelKind::Zalo,
            status: LinkStatus::Disconnected,
            description: s("Integrate with Zalo OA to reach Vietnamese customers"),
            bot_count: Some(0),
        },
        Channel {
            id: s("3"),
            name: s("Web Widget"),
            kind: ChannelKind::Web,
            status: LinkStatus::Connected,
            description: s("Embed chat widgets directly into your website"),
            bot_count: Some(1),
        },
    ]
}

pub fn sample_api_connections() -> Vec<ApiConnection> {
    vec![
        ApiConnection {
            id: s("1"),
            name: s("POS System API"),
            url: s("https://api.restaurant-pos.com/v1"),
            status: LinkStatus::Connected,
            last_sync: s("2024-06-21 15:30"),
            description: s("Real-time menu and inventory data"),
        },
        ApiConnection {
            id: s("2"),
            name: s("Delivery Tracking API"),
            url: s("https://delivery.example.com/api"),
            status: LinkStatus::Disconnected,
            last_sync: s("2024-06-20 09:15"),
            description: s("Order status and delivery tracking"),
        },
    ]
}

/// Options offered by the "Add API Connection" dialog.
pub const API_AUTH_OPTIONS: [(&str, &str); 4] = [
    ("none", "None"),
    ("bearer", "Bearer Token"),
    ("apikey", "API Key"),
    ("basic", "Basic Auth"),
];
