use crate::models::{ChannelShare, ConversationLog, Metric, UnansweredQuestion};

use super::s;

pub fn analytics_metrics() -> Vec<Metric> {
    [
        ("Total Conversations", "2,847", "+12% from last period"),
        ("Answer Success Rate", "89.3%", "+5.2% improvement"),
        ("Active Users", "1,234", "+8% new users"),
        ("Avg Response Time", "1.2s", "-0.3s faster"),
    ]
    .into_iter()
    .map(|(label, value, change)| Metric {
        label: s(label),
        value: s(value),
        change: s(change),
    })
    .collect()
}

pub fn dashboard_metrics() -> Vec<Metric> {
    [
        ("Total Conversations", "1,812", "+12% from last week"),
        ("Active Bots", "2", "1 draft pending"),
        ("Success Rate", "94%", "+2% from last week"),
        ("Needs Review", "23", "3 high priority"),
    ]
    .into_iter()
    .map(|(label, value, change)| Metric {
        label: s(label),
        value: s(value),
        change: s(change),
    })
    .collect()
}

pub fn unanswered_questions() -> Vec<UnansweredQuestion> {
    [
        ("1", "Do you have gluten-free pasta options?", 15, "2024-06-21", "Menu"),
        ("2", "What are your delivery hours on Sunday?", 12, "2024-06-20", "Delivery"),
        ("3", "Can I modify my order after placing it?", 8, "2024-06-21", "Orders"),
        ("4", "Do you accept cryptocurrency payments?", 5, "2024-06-19", "Payment"),
    ]
    .into_iter()
    .map(|(id, question, frequency, last_asked, category)| UnansweredQuestion {
        id: s(id),
        question: s(question),
        frequency,
        last_asked: s(last_asked),
        category: Some(s(category)),
    })
    .collect()
}

pub fn conversation_logs() -> Vec<ConversationLog> {
    [
        ("1", "Anonymous User", "Web", 8, "2024-06-21 14:30", false),
        ("2", "Customer #1234", "Messenger", 15, "2024-06-21 13:45", true),
        ("3", "Anonymous User", "Zalo", 3, "2024-06-21 12:20", false),
    ]
    .into_iter()
    .map(|(id, user, channel, messages, start_time, escalated)| ConversationLog {
        id: s(id),
        user: s(user),
        channel: s(channel),
        messages,
        start_time: s(start_time),
        escalated,
    })
    .collect()
}

pub fn channel_distribution() -> Vec<ChannelShare> {
    [
        ("Web Widget", 45, "bg-blue-500"),
        ("Facebook Messenger", 35, "bg-green-500"),
        ("Zalo", 20, "bg-purple-500"),
    ]
    .into_iter()
    .map(|(name, percent, swatch)| ChannelShare {
        name: s(name),
        percent,
        swatch_class: s(swatch),
    })
    .collect()
}

pub const BOT_FILTER_OPTIONS: [(&str, &str); 4] = [
    ("all", "All Bots"),
    ("support", "Customer Support"),
    ("menu", "Menu Q&A"),
    ("delivery", "Delivery Tracker"),
];

pub const DATE_RANGE_OPTIONS: [(&str, &str); 3] = [
    ("7days", "Last 7 days"),
    ("30days", "Last 30 days"),
    ("90days", "Last 3 months"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_shares_sum_to_one_hundred() {
        let total: u32 = channel_distribution()
            .iter()
            .map(|share| u32::from(share.percent))
            .sum();
        assert_eq!(total, 100);
    }
}
