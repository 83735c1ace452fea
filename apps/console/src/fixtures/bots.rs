use crate::models::{
    Bot, BotConversation, BotProfile, BotResponse, BotStatus, ChannelKind, ConversationStatus,
    FlowNode, FlowNodeKind, Metric,
};

use super::s;

fn bot(
    id: &str,
    name: &str,
    description: &str,
    status: BotStatus,
    channels: &[ChannelKind],
    conversations: u32,
    last_active: &str,
) -> Bot {
    Bot {
        id: s(id),
        name: s(name),
        description: s(description),
        status,
        channels: channels.to_vec(),
        conversations,
        last_active: s(last_active),
    }
}

/// Every bot in the workspace, in listing order.
pub fn sample_bots() -> Vec<Bot> {
    use ChannelKind::*;

    vec![
        bot(
            "1",
            "Customer Support Bot",
            "Handles customer inquiries, order status, and general support questions",
            BotStatus::Active,
            &[Zalo, Messenger, Web],
            1245,
            "2 min ago",
        ),
        bot(
            "2",
            "Menu Q&A Bot",
            "Answers questions about restaurant menu items, ingredients, and allergens",
            BotStatus::Active,
            &[Web, Messenger],
            567,
            "5 min ago",
        ),
        bot(
            "3",
            "Delivery Tracker",
            "Provides real-time delivery updates and tracking information",
            BotStatus::Draft,
            &[Zalo],
            0,
            "Never",
        ),
        bot(
            "4",
            "Product Recommendations",
            "Suggests products based on customer preferences and browsing history",
            BotStatus::Inactive,
            &[Web],
            89,
            "2 days ago",
        ),
    ]
}

/// The dashboard only features the first three bots.
pub fn featured_bots() -> Vec<Bot> {
    sample_bots().into_iter().take(3).collect()
}

/// Detail record shown on `/bots/:id`. The page is illustrative, so every id
/// resolves to the same profile.
pub fn sample_bot_profile() -> BotProfile {
    let bot = sample_bots().remove(0);
    BotProfile {
        bot,
        created_at: s("2024-06-15"),
        updated_at: s("2024-06-26"),
    }
}

pub fn sample_bot_metrics() -> Vec<Metric> {
    [
        ("Total Conversations", "1,245", "+12%"),
        ("Active Users", "892", "+8%"),
        ("Success Rate", "94%", "+2%"),
        ("Avg Response Time", "1.2s", "-0.3s"),
    ]
    .into_iter()
    .map(|(label, value, change)| Metric {
        label: s(label),
        value: s(value),
        change: s(change),
    })
    .collect()
}

pub fn sample_bot_conversations() -> Vec<BotConversation> {
    [
        ("1", "Customer #1", "What are your opening hours?", "2024-06-26 14:30", ConversationStatus::Resolved),
        ("2", "Customer #2", "I need help with my order", "2024-06-26 14:25", ConversationStatus::Active),
        ("3", "Customer #3", "Do you have vegetarian options?", "2024-06-26 14:20", ConversationStatus::Resolved),
        ("4", "Customer #4", "How can I cancel my subscription?", "2024-06-26 14:15", ConversationStatus::NeedsReview),
    ]
    .into_iter()
    .map(|(id, user, message, timestamp, status)| BotConversation {
        id: s(id),
        user: s(user),
        message: s(message),
        timestamp: s(timestamp),
        status,
    })
    .collect()
}

/// Seed responses for the editor; the page copies them into local state.
pub fn sample_bot_responses() -> Vec<BotResponse> {
    [
        ("1", "hello, hi, hey", "Hello! How can I help you today?", "greetings"),
        (
            "2",
            "hours, opening, open",
            "We are open Monday to Friday 9 AM to 6 PM, and weekends 10 AM to 4 PM.",
            "hours",
        ),
        ("3", "menu, food, eat", "You can find our full menu at www.restaurant.com/menu", "menu"),
        (
            "4",
            "order, status, tracking",
            "I can help you check your order status. Please provide your order number.",
            "orders",
        ),
    ]
    .into_iter()
    .map(|(id, trigger, response, category)| BotResponse {
        id: s(id),
        trigger: s(trigger),
        response: s(response),
        category: s(category),
    })
    .collect()
}

pub fn sample_flow_nodes() -> Vec<FlowNode> {
    vec![
        FlowNode { id: s("1"), kind: FlowNodeKind::Start, title: s("Start"), content: None, x: 100, y: 100 },
        FlowNode {
            id: s("2"),
            kind: FlowNodeKind::Message,
            title: s("Welcome Message"),
            content: Some(s("Hello! How can I help you today?")),
            x: 300,
            y: 100,
        },
        FlowNode { id: s("3"), kind: FlowNodeKind::Condition, title: s("Intent Check"), content: None, x: 500, y: 100 },
        FlowNode { id: s("4"), kind: FlowNodeKind::Knowledge, title: s("Knowledge Search"), content: None, x: 700, y: 50 },
        FlowNode { id: s("5"), kind: FlowNodeKind::Api, title: s("Order Status API"), content: None, x: 700, y: 150 },
    ]
}

/// Connector segments between flow nodes, as `(x1, y1, x2, y2)`.
pub fn sample_flow_edges() -> Vec<(i32, i32, i32, i32)> {
    vec![
        (240, 115, 300, 115),
        (440, 115, 500, 115),
        (640, 100, 700, 65),
        (640, 130, 700, 165),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bot_ids_are_unique() {
        let bots = sample_bots();
        let ids: HashSet<_> = bots.iter().map(|bot| bot.id.clone()).collect();
        assert_eq!(ids.len(), bots.len());
    }

    #[test]
    fn dashboard_features_three_of_four_bots() {
        assert_eq!(sample_bots().len(), 4);
        let featured = featured_bots();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|bot| bot.status != BotStatus::Inactive));
    }

    #[test]
    fn flow_nodes_carry_content_only_for_messages() {
        for node in sample_flow_nodes() {
            assert_eq!(node.content.is_some(), node.kind == FlowNodeKind::Message);
        }
    }
}
