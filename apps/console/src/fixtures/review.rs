use crate::models::{ReviewItem, ReviewStatus};

use super::s;

/// Answers flagged for human review. Trust scores are fixed display values.
pub fn sample_review_queue() -> Vec<ReviewItem> {
    vec![
        ReviewItem {
            id: s("1"),
            user_question: s("Do you have any gluten-free pasta options available?"),
            bot_answer: s("We offer several gluten-free pasta dishes including penne arrabbiata and spaghetti carbonara made with rice-based pasta."),
            trust_score: 65,
            reasoning: vec![
                s("Source data is 6 months old"),
                s("Limited menu information"),
                s("High confidence match"),
            ],
            source_snippet: s("Our gluten-free menu includes: Rice pasta penne with tomato sauce..."),
            conversation_id: s("conv_001"),
            timestamp: s("2024-06-21 14:30"),
            channel: s("Web"),
            status: ReviewStatus::Pending,
        },
        ReviewItem {
            id: s("2"),
            user_question: s("What are your delivery hours on Sunday?"),
            bot_answer: s("Our delivery service operates from 11:00 AM to 10:00 PM on Sunday."),
            trust_score: 45,
            reasoning: vec![
                s("Conflicting information found"),
                s("Source: Unverified URL"),
                s("Needs human verification"),
            ],
            source_snippet: s("Sunday delivery: 11 AM - 10 PM (subject to change during holidays)"),
            conversation_id: s("conv_002"),
            timestamp: s("2024-06-21 13:15"),
            channel: s("Messenger"),
            status: ReviewStatus::Pending,
        },
        ReviewItem {
            id: s("3"),
            user_question: s("Can I modify my order after placing it online?"),
            bot_answer: s("You can modify your order within 5 minutes of placing it by calling our support line."),
            trust_score: 80,
            reasoning: vec![
                s("Recent policy update"),
                s("High confidence source"),
                s("Clear documentation"),
            ],
            source_snippet: s("Order modification policy: Customers have 5 minutes after order confirmation..."),
            conversation_id: s("conv_003"),
            timestamp: s("2024-06-21 12:45"),
            channel: s("Zalo"),
            status: ReviewStatus::Pending,
        },
    ]
}
