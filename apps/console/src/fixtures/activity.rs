use crate::models::{ActivityEntry, ActivityTone, Notification};

use super::s;

/// Full activity history; the dashboard previews the first three entries.
pub fn sample_activity() -> Vec<ActivityEntry> {
    use ActivityTone::*;

    [
        (Success, "Customer Support Bot answered 15 questions in the last hour", "2 min ago"),
        (Warning, "5 questions flagged for review in Menu Q&A Bot", "15 min ago"),
        (Info, "Knowledge base updated with 3 new documents", "1 hour ago"),
        (Success, "Delivery Tracker Bot successfully processed 28 delivery updates", "2 hours ago"),
        (Info, "New user registered and started conversation with Customer Support Bot", "3 hours ago"),
        (Warning, "Menu Q&A Bot failed to answer 2 complex dietary questions", "4 hours ago"),
        (Success, "Customer Support Bot resolved 12 support tickets automatically", "5 hours ago"),
        (Info, "System backup completed successfully", "6 hours ago"),
        (Warning, "3 conversations escalated to human support", "7 hours ago"),
        (Success, "Weekly performance report generated for all bots", "8 hours ago"),
        (Info, "Knowledge base search optimization completed", "12 hours ago"),
        (Success, "Customer Support Bot achieved 96% satisfaction rate yesterday", "1 day ago"),
        (Warning, "Server response time increased by 15% during peak hours", "1 day ago"),
        (Info, "Monthly analytics report generated and sent to admins", "2 days ago"),
        (Success, "All bots passed weekly health check", "3 days ago"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (tone, message, timestamp))| ActivityEntry {
        id: (idx + 1).to_string(),
        tone,
        message: s(message),
        timestamp: s(timestamp),
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    sample_activity().into_iter().take(3).collect()
}

pub fn sample_notifications() -> Vec<Notification> {
    [
        (1, "Bot Response Flagged", "Customer Support Bot response needs review", "2 min ago"),
        (2, "Knowledge Base Updated", "3 new articles added to FAQ section", "1 hour ago"),
        (3, "High Traffic Alert", "Menu Q&A Bot receiving high volume", "2 hours ago"),
    ]
    .into_iter()
    .map(|(id, title, description, time)| Notification {
        id,
        title: s(title),
        description: s(description),
        time: s(time),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_history_has_fifteen_entries_with_sequential_ids() {
        let entries = sample_activity();
        assert_eq!(entries.len(), 15);
        assert_eq!(entries.first().map(|e| e.id.as_str()), Some("1"));
        assert_eq!(entries.last().map(|e| e.id.as_str()), Some("15"));
    }

    #[test]
    fn dashboard_preview_matches_history_head() {
        let preview = recent_activity();
        assert_eq!(preview.len(), 3);
        assert_eq!(preview, sample_activity()[..3].to_vec());
    }
}
