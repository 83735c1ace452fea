use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BotStatus {
    Active,
    Draft,
    Inactive,
}

impl BotStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Inactive => "Inactive",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "bg-green-100 text-green-800",
            Self::Draft => "bg-yellow-100 text-yellow-800",
            Self::Inactive => "bg-gray-100 text-gray-800",
        }
    }

    /// Label for the run/pause toggle on the details page.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Active => "Pause",
            Self::Draft | Self::Inactive => "Activate",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Zalo,
    Messenger,
    Web,
}

impl ChannelKind {
    pub fn key(self) -> &'static str {
        match self {
            Self::Zalo => "zalo",
            Self::Messenger => "messenger",
            Self::Web => "web",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Zalo => "Zalo",
            Self::Messenger => "Messenger",
            Self::Web => "Web Widget",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Zalo => "💬",
            Self::Messenger => "📘",
            Self::Web => "🌐",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: BotStatus,
    pub channels: Vec<ChannelKind>,
    pub conversations: u32,
    pub last_active: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BotProfile {
    pub bot: Bot,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    Resolved,
    Active,
    NeedsReview,
}

impl ConversationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Active => "active",
            Self::NeedsReview => "needs review",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Resolved => "bg-slate-900 text-white",
            Self::Active => "bg-slate-100 text-slate-800",
            Self::NeedsReview => "bg-red-600 text-white",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BotConversation {
    pub id: String,
    pub user: String,
    pub message: String,
    pub timestamp: String,
    pub status: ConversationStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub change: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BotResponse {
    pub id: String,
    pub trigger: String,
    pub response: String,
    pub category: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowNodeKind {
    Start,
    Message,
    Condition,
    Knowledge,
    Api,
    Input,
}

impl FlowNodeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Message => "message",
            Self::Condition => "condition",
            Self::Knowledge => "knowledge",
            Self::Api => "api",
            Self::Input => "input",
        }
    }

    pub fn tile_class(self) -> &'static str {
        match self {
            Self::Start => "bg-green-100 border-green-300",
            Self::Message => "bg-blue-100 border-blue-300",
            Self::Condition => "bg-yellow-100 border-yellow-300",
            Self::Knowledge => "bg-purple-100 border-purple-300",
            Self::Api => "bg-orange-100 border-orange-300",
            Self::Input => "bg-gray-100 border-gray-300",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub kind: FlowNodeKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrustTone {
    High,
    Medium,
    Low,
}

impl TrustTone {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn pill_class(self) -> &'static str {
        match self {
            Self::High => "text-green-600 bg-green-100",
            Self::Medium => "text-yellow-600 bg-yellow-100",
            Self::Low => "text-red-600 bg-red-100",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReviewItem {
    pub id: String,
    pub user_question: String,
    pub bot_answer: String,
    pub trust_score: u8,
    pub reasoning: Vec<String>,
    pub source_snippet: String,
    pub conversation_id: String,
    pub timestamp: String,
    pub channel: String,
    pub status: ReviewStatus,
}

impl ReviewItem {
    pub fn tone(&self) -> TrustTone {
        TrustTone::for_score(self.trust_score)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Pdf,
    Docx,
    Csv,
    Url,
    Api,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Csv => "csv",
            Self::Url => "url",
            Self::Api => "api",
        }
    }

    pub fn is_document(self) -> bool {
        matches!(self, Self::Pdf | Self::Docx | Self::Csv)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Processing,
    Ready,
    Error,
}

impl SourceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Ready => "Ready",
            Self::Error => "Error",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Ready => "text-green-500",
            Self::Processing => "text-yellow-500",
            Self::Error => "text-red-500",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub kind: SourceKind,
    pub status: SourceStatus,
    pub date_added: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Connection state shared by messaging channels and API connectors.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    Connected,
    Disconnected,
    Error,
}

impl LinkStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::Error => "Error",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Connected => "bg-green-100 text-green-800",
            Self::Disconnected => "bg-slate-100 text-slate-700",
            Self::Error => "bg-red-600 text-white",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Connected => "text-green-500",
            Self::Disconnected => "text-gray-400",
            Self::Error => "text-red-500",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub kind: ChannelKind,
    pub status: LinkStatus,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_count: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiConnection {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: LinkStatus,
    pub last_sync: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Builder,
    Reviewer,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Reviewer, Self::Builder, Self::Admin];

    pub fn key(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Builder => "builder",
            Self::Reviewer => "reviewer",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Builder => "Builder",
            Self::Reviewer => "Reviewer",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Admin => "Admin - Full access to all features",
            Self::Builder => "Builder - Can create and edit bots",
            Self::Reviewer => "Reviewer - Can review and approve bot answers",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Admin => "bg-slate-900 text-white",
            Self::Builder => "bg-slate-100 text-slate-800",
            Self::Reviewer => "border border-slate-300 text-slate-700",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Pending,
    Inactive,
}

impl MemberStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Inactive => "Inactive",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "bg-green-100 text-green-800",
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Inactive => "bg-slate-100 text-slate-700",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: MemberStatus,
    pub last_active: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UnansweredQuestion {
    pub id: String,
    pub question: String,
    pub frequency: u32,
    pub last_asked: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConversationLog {
    pub id: String,
    pub user: String,
    pub channel: String,
    pub messages: u32,
    pub start_time: String,
    pub escalated: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChannelShare {
    pub name: String,
    pub percent: u8,
    pub swatch_class: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTone {
    Success,
    Warning,
    Info,
}

impl ActivityTone {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "text-green-500",
            Self::Warning => "text-yellow-500",
            Self::Info => "text-blue-500",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500",
            Self::Warning => "bg-yellow-500",
            Self::Info => "bg-blue-500",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub tone: ActivityTone,
    pub message: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub paid: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UsageMeter {
    pub label: String,
    pub used: String,
    pub percent: u8,
    pub bar_class: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NotificationPreference {
    pub key: String,
    pub title: String,
    pub description: String,
    pub enabled_by_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trust_tone_thresholds() {
        assert_eq!(TrustTone::for_score(100), TrustTone::High);
        assert_eq!(TrustTone::for_score(80), TrustTone::High);
        assert_eq!(TrustTone::for_score(79), TrustTone::Medium);
        assert_eq!(TrustTone::for_score(60), TrustTone::Medium);
        assert_eq!(TrustTone::for_score(59), TrustTone::Low);
        assert_eq!(TrustTone::for_score(0), TrustTone::Low);
    }

    #[test]
    fn bot_status_badges_are_distinct() {
        let classes = [
            BotStatus::Active.badge_class(),
            BotStatus::Draft.badge_class(),
            BotStatus::Inactive.badge_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_eq!(BotStatus::Active.toggle_label(), "Pause");
        assert_eq!(BotStatus::Draft.toggle_label(), "Activate");
    }

    #[test]
    fn role_keys_round_trip_through_select_values() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::from_key(role.key()), Some(role));
        }
        assert_eq!(UserRole::from_key("owner"), None);
    }

    #[test]
    fn conversation_status_uses_spaced_label() {
        assert_eq!(ConversationStatus::NeedsReview.label(), "needs review");
    }

    #[test]
    fn source_kind_groups_documents() {
        assert!(SourceKind::Pdf.is_document());
        assert!(SourceKind::Csv.is_document());
        assert!(!SourceKind::Url.is_document());
    }

    #[test]
    fn statuses_serialize_as_snake_case() {
        let json = serde_json::to_string(&ConversationStatus::NeedsReview).unwrap();
        assert_eq!(json, "\"needs_review\"");
    }
}
