use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::activity::Activity;
use crate::ui::analytics::Analytics;
use crate::ui::bot_builder::BotBuilder;
use crate::ui::bot_details::BotDetails;
use crate::ui::bot_editor::BotEditor;
use crate::ui::bots::Bots;
use crate::ui::channels::Channels;
use crate::ui::dashboard::Dashboard;
use crate::ui::icons::IconName;
use crate::ui::knowledge::KnowledgeHub;
use crate::ui::layout::AppLayout;
use crate::ui::not_found::NotFound;
use crate::ui::review::AnswerReview;
use crate::ui::settings::Settings;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/bots")]
        Bots {},
        #[route("/bots/new")]
        BotBuilder {},
        #[route("/bots/:id")]
        BotDetails { id: String },
        #[route("/bots/:id/edit")]
        BotEditor { id: String },
        #[route("/knowledge")]
        KnowledgeHub {},
        #[route("/review")]
        AnswerReview {},
        #[route("/analytics")]
        Analytics {},
        #[route("/channels")]
        Channels {},
        #[route("/settings")]
        Settings {},
        #[route("/activity")]
        Activity {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    pub fn bot(id: impl Into<String>) -> Self {
        Self::BotDetails { id: id.into() }
    }

    pub fn bot_edit(id: impl Into<String>) -> Self {
        Self::BotEditor { id: id.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub icon: IconName,
}

/// Sidebar entries in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Dashboard", route: Route::Dashboard {}, icon: IconName::Bot },
        NavItem { label: "Bots", route: Route::Bots {}, icon: IconName::MessageSquare },
        NavItem { label: "Knowledge Hub", route: Route::KnowledgeHub {}, icon: IconName::BookOpen },
        NavItem { label: "Answer Review", route: Route::AnswerReview {}, icon: IconName::Users },
        NavItem { label: "Analytics", route: Route::Analytics {}, icon: IconName::BarChart },
        NavItem { label: "Channels", route: Route::Channels {}, icon: IconName::Plug },
        NavItem { label: "Settings", route: Route::Settings {}, icon: IconName::Settings },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(path: &str) -> Route {
        Route::from_str(path).unwrap_or_else(|_| panic!("{path} did not parse"))
    }

    #[test]
    fn static_paths_map_one_to_one() {
        assert_eq!(parse("/"), Route::Dashboard {});
        assert_eq!(parse("/bots"), Route::Bots {});
        assert_eq!(parse("/knowledge"), Route::KnowledgeHub {});
        assert_eq!(parse("/review"), Route::AnswerReview {});
        assert_eq!(parse("/analytics"), Route::Analytics {});
        assert_eq!(parse("/channels"), Route::Channels {});
        assert_eq!(parse("/settings"), Route::Settings {});
        assert_eq!(parse("/activity"), Route::Activity {});
    }

    #[test]
    fn new_bot_wins_over_bot_id() {
        assert_eq!(parse("/bots/new"), Route::BotBuilder {});
    }

    #[test]
    fn dynamic_bot_segments_capture_id() {
        assert_eq!(parse("/bots/7"), Route::bot("7"));
        assert_eq!(parse("/bots/7/edit"), Route::bot_edit("7"));
    }

    #[test]
    fn unmapped_path_renders_not_found_only() {
        assert_eq!(
            parse("/does-not-exist"),
            Route::NotFound {
                segments: vec!["does-not-exist".to_string()]
            }
        );
        assert!(matches!(parse("/bots/7/edit/extra"), Route::NotFound { .. }));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::bot_edit("3").to_string(), "/bots/3/edit");
        assert_eq!(Route::BotBuilder {}.to_string(), "/bots/new");
    }

    #[test]
    fn nav_table_covers_primary_pages_without_duplicates() {
        let items = nav_items();
        assert_eq!(items.len(), 7);
        for (idx, item) in items.iter().enumerate() {
            assert!(items[idx + 1..].iter().all(|other| other.route != item.route));
        }
        assert_eq!(items[0].route, Route::Dashboard {});
    }
}
