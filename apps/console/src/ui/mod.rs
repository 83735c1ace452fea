pub mod activity;
pub mod analytics;
pub mod bot_builder;
pub mod bot_card;
pub mod bot_details;
pub mod bot_editor;
pub mod bots;
pub mod channels;
pub mod dashboard;
pub mod header;
pub mod icons;
pub mod knowledge;
pub mod layout;
pub mod not_found;
pub mod notifications;
pub mod primitives;
pub mod review;
pub mod settings;
pub mod sidebar;
