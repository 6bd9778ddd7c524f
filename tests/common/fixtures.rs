//! Test data factories for shift-request types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use chrono::NaiveDate;
use shift_request::config::{AppConfig, ChatworkConfig, NotionConfig};
use shift_request::types::{ShiftDay, ShiftRequest};

/// 32-hex database id used across tests
pub const DATABASE_ID: &str = "0123456789abcdef0123456789abcdef";

/// A date in June 2025
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

/// Create a day with the given shops
pub fn make_day(day: u32, shops: &[&str]) -> ShiftDay {
    ShiftDay {
        date: june(day),
        desired_shops: shops.iter().map(ToString::to_string).collect(),
    }
}

/// Create a June 2025 request for 山田
pub fn make_request(days: Vec<ShiftDay>, remarks: &str) -> ShiftRequest {
    ShiftRequest {
        staff_name: "山田".to_string(),
        month: "2025-06".to_string(),
        days,
        remarks: remarks.to_string(),
    }
}

/// Config with every secret present, pointing at the given API bases
pub fn full_config(notion_base: &str, chatwork_base: &str) -> AppConfig {
    AppConfig {
        staff: vec!["山田".to_string(), "佐藤".to_string()],
        shops: vec!["渋谷".to_string(), "上野".to_string(), "新宿".to_string()],
        notion: NotionConfig {
            api_key: Some("secret_test".to_string()),
            database_id: Some(DATABASE_ID.to_string()),
            api_base: notion_base.to_string(),
        },
        chatwork: ChatworkConfig {
            api_token: Some("cw_test".to_string()),
            room_id: Some("123456".to_string()),
            api_base: chatwork_base.to_string(),
        },
    }
}

/// Config with default API bases
pub fn default_config() -> AppConfig {
    full_config("https://api.notion.com", "https://api.chatwork.com")
}
