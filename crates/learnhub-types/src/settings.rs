//! Admin-configurable settings read from the external settings store.
//!
//! The store is a single key/value table. One key holds the chatbot's
//! admin knowledge; nine keys hold the landing page's site settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Key holding the admin-authored knowledge appended to the system prompt.
pub const BOT_KNOWLEDGE_KEY: &str = "bot_knowledge";

/// One row of the settings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRow {
    pub key: String,
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Render a stored JSON value as text.
///
/// Strings are returned verbatim; any other JSON value is rendered as JSON.
pub fn setting_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Site-wide settings shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_whatsapp: String,
    pub contact_address: String,
    pub footer_text: String,
    pub demo_video_url: String,
    pub anthem_video_url: String,
    pub site_name: String,
    pub site_tagline: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            contact_email: "info@dlhub.com".to_string(),
            contact_phone: "+232 XX XXX XXXX".to_string(),
            contact_whatsapp: "+232 XX XXX XXXX".to_string(),
            contact_address: "Freetown, Sierra Leone".to_string(),
            footer_text: "© Digital Learning Hub. Made by Alikalie. All rights reserved."
                .to_string(),
            demo_video_url: String::new(),
            anthem_video_url: String::new(),
            site_name: "Digital Learning Hub".to_string(),
            site_tagline: "AI-Powered Education Platform".to_string(),
        }
    }
}

impl SiteSettings {
    /// Store keys backing each field, in form order.
    pub const KEYS: [&'static str; 9] = [
        "contact_email",
        "contact_phone",
        "contact_whatsapp",
        "contact_address",
        "footer_text",
        "demo_video_url",
        "anthem_video_url",
        "site_name",
        "site_tagline",
    ];

    /// Overlay stored rows onto the defaults.
    ///
    /// Unknown keys and null values are ignored.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a SettingRow>) -> Self {
        let mut settings = Self::default();
        for row in rows {
            if let Some(value) = &row.value
                && !value.is_null()
            {
                settings.set(&row.key, setting_value_to_string(value));
            }
        }
        settings
    }

    /// Field value for a store key, or `None` for keys that are not site settings.
    pub fn get(&self, key: &str) -> Option<&str> {
        let field = match key {
            "contact_email" => &self.contact_email,
            "contact_phone" => &self.contact_phone,
            "contact_whatsapp" => &self.contact_whatsapp,
            "contact_address" => &self.contact_address,
            "footer_text" => &self.footer_text,
            "demo_video_url" => &self.demo_video_url,
            "anthem_video_url" => &self.anthem_video_url,
            "site_name" => &self.site_name,
            "site_tagline" => &self.site_tagline,
            _ => return None,
        };
        Some(field.as_str())
    }

    /// Set the field for a store key. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        let field = match key {
            "contact_email" => &mut self.contact_email,
            "contact_phone" => &mut self.contact_phone,
            "contact_whatsapp" => &mut self.contact_whatsapp,
            "contact_address" => &mut self.contact_address,
            "footer_text" => &mut self.footer_text,
            "demo_video_url" => &mut self.demo_video_url,
            "anthem_video_url" => &mut self.anthem_video_url,
            "site_name" => &mut self.site_name,
            "site_tagline" => &mut self.site_tagline,
            _ => return false,
        };
        *field = value;
        true
    }

    /// `(key, value)` pairs for every field, in [`SiteSettings::KEYS`] order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Self::KEYS
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }
}

/// The two uploadable landing-page videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Demo,
    Anthem,
}

impl VideoKind {
    /// Settings key that stores the video's public URL.
    pub fn setting_key(&self) -> &'static str {
        match self {
            VideoKind::Demo => "demo_video_url",
            VideoKind::Anthem => "anthem_video_url",
        }
    }

    /// Object path for an upload: `{kind}-video-{millis}.{extension}`.
    pub fn object_path(&self, extension: &str, unix_millis: i64) -> String {
        format!("{self}-video-{unix_millis}.{extension}")
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoKind::Demo => write!(f, "demo"),
            VideoKind::Anthem => write!(f, "anthem"),
        }
    }
}

impl FromStr for VideoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "demo" => Ok(VideoKind::Demo),
            "anthem" => Ok(VideoKind::Anthem),
            other => Err(format!("invalid video kind: '{other}'")),
        }
    }
}
