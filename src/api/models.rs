use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::summarizer::{FormatSetting, LengthSetting};

pub const DEFAULT_LENGTH_SETTING: &str = "Medium";
pub const DEFAULT_FORMAT_SETTING: &str = "Bullets";

/// Fields are kept as raw JSON so a value of the wrong type never rejects the
/// whole body. `None` means absent; an explicit `null` is `Some(Value::Null)`.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default, deserialize_with = "present")]
    pub text: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub length_setting: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub format_setting: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SummarizeRequest {
    /// The text when it is a JSON string. Other types count as missing.
    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().and_then(Value::as_str)
    }

    /// The length setting as sent, with the default only when absent.
    pub fn length_setting(&self) -> Value {
        self.length_setting
            .clone()
            .unwrap_or_else(|| Value::from(DEFAULT_LENGTH_SETTING))
    }

    pub fn format_setting(&self) -> Value {
        self.format_setting
            .clone()
            .unwrap_or_else(|| Value::from(DEFAULT_FORMAT_SETTING))
    }

    pub fn length(&self) -> LengthSetting {
        LengthSetting::from_setting(self.length_setting().as_str().unwrap_or_default())
    }

    pub fn format(&self) -> FormatSetting {
        FormatSetting::from_setting(self.format_setting().as_str().unwrap_or_default())
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary_text: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    /// Echoed as received, so unrecognized values come back unchanged.
    pub length_setting: Value,
    pub format_setting: Value,
}
