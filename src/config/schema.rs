//! Configuration schema definitions.
//!
//! This module defines the complete option set for the chat logger: the
//! static per-field metadata table ([`FIELDS`]) and the record of current
//! values ([`ConfigRecord`]). The metadata drives both validation and the
//! commentary woven into the persisted document.

use serde::{Deserialize, Serialize};

use crate::{MODULE_VERSION, PROJECT_LINK};

/// Placeholder in banner text that the weaver turns into blank lines around
/// the banner (leading blank only if the placeholder starts the banner).
pub const BLANK_LINE_MARKER: &str = "{space}";

/// Scalar type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Bool,
    Text,
}

/// Range constraint for an integer field.
///
/// Values outside `[min, max]` are replaced by `default` during validation
/// and `message` is reported as a warning diagnostic.
#[derive(Debug, Clone, Copy)]
pub struct RangeRule {
    pub min: i64,
    pub max: i64,
    pub default: i64,
    pub message: &'static str,
}

/// Static metadata for one configuration field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name exactly as it appears in the persisted document.
    pub name: &'static str,
    /// Scalar type of the field's value.
    pub kind: FieldKind,
    /// Range constraint, integer fields only.
    pub range: Option<RangeRule>,
    /// User-facing documentation, one comment line per `\n`-separated line.
    pub comment: Option<&'static str>,
    /// Section banner emitted before the documentation block.
    pub banner: Option<&'static str>,
}

/// Look up a field's metadata by its document name.
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// The full option set, in persisted-document order.
///
/// Declaration order here is the order fields are written to disk; the
/// annotation weaver relies on this table for banners and comments.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "Version",
        kind: FieldKind::Text,
        range: None,
        comment: None,
        banner: Some(
            "----------------------------[ ↓ Plugin Info ↓ ]----------------------------{space}",
        ),
    },
    FieldSpec {
        name: "Link",
        kind: FieldKind::Text,
        range: None,
        comment: None,
        banner: None,
    },
    FieldSpec {
        name: "Locally_Enable",
        kind: FieldKind::Int,
        range: Some(RangeRule {
            min: 0,
            max: 3,
            default: 1,
            message: "[Chat Logger] Locally_Enable: is invalid, setting to default value (1) Please Choose From 0 To 3.\n\
                [Chat Logger] 1 = Yes, But Log When Player Chat Direct\n\
                [Chat Logger] 2 = Yes, But Log And Send All Messages When Round End (Recommended For Performance)\n\
                [Chat Logger] 3 = Yes, But Log And Send All Messages When Map End (Recommended For Performance)\n\
                [Chat Logger] 0 = No, Disable This Feature",
        }),
        comment: Some(
            "Save Chat Messages Locally (In ../chat-logger/logs/)?\n\
                1 = Yes, But Log When Player Chat Direct\n\
                2 = Yes, But Log And Send All Messages When Round End (Recommended For Performance)\n\
                3 = Yes, But Log And Send All Messages When Map End (Recommended For Performance)\n\
                0 = No, Disable",
        ),
        banner: Some(
            "{space}----------------------------[ ↓ Locally Config ↓ ]----------------------------{space}",
        ),
    },
    FieldSpec {
        name: "Locally_LogMessagesOnly",
        kind: FieldKind::Int,
        range: Some(RangeRule {
            min: 1,
            max: 3,
            default: 1,
            message: "[Chat Logger] Locally_LogMessagesOnly: is invalid, setting to default value (1) Please Choose From 1 To 3.\n\
                [Chat Logger] 1 = Both Public Chat And Team Chat\n\
                [Chat Logger] 2 = Public Chat Only\n\
                [Chat Logger] 3 = Team Chat Only",
        }),
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                Log Messages Only:\n\
                1 = Both Public Chat And Team Chat\n\
                2 = Public Chat Only\n\
                3 = Team Chat Only",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_IncludeTheseFlagsMessagesOnly",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                Log These Flags Messages Only And Ignore Log Others\n\
                Example:\n\
                !76561198206086993,@css/include,#css/include,include\n\
                \"\" = To Log Everyone",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_ExcludeFlagsMessages",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                Dont Log These Flags Messages And Log Others\n\
                Example:\n\
                !76561198206086993,@css/exclude,#css/exclude,exclude\n\
                \"\" = To Exclude Everyone",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_ExcludeMessagesStartWith",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                Dont Log Messages If It Start With\n\
                \"\" = Disable This Feature",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_ExcludeMessagesContainsLessThanXLetters",
        kind: FieldKind::Int,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                Dont Log Messages If It Contains Less Than X Letters\n\
                0 = Disable This Feature",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_ExcludeMessagesDuplicate",
        kind: FieldKind::Bool,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                Dont Log Messages If It Duplicates Previous Message?\n\
                true = Yes\n\
                false = No",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_MessageFormat",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                How Do You Like The Message Format\n\
                {DATE} = [Locally_DateFormat]\n\
                {TIME} = [Locally_TimeFormat]\n\
                {PLAYER_NAME} = Player Name\n\
                {PLAYER_MESSAGE} = Player Message\n\
                {PLAYER_TEAM} = Check If Player Wrote In Chat Team Or Public Chat [TEAM]\n\
                {PLAYER_STEAMID} = STEAM_0:1:122910632\n\
                {PLAYER_STEAMID3} = U:1:245821265\n\
                {PLAYER_STEAMID32} = 245821265\n\
                {PLAYER_STEAMID64} = 76561198206086993\n\
                {PLAYER_IP} = 123.45.67.89\n\
                \"\" = Disable This Feature",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_DateFormat",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                How Do You Like Date Format\n\
                Examples:\n\
                dd MM yyyy = 25 12 2023\n\
                MM/dd/yy = 12/25/23\n\
                MM-dd-yyyy = 12-25-2025",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_TimeFormat",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                How Do You Like Time Format\n\
                Examples:\n\
                HH:mm = 14:30\n\
                hh:mm a = 02:30 PM\n\
                HH:mm:ss = 14:30:45",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Locally_AutoDeleteLogsMoreThanXdaysOld",
        kind: FieldKind::Int,
        range: None,
        comment: Some(
            "Required [Locally_Enable = 1/2/3]\n\
                Auto Delete File Logs That Pass Than X Old Days\n\
                0 = Disable This Feature",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_WebHook",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Discord WebHook\n\
                Example: https://discord.com/api/webhooks/XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX\n\
                \"\" = Disable This Feature",
        ),
        banner: Some(
            "{space}----------------------------[ ↓ Discord Config ↓ ]----------------------------{space}",
        ),
    },
    FieldSpec {
        name: "Discord_SideColor",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Discord_Style 2/3/4/5]\n\
                How Would You Side Color Message To Be Use This Site (https://htmlcolorcodes.com/color-picker) For Color Pick",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_LogMessagesOnly",
        kind: FieldKind::Int,
        range: Some(RangeRule {
            min: 1,
            max: 3,
            default: 1,
            message: "[Chat Logger] Discord_LogMessagesOnly: is invalid, setting to default value (1) Please Choose From 1 To 3.\n\
                [Chat Logger] 1 = Both Public Chat And Team Chat\n\
                [Chat Logger] 2 = Public Chat Only\n\
                [Chat Logger] 3 = Team Chat Only",
        }),
        comment: Some(
            "Required [Discord_WebHook]\n\
                Log Messages Only:\n\
                1 = Both Public Chat And Team Chat\n\
                2 = Public Chat Only\n\
                3 = Team Chat Only",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_Style",
        kind: FieldKind::Int,
        range: None,
        comment: None,
        banner: None,
    },
    FieldSpec {
        name: "Discord_IncludeTheseFlagsMessagesOnly",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Discord_WebHook]\n\
                Log These Flags Messages Only And Ignore Log Others\n\
                Example:\n\
                !76561198206086993,@css/include,#css/include,include\n\
                \"\" = To Log Everyone",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_ExcludeFlagsMessages",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Discord_WebHook]\n\
                Dont Log These Flags Messages And Log Others\n\
                Example:\n\
                !76561198206086993,@css/exclude,#css/exclude,exclude\n\
                \"\" = To Exclude Everyone",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_ExcludeMessagesStartWith",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Discord_WebHook]\n\
                Dont Log Messages If It Start With\n\
                \"\" = Disable This Feature",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_ExcludeMessagesContainsLessThanXLetters",
        kind: FieldKind::Int,
        range: None,
        comment: Some(
            "Required [Discord_WebHook]\n\
                Dont Log Messages If It Contains Less Than X Letters\n\
                0 = Disable This Feature",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_ExcludeMessagesDuplicate",
        kind: FieldKind::Bool,
        range: None,
        comment: Some(
            "Required [Discord_WebHook]\n\
                Log duplicate massages?",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_UsersWithNoAvatarImage",
        kind: FieldKind::Text,
        range: None,
        comment: None,
        banner: None,
    },
    FieldSpec {
        name: "Discord_DateFormat",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Discord_WebHook]\n\
                Date format",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_TimeFormat",
        kind: FieldKind::Text,
        range: None,
        comment: Some(
            "Required [Discord_WebHook]\n\
                Time format",
        ),
        banner: None,
    },
    FieldSpec {
        name: "Discord_MessageFormat",
        kind: FieldKind::Text,
        range: None,
        comment: None,
        banner: None,
    },
    FieldSpec {
        name: "EnableDebug",
        kind: FieldKind::Bool,
        range: None,
        comment: Some(
            "Enable Debug Plugin In Server Console (Helps You To Debug Issues You Facing)?\n\
                true = Yes\n\
                false = No",
        ),
        banner: Some(
            "{space}----------------------------[ ↓ Utilities  ↓ ]----------------------------{space}",
        ),
    },
];

/// One validation warning produced by [`ConfigRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Document name of the repaired field.
    pub field: &'static str,
    /// Human-readable explanation, ready for the log.
    pub message: &'static str,
}

/// The current configuration values, one field per [`FieldSpec`].
///
/// Field order mirrors [`FIELDS`]; serde renames map the Rust names onto the
/// document names. `version` and `link` are pinned to the crate's own values
/// on every construction, decode, and `validate()` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Pinned to [`MODULE_VERSION`], not user-editable.
    #[serde(rename = "Version")]
    pub version: String,

    /// Pinned to [`PROJECT_LINK`], not user-editable.
    #[serde(rename = "Link")]
    pub link: String,

    /// Local file logging mode, see [`LogMode`].
    #[serde(rename = "Locally_Enable")]
    pub locally_enable: i64,

    /// Which chat audiences reach the local log, see [`ChatScope`].
    #[serde(rename = "Locally_LogMessagesOnly")]
    pub locally_log_messages_only: i64,

    #[serde(rename = "Locally_IncludeTheseFlagsMessagesOnly")]
    pub locally_include_these_flags_messages_only: String,

    #[serde(rename = "Locally_ExcludeFlagsMessages")]
    pub locally_exclude_flags_messages: String,

    #[serde(rename = "Locally_ExcludeMessagesStartWith")]
    pub locally_exclude_messages_start_with: String,

    #[serde(rename = "Locally_ExcludeMessagesContainsLessThanXLetters")]
    pub locally_exclude_messages_contains_less_than_x_letters: i64,

    #[serde(rename = "Locally_ExcludeMessagesDuplicate")]
    pub locally_exclude_messages_duplicate: bool,

    #[serde(rename = "Locally_MessageFormat")]
    pub locally_message_format: String,

    #[serde(rename = "Locally_DateFormat")]
    pub locally_date_format: String,

    #[serde(rename = "Locally_TimeFormat")]
    pub locally_time_format: String,

    /// Log files older than this many days are deleted; 0 disables cleanup.
    #[serde(rename = "Locally_AutoDeleteLogsMoreThanXdaysOld")]
    pub locally_auto_delete_logs_more_than_x_days_old: i64,

    /// Webhook endpoint; empty string disables the webhook sink.
    #[serde(rename = "Discord_WebHook")]
    pub discord_web_hook: String,

    #[serde(rename = "Discord_SideColor")]
    pub discord_side_color: String,

    /// Which chat audiences reach the webhook, see [`ChatScope`].
    #[serde(rename = "Discord_LogMessagesOnly")]
    pub discord_log_messages_only: i64,

    /// Embed style index understood by the webhook sender.
    #[serde(rename = "Discord_Style")]
    pub discord_style: i64,

    #[serde(rename = "Discord_IncludeTheseFlagsMessagesOnly")]
    pub discord_include_these_flags_messages_only: String,

    #[serde(rename = "Discord_ExcludeFlagsMessages")]
    pub discord_exclude_flags_messages: String,

    #[serde(rename = "Discord_ExcludeMessagesStartWith")]
    pub discord_exclude_messages_start_with: String,

    #[serde(rename = "Discord_ExcludeMessagesContainsLessThanXLetters")]
    pub discord_exclude_messages_contains_less_than_x_letters: i64,

    #[serde(rename = "Discord_ExcludeMessagesDuplicate")]
    pub discord_exclude_messages_duplicate: bool,

    /// Fallback avatar for players whose profile exposes none.
    #[serde(rename = "Discord_UsersWithNoAvatarImage")]
    pub discord_users_with_no_avatar_image: String,

    #[serde(rename = "Discord_DateFormat")]
    pub discord_date_format: String,

    #[serde(rename = "Discord_TimeFormat")]
    pub discord_time_format: String,

    #[serde(rename = "Discord_MessageFormat")]
    pub discord_message_format: String,

    /// Verbose console diagnostics toggle.
    #[serde(rename = "EnableDebug")]
    pub enable_debug: bool,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            version: MODULE_VERSION.to_string(),
            link: PROJECT_LINK.to_string(),

            locally_enable: 1,
            locally_log_messages_only: 1,
            locally_include_these_flags_messages_only: String::new(),
            locally_exclude_flags_messages: "@css/exclude,#css/exclude".to_string(),
            locally_exclude_messages_start_with: "!./".to_string(),
            locally_exclude_messages_contains_less_than_x_letters: 0,
            locally_exclude_messages_duplicate: false,
            locally_message_format: "{PLAYER_MESSAGE}".to_string(),
            locally_date_format: "dd-MM-yyyy".to_string(),
            locally_time_format: "HH:mm:ss".to_string(),
            locally_auto_delete_logs_more_than_x_days_old: 7,

            discord_web_hook: String::new(),
            discord_side_color: "00FFFF".to_string(),
            discord_log_messages_only: 1,
            discord_style: 4,
            discord_include_these_flags_messages_only: String::new(),
            discord_exclude_flags_messages: "@css/exclude,#css/exclude".to_string(),
            discord_exclude_messages_start_with: "!./".to_string(),
            discord_exclude_messages_contains_less_than_x_letters: 0,
            discord_exclude_messages_duplicate: false,
            discord_users_with_no_avatar_image:
                "https://avatars.fastly.steamstatic.com/fef49e7fa7e1997310d705b2a6158ff8dc1cdfeb_full.jpg"
                    .to_string(),
            discord_date_format: "dd-MM-yyyy".to_string(),
            discord_time_format: "HH:mm:ss".to_string(),
            discord_message_format: "{PLAYER_MESSAGE}".to_string(),

            enable_debug: false,
        }
    }
}

impl ConfigRecord {
    /// Repair the record in place and report what was repaired.
    ///
    /// Re-pins `Version`/`Link`, then clamps every integer field that carries
    /// a [`RangeRule`] back to its declared default when out of range. Never
    /// fails; callers decide what to do with the returned diagnostics.
    pub fn validate(&mut self) -> Vec<Diagnostic> {
        self.pin_invariants();

        let mut diagnostics = Vec::new();
        for spec in FIELDS {
            let Some(rule) = spec.range else { continue };
            let Some(value) = self.int_field_mut(spec.name) else { continue };
            if *value < rule.min || *value > rule.max {
                *value = rule.default;
                diagnostics.push(Diagnostic {
                    field: spec.name,
                    message: rule.message,
                });
            }
        }
        diagnostics
    }

    /// Force the two host-owned fields back to their fixed values.
    pub(crate) fn pin_invariants(&mut self) {
        self.version = MODULE_VERSION.to_string();
        self.link = PROJECT_LINK.to_string();
    }

    fn int_field_mut(&mut self, name: &str) -> Option<&mut i64> {
        match name {
            "Locally_Enable" => Some(&mut self.locally_enable),
            "Locally_LogMessagesOnly" => Some(&mut self.locally_log_messages_only),
            "Locally_ExcludeMessagesContainsLessThanXLetters" => {
                Some(&mut self.locally_exclude_messages_contains_less_than_x_letters)
            }
            "Locally_AutoDeleteLogsMoreThanXdaysOld" => {
                Some(&mut self.locally_auto_delete_logs_more_than_x_days_old)
            }
            "Discord_LogMessagesOnly" => Some(&mut self.discord_log_messages_only),
            "Discord_Style" => Some(&mut self.discord_style),
            "Discord_ExcludeMessagesContainsLessThanXLetters" => {
                Some(&mut self.discord_exclude_messages_contains_less_than_x_letters)
            }
            _ => None,
        }
    }

    /// Local logging mode selected by `Locally_Enable`.
    pub fn local_log_mode(&self) -> LogMode {
        match self.locally_enable {
            1 => LogMode::Direct,
            2 => LogMode::RoundEnd,
            3 => LogMode::MapEnd,
            _ => LogMode::Disabled,
        }
    }

    /// Chat audiences captured by the local file sink.
    pub fn local_chat_scope(&self) -> ChatScope {
        ChatScope::from_option(self.locally_log_messages_only)
    }

    /// Chat audiences captured by the webhook sink.
    pub fn webhook_chat_scope(&self) -> ChatScope {
        ChatScope::from_option(self.discord_log_messages_only)
    }

    /// Whether the webhook sink is configured at all.
    pub fn webhook_enabled(&self) -> bool {
        !self.discord_web_hook.is_empty()
    }

    /// Retention window for on-disk logs, `None` when cleanup is disabled.
    pub fn log_retention_days(&self) -> Option<u64> {
        match self.locally_auto_delete_logs_more_than_x_days_old {
            days if days > 0 => Some(days as u64),
            _ => None,
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.enable_debug
    }
}

/// When chat messages are written to the local log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Local logging turned off.
    Disabled,
    /// Write each message as it arrives.
    Direct,
    /// Buffer and flush when the round ends.
    RoundEnd,
    /// Buffer and flush when the map ends.
    MapEnd,
}

/// Which chat audiences a sink records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatScope {
    /// Public and team chat.
    All,
    /// Public chat only.
    PublicOnly,
    /// Team chat only.
    TeamOnly,
}

impl ChatScope {
    fn from_option(value: i64) -> Self {
        match value {
            2 => ChatScope::PublicOnly,
            3 => ChatScope::TeamOnly,
            _ => ChatScope::All,
        }
    }
}
