//! Static keyboard builders — pure helpers, no I/O.

use crate::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};

/// Build an inline keyboard from rows of `(text, callback_data)` pairs.
pub fn inline_keyboard(rows: &[&[(&str, &str)]]) -> ReplyMarkup {
    ReplyMarkup::Inline(InlineKeyboardMarkup {
        inline_keyboard: rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(text, data)| InlineKeyboardButton {
                        text: text.to_string(),
                        callback_data: Some(data.to_string()),
                        url: None,
                    })
                    .collect()
            })
            .collect(),
    })
}

/// Build an inline keyboard of link buttons from rows of `(text, url)` pairs.
pub fn inline_url_keyboard(rows: &[&[(&str, &str)]]) -> ReplyMarkup {
    ReplyMarkup::Inline(InlineKeyboardMarkup {
        inline_keyboard: rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(text, url)| InlineKeyboardButton {
                        text: text.to_string(),
                        callback_data: None,
                        url: Some(url.to_string()),
                    })
                    .collect()
            })
            .collect(),
    })
}

/// Build a reply keyboard from rows of button labels.
pub fn reply_keyboard(rows: &[&[&str]], resize: bool, one_time: bool) -> ReplyMarkup {
    ReplyMarkup::Reply(ReplyKeyboardMarkup {
        keyboard: rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|text| KeyboardButton {
                        text: text.to_string(),
                    })
                    .collect()
            })
            .collect(),
        resize_keyboard: resize,
        one_time_keyboard: one_time,
    })
}

/// Remove a previously shown reply keyboard.
pub fn remove_keyboard() -> ReplyMarkup {
    ReplyMarkup::Remove(ReplyKeyboardRemove {
        remove_keyboard: true,
    })
}
