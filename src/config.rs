// Static page configuration. Build-time env vars override the defaults.

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mpqqqwbk";

pub fn get_form_endpoint() -> &'static str {
    option_env!("LEAD_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

pub const SUBMISSION_SOURCE: &str = "website";
pub const BACKUP_STORAGE_KEY: &str = "formSubmissions";

pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const CARD_REVEAL_RATIO: f64 = 1.2;
pub const CARD_STAGGER_MS: u32 = 200;
pub const ANCHOR_SCROLL_OFFSET: f64 = 100.0;
pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;

pub const HOTLINE: &str = "0938.123.456";
pub const HOTLINE_TEL: &str = "tel:0938123456";
pub const ZALO_URL: &str = "https://zalo.me/0938123456";

pub const CONVERSION_SEND_TO: &str = "AW-CONVERSION_ID/CONVERSION_LABEL";

pub const SUBMIT_LABEL: &str = "GỬI YÊU CẦU";
pub const SUBMIT_BUSY_LABEL: &str = "Đang gửi...";
pub const SUCCESS_MESSAGE: &str =
    "✅ Yêu cầu đã được gửi thành công! Chúng tôi sẽ liên hệ với bạn trong vòng 5 phút.";

pub fn failure_message() -> String {
    format!("❌ Có lỗi xảy ra! Vui lòng gọi trực tiếp: {}", HOTLINE)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TelegramConfig {
    pub bot_token: &'static str,
    pub chat_id: &'static str,
}

pub fn get_telegram_config() -> Option<TelegramConfig> {
    match (option_env!("TELEGRAM_BOT_TOKEN"), option_env!("TELEGRAM_CHAT_ID")) {
        (Some(bot_token), Some(chat_id)) if !bot_token.is_empty() && !chat_id.is_empty() => {
            Some(TelegramConfig { bot_token, chat_id })
        }
        _ => None,
    }
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}
