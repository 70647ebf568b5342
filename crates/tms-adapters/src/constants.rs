//! Adapter constants
//!
//! Default vendor endpoints used when a settings tree leaves the base URL
//! unset. Keys and tokens never get defaults.

/// Default Hugging Face inference endpoint
pub const HUGGINGFACE_DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default ManyChat API endpoint
pub const MANYCHAT_DEFAULT_BASE_URL: &str = "https://api.manychat.com/fb";

/// Default BotBuilders API endpoint
pub const BOTBUILDERS_DEFAULT_BASE_URL: &str = "https://api.botbuilders.io/v1";

/// Default OpenClaw API endpoint
pub const OPENCLAW_DEFAULT_BASE_URL: &str = "https://api.openclaw.io/v1";

/// Default Moltbook API endpoint
pub const MOLTBOOK_DEFAULT_BASE_URL: &str = "https://api.moltbook.io/v1";
