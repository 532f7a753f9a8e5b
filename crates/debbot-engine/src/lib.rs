//! debbot-engine: Headless core for the debbot portfolio assistant
//!
//! This crate provides everything behind the chat panel, UI-free:
//! - Conversation transcript and panel state machine
//! - Response generator boundary (Gemini-backed, fallback text on fault)
//! - Portfolio profile and persona prompt
//! - Configuration

pub mod chat;
pub mod config;
pub mod generator;
pub mod panel;
pub mod profile;

// Re-export commonly used types
pub use chat::{ChatMessage, Role, Transcript, WELCOME_MESSAGE};
pub use config::{Config, ConfigError, API_KEY_ENV};
pub use generator::{GeminiGenerator, GeneratorError, ResponseGenerator, FALLBACK_REPLY};
pub use panel::Panel;
pub use profile::{Experience, Profile, Project, SkillGroup};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
