//! Encouragement text.
//!
//! The front-end asks for a short hype line for the user's mood. The answer
//! always arrives: if the text service fails, a canned line is used instead.

#[cfg(feature = "gemini")]
pub mod gemini;

use std::future::Future;

pub use crate::error::HypeError;

/// Shown when the text service cannot be reached or errors out.
pub const NETWORK_FALLBACK: &str = "معلش الشبكة مهنجة بس انت لسه نجم النجوم! 🥁🥁🥁";

/// Shown when the text service answers with nothing.
pub const EMPTY_FALLBACK: &str = "يا نهار ابيض! انت زي الفل يا ريس 🥁👏";

/// Anything that can turn a prompt into text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, HypeError>>;
}

/// The hype-man prompt for a mood.
pub fn build_prompt(mood: &str) -> String {
    format!(
        r#"You are an Egyptian "Hypeman" (Motabelaty - مُطبلاتي) who is extremely supportive, funny, and energetic.
A user is telling you they feel: "{mood}".

Your goal is to cheer them up, validate their feelings but immediately pivot to hyping them up.

Guidelines:
1. Use Egyptian slang (Massry).
2. Use emojis like 🥁, 👏, 🔥, 💪 liberally.
3. Tell them they are the best ("Ya basha", "Ya negm", "Ya ostaz").
4. Make a reference to "drumming" (Tabl) or "clapping" (Saqaf).
5. Keep it short (max 3 sentences).
6. Be very dramatic and funny."#
    )
}

/// Ask `generator` for encouragement. Never fails and never retries.
pub async fn get_encouragement<G: TextGenerator>(generator: &G, mood: &str) -> String {
    match generator.generate(&build_prompt(mood)).await {
        Ok(text) if text.trim().is_empty() => EMPTY_FALLBACK.to_string(),
        Ok(text) => text,
        Err(err) => {
            tracing::error!(%err, "encouragement request failed");
            NETWORK_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Canned {
        reply: Result<&'static str, fn() -> HypeError>,
        prompts: RefCell<Vec<String>>,
    }

    impl Canned {
        fn ok(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: fn() -> HypeError) -> Self {
            Self {
                reply: Err(err),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for Canned {
        async fn generate(&self, prompt: &str) -> Result<String, HypeError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn passes_model_text_through() {
        let generator = Canned::ok("انت الأسطورة 🥁");
        let text = get_encouragement(&generator, "tired").await;

        assert_eq!(text, "انت الأسطورة 🥁");
        assert!(generator.prompts.borrow()[0].contains(r#""tired""#));
    }

    #[tokio::test]
    async fn empty_text_uses_empty_fallback() {
        let generator = Canned::ok("  \n");
        assert_eq!(get_encouragement(&generator, "sad").await, EMPTY_FALLBACK);
    }

    #[tokio::test]
    async fn errors_use_network_fallback() {
        let generator = Canned::failing(|| HypeError::Status(503));
        assert_eq!(get_encouragement(&generator, "sad").await, NETWORK_FALLBACK);

        let generator = Canned::failing(|| HypeError::MissingApiKey);
        assert_eq!(get_encouragement(&generator, "sad").await, NETWORK_FALLBACK);
    }

    #[tokio::test]
    async fn empty_mood_still_answers() {
        let generator = Canned::ok("يلا بينا");
        assert_eq!(get_encouragement(&generator, "").await, "يلا بينا");
        assert!(generator.prompts.borrow()[0].contains(r#"they feel: """#));
    }

    #[test]
    fn prompt_keeps_the_guidelines() {
        let prompt = build_prompt("محدش مقدرني");
        assert!(prompt.contains("محدش مقدرني"));
        assert!(prompt.contains("max 3 sentences"));
        assert!(prompt.contains("Egyptian slang"));
    }
}
