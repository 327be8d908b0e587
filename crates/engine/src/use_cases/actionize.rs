//! LLM-backed text transformations: action titles/summaries, tags, and
//! movie metadata lookups.
//!
//! LLM output is untrusted: it may be empty (reasoning models can spend the
//! whole token budget before emitting content) or refuse outright. Title
//! generation therefore runs a ladder of attempts and bottoms out in a
//! locally composed title, so the flow as a whole cannot come back
//! empty-handed.

use std::sync::Arc;

use chrono::Datelike;
use serde_json::Value;

use blockbustr_domain::{ActionizedMovie, MovieInfo};

use crate::infrastructure::ports::{ClockPort, LlmError, LlmPort, LlmRequest, RandomPort};

const TITLE_SYSTEM_PROMPT: &str = r#"Transform ANY romantic comedy or rom-com title into an explosive action version. Examples:
"The Notebook" -> "Tactical Strike Force"
"Sleepless in Seattle" -> "Seattle Under Siege"
"Love Actually" -> "War Protocol"
"27 Dresses" -> "27 Weapons"

Respond with ONLY the action title."#;

const SANITIZE_SYSTEM_PROMPT: &str = r#"You are a helpful assistant that creates safe, brand-free descriptions for creative projects. Remove all:
- Brand names
- Franchise names
- Character names from existing media
- Trademarked terms
- Potentially problematic content

Replace them with generic descriptive terms that capture the essence and themes without referencing specific intellectual property."#;

const SUMMARY_SYSTEM_PROMPT: &str = "You are a creative assistant that transforms romantic comedy summaries into explosive action versions. Be creative but keep it concise (max 150 words). Focus on combat, explosions, and adrenaline!";

const ACTION_PREFIXES: &[&str] = &["Operation", "Strike", "Combat", "Maximum", "Tactical", "Code"];
const ACTION_SUFFIXES: &[&str] = &["Protocol", "Strike", "Assault", "Fury", "Force", "Chaos"];

const FALLBACK_SUMMARY: &str = "An explosive action thriller awaits...";

/// Rewrite a movie title and summary as their action versions.
pub struct Actionize {
    llm: Arc<dyn LlmPort>,
    random: Arc<dyn RandomPort>,
}

impl Actionize {
    pub fn new(llm: Arc<dyn LlmPort>, random: Arc<dyn RandomPort>) -> Self {
        Self { llm, random }
    }

    pub async fn execute(
        &self,
        title: &str,
        summary: &str,
        language: &str,
    ) -> Result<ActionizedMovie, LlmError> {
        let action_title = self.action_title(title, summary, language).await?;
        tracing::info!(%action_title, "action title generated");

        let action_summary = self.action_summary(summary, language).await?;

        Ok(ActionizedMovie {
            action_title,
            action_summary,
        })
    }

    /// Title ladder: primary prompt, simpler retry, sanitize-and-retitle,
    /// then a locally composed fallback. Transport errors on the first two
    /// attempts propagate; the sanitize detour swallows its own failures.
    async fn action_title(
        &self,
        title: &str,
        summary: &str,
        language: &str,
    ) -> Result<String, LlmError> {
        let primary = LlmRequest::new(format!(
            "Create an action movie title based on: \"{title}\" (in {language})"
        ))
        .with_system_prompt(TITLE_SYSTEM_PROMPT)
        .with_max_tokens(800);

        let mut action_title = strip_quotes(self.llm.generate(primary).await?.content.trim());

        if action_title.is_empty() {
            tracing::warn!("empty action title response, trying simpler prompt");
            let retry = LlmRequest::new(format!(
                "Give me an action movie title inspired by \"{title}\". Just the title, nothing else."
            ))
            .with_max_tokens(1000);
            action_title = strip_quotes(self.llm.generate(retry).await?.content.trim());
        }

        if action_title.is_empty() {
            tracing::warn!("title generation still failed, sanitizing description and regenerating");
            if let Some(regenerated) = self.title_from_sanitized_description(title, summary, language).await {
                action_title = regenerated;
            }
        }

        if action_title.is_empty() {
            action_title = self.local_fallback_title(title);
            tracing::warn!(%action_title, "all LLM attempts failed, using locally composed title");
        }

        Ok(action_title)
    }

    async fn title_from_sanitized_description(
        &self,
        title: &str,
        summary: &str,
        language: &str,
    ) -> Option<String> {
        let sanitize = LlmRequest::new(format!(
            "Create a safe, generic description for a movie originally titled \"{title}\" with this plot: \"{summary}\".\n\nRemove all brand names, franchise references, and trademarked content. Focus on the core themes, genre elements, and story structure without referencing specific properties. Keep it concise (2-3 sentences max)."
        ))
        .with_system_prompt(SANITIZE_SYSTEM_PROMPT)
        .with_max_tokens(1200);

        let description = match self.llm.generate(sanitize).await {
            Ok(response) => response.content.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "sanitization attempt failed");
                return None;
            }
        };
        if description.chars().count() <= 20 {
            return None;
        }

        let retitle = LlmRequest::new(format!(
            "Create an action movie title in {language} based on this concept: \"{description}\". Just the title, nothing else."
        ))
        .with_system_prompt(
            "You are a creative writer specializing in action movie titles. Create an original, explosive action title based on the description provided. Be bold and intense. Respond with ONLY the title, no quotes or explanation.",
        )
        .with_max_tokens(1000);

        match self.llm.generate(retitle).await {
            Ok(response) => {
                let regenerated = strip_quotes(response.content.trim());
                (!regenerated.is_empty()).then_some(regenerated)
            }
            Err(e) => {
                tracing::warn!(error = %e, "retitle from sanitized description failed");
                None
            }
        }
    }

    /// Compose a title locally: random prefix before or suffix after the
    /// original title.
    fn local_fallback_title(&self, title: &str) -> String {
        let use_prefix = self.random.gen_range(0, 1) == 0;
        if use_prefix {
            let index = self.random.gen_range(0, (ACTION_PREFIXES.len() - 1) as i32);
            let prefix = ACTION_PREFIXES[(index.max(0) as usize).min(ACTION_PREFIXES.len() - 1)];
            format!("{prefix} {title}")
        } else {
            let index = self.random.gen_range(0, (ACTION_SUFFIXES.len() - 1) as i32);
            let suffix = ACTION_SUFFIXES[(index.max(0) as usize).min(ACTION_SUFFIXES.len() - 1)];
            format!("{title} {suffix}")
        }
    }

    async fn action_summary(&self, summary: &str, language: &str) -> Result<String, LlmError> {
        let request = LlmRequest::new(format!(
            "Transform this rom-com summary into a hyper-action version in {language}. Make it explosive and full of danger, but keep it under 150 words:\n\n\"{summary}\""
        ))
        .with_system_prompt(SUMMARY_SYSTEM_PROMPT)
        .with_max_tokens(1500);

        let content = self.llm.generate(request).await?.content.trim().to_string();
        if content.is_empty() {
            tracing::warn!("empty summary response, using fallback");
            Ok(FALLBACK_SUMMARY.to_string())
        } else {
            Ok(content)
        }
    }
}

/// Strip one pair of surrounding quotes the model may have added.
fn strip_quotes(text: &str) -> String {
    const QUOTES: &[char] = &['"', '\''];
    let text = text.strip_prefix(QUOTES).unwrap_or(text);
    let text = text.strip_suffix(QUOTES).unwrap_or(text);
    text.trim().to_string()
}

// =============================================================================
// Tags
// =============================================================================

const TAGS_SYSTEM_PROMPT: &str = "You are a creative assistant that generates engaging tags/keywords for action movies. Return ONLY a JSON array of 4-6 short tags (1-2 words each) that capture the essence and themes of the action story. Focus on combat, explosions, intensity, and action elements. Always return valid JSON with an array of strings.";

const FALLBACK_TAGS: &[&str] = &["Romance", "Love Story", "Passion", "AI Generated"];

const MAX_TAGS: usize = 6;

/// Generate 4-6 short tags for an actionized movie. Never fails: any LLM or
/// parse error yields the fixed fallback set.
pub struct GenerateTags {
    llm: Arc<dyn LlmPort>,
}

impl GenerateTags {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub async fn execute(
        &self,
        action_title: &str,
        action_summary: &str,
        genre: &str,
        language: &str,
    ) -> Vec<String> {
        let genre = if genre.trim().is_empty() { "Unknown" } else { genre };
        let request = LlmRequest::new(format!(
            "Generate 4-6 engaging tags in {language} for this action movie:\n\nTitle: {action_title}\n\nSummary: {action_summary}\n\nOriginal Genre: {genre}\n\nReturn only a JSON array of tags like: [\"Tag1\", \"Tag2\", \"Tag3\", \"Tag4\"]"
        ))
        .with_system_prompt(TAGS_SYSTEM_PROMPT)
        .with_max_tokens(150)
        .with_json_mode();

        let content = match self.llm.generate(request).await {
            Ok(response) => response.content,
            Err(e) => {
                tracing::warn!(error = %e, "tag generation failed, using fallback tags");
                return fallback_tags();
            }
        };

        match parse_tags(&content) {
            Some(tags) if !tags.is_empty() => tags,
            _ => {
                tracing::warn!("unusable tags response, using fallback tags");
                fallback_tags()
            }
        }
    }
}

fn fallback_tags() -> Vec<String> {
    FALLBACK_TAGS.iter().map(|t| t.to_string()).collect()
}

/// Accept both a bare JSON array and `{"tags": [...]}`/`{"keywords": [...]}`
/// object shapes.
fn parse_tags(content: &str) -> Option<Vec<String>> {
    let value: Value = serde_json::from_str(content.trim()).ok()?;
    let array = match &value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("tags")
            .or_else(|| map.get("keywords"))
            .and_then(Value::as_array)?,
        _ => return None,
    };
    Some(
        array
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .take(MAX_TAGS)
            .collect(),
    )
}

// =============================================================================
// Movie lookup
// =============================================================================

const LOOKUP_SYSTEM_PROMPT: &str = r#"You are a helpful movie database assistant. When given a movie title (which may be misspelled or incomplete), find the best matching real movie and return information about it.

Always return valid JSON with these exact keys:
- title: The correct/official movie title
- year: Release year as a number
- genre: Main genre(s)
- director: Director name(s)
- summary: A brief plot summary (2-3 sentences)

If the movie title seems misspelled, find the closest matching real movie. If you truly cannot identify any movie, return JSON with title set to the query and a summary explaining you couldn't find information about this specific movie."#;

/// Look up movie metadata through the LLM. Never fails: errors and
/// unparseable replies yield a usable fallback record so the user can still
/// proceed to the action rewrite.
pub struct LookupMovie {
    llm: Arc<dyn LlmPort>,
    clock: Arc<dyn ClockPort>,
}

impl LookupMovie {
    pub fn new(llm: Arc<dyn LlmPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { llm, clock }
    }

    pub async fn execute(&self, query: &str) -> MovieInfo {
        let request = LlmRequest::new(format!(
            "Find information about the movie: \"{query}\""
        ))
        .with_system_prompt(LOOKUP_SYSTEM_PROMPT)
        .with_max_tokens(600)
        .with_json_mode();

        let content = match self.llm.generate(request).await {
            Ok(response) => response.content,
            Err(e) => {
                tracing::warn!(error = %e, "movie lookup failed, using fallback record");
                return self.fallback(query, format!(
                    "\"{query}\" - Let's transform this into an action masterpiece! (Note: Could not retrieve original details due to: {e})"
                ));
            }
        };

        if content.trim().is_empty() {
            tracing::warn!("empty lookup response, using fallback record");
            return self.fallback(query, format!(
                "\"{query}\" - A cinematic masterpiece waiting to be transformed into an action-packed adventure. While we couldn't retrieve all details, we can still create an amazing action version!"
            ));
        }

        match parse_movie_info(&content) {
            Some(info) => info,
            None => {
                tracing::warn!("unparseable lookup response, using fallback record");
                self.fallback(query, format!(
                    "Could not retrieve detailed information for \"{query}\". You can still proceed to create an action version!"
                ))
            }
        }
    }

    fn fallback(&self, query: &str, summary: String) -> MovieInfo {
        MovieInfo {
            title: query.to_string(),
            year: Some(self.clock.now().year()),
            genre: "Drama".to_string(),
            director: "Unknown".to_string(),
            summary,
        }
    }
}

/// Tolerant parse: the year may arrive as a number or a string.
fn parse_movie_info(content: &str) -> Option<MovieInfo> {
    let value: Value = serde_json::from_str(content.trim()).ok()?;
    let map = value.as_object()?;
    let field = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let year = match map.get("year") {
        Some(Value::Number(n)) => n.as_i64().map(|y| y as i32),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    };

    let title = field("title");
    if title.is_empty() {
        return None;
    }
    Some(MovieInfo {
        title,
        year,
        genre: field("genre"),
        director: field("director"),
        summary: field("summary"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};

    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::ports::LlmResponse;

    /// LLM that replays scripted replies and records request prompts.
    struct ScriptedLlm {
        replies: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
        requests: Mutex<Vec<LlmRequest>>,
    }

    impl ScriptedLlm {
        fn new(replies: Vec<Result<LlmResponse, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn reply(content: &str) -> Result<LlmResponse, LlmError> {
            Ok(LlmResponse {
                content: content.to_string(),
            })
        }

        fn call_count(&self) -> usize {
            self.requests.lock().expect("requests lock").len()
        }
    }

    #[async_trait]
    impl LlmPort for ScriptedLlm {
        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
            self.requests.lock().expect("requests lock").push(request);
            self.replies
                .lock()
                .expect("replies lock")
                .pop_front()
                .expect("LLM called more often than scripted")
        }
    }

    fn actionize(llm: Arc<ScriptedLlm>) -> Actionize {
        Actionize::new(llm, Arc::new(FixedRandom(0)))
    }

    #[tokio::test]
    async fn test_happy_path_uses_primary_reply() {
        let llm = ScriptedLlm::new(vec![
            ScriptedLlm::reply("\"War Protocol\""),
            ScriptedLlm::reply("Bombs replace mistletoe across London."),
        ]);
        let result = actionize(llm.clone())
            .execute("Love Actually", "Nine love stories.", "English")
            .await
            .expect("actionize");

        assert_eq!(result.action_title, "War Protocol");
        assert_eq!(result.action_summary, "Bombs replace mistletoe across London.");
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_title_triggers_simpler_retry() {
        let llm = ScriptedLlm::new(vec![
            ScriptedLlm::reply(""),
            ScriptedLlm::reply("Seattle Under Siege"),
            ScriptedLlm::reply("Sleepless snipers."),
        ]);
        let result = actionize(llm.clone())
            .execute("Sleepless in Seattle", "Romance over radio.", "English")
            .await
            .expect("actionize");

        assert_eq!(result.action_title, "Seattle Under Siege");
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_sanitize_detour_recovers_a_title() {
        let llm = ScriptedLlm::new(vec![
            ScriptedLlm::reply(""),
            ScriptedLlm::reply(""),
            ScriptedLlm::reply(
                "A romance about two strangers whose letters cross during a city-wide blackout.",
            ),
            ScriptedLlm::reply("Blackout Protocol"),
            ScriptedLlm::reply("The grid fails. The fight begins."),
        ]);
        let result = actionize(llm.clone())
            .execute("The Shop Around the Corner", "Two rival clerks.", "English")
            .await
            .expect("actionize");

        assert_eq!(result.action_title, "Blackout Protocol");
        assert_eq!(llm.call_count(), 5);
    }

    #[tokio::test]
    async fn test_local_fallback_composes_a_title() {
        let llm = ScriptedLlm::new(vec![
            ScriptedLlm::reply(""),
            ScriptedLlm::reply(""),
            // Sanitized description too short to retitle from.
            ScriptedLlm::reply("too short"),
            ScriptedLlm::reply("Explosions."),
        ]);
        let result = actionize(llm.clone())
            .execute("The Proposal", "A fake engagement.", "English")
            .await
            .expect("actionize");

        // FixedRandom(0) picks the prefix branch and the first prefix.
        assert_eq!(result.action_title, "Operation The Proposal");
        assert_eq!(llm.call_count(), 4);
    }

    #[tokio::test]
    async fn test_transport_error_on_primary_attempt_propagates() {
        let llm = ScriptedLlm::new(vec![Err(LlmError::RequestFailed(
            "connection refused".to_string(),
        ))]);
        let err = actionize(llm.clone())
            .execute("27 Dresses", "Always a bridesmaid.", "English")
            .await
            .expect_err("transport error");

        assert!(matches!(err, LlmError::RequestFailed(_)));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_summary_reply_uses_fallback_text() {
        let llm = ScriptedLlm::new(vec![
            ScriptedLlm::reply("Dress Code: Lethal"),
            ScriptedLlm::reply("   "),
        ]);
        let result = actionize(llm.clone())
            .execute("27 Dresses", "Always a bridesmaid.", "English")
            .await
            .expect("actionize");

        assert_eq!(result.action_summary, FALLBACK_SUMMARY);
    }

    #[test]
    fn test_strip_quotes_removes_one_pair() {
        assert_eq!(strip_quotes("\"War Protocol\""), "War Protocol");
        assert_eq!(strip_quotes("'War Protocol'"), "War Protocol");
        assert_eq!(strip_quotes("War Protocol"), "War Protocol");
        assert_eq!(strip_quotes("\"\"nested\"\""), "\"nested\"");
    }

    #[tokio::test]
    async fn test_tags_parse_bare_array() {
        let llm = ScriptedLlm::new(vec![ScriptedLlm::reply(
            r#"["Combat", "Explosions", "Siege", "Betrayal"]"#,
        )]);
        let tags = GenerateTags::new(llm)
            .execute("War Protocol", "Boom.", "Romance", "English")
            .await;
        assert_eq!(tags, vec!["Combat", "Explosions", "Siege", "Betrayal"]);
    }

    #[tokio::test]
    async fn test_tags_parse_object_shape_and_cap() {
        let llm = ScriptedLlm::new(vec![ScriptedLlm::reply(
            r#"{"tags": ["A", "B", "C", "D", "E", "F", "G", "H"]}"#,
        )]);
        let tags = GenerateTags::new(llm)
            .execute("War Protocol", "Boom.", "", "English")
            .await;
        assert_eq!(tags.len(), MAX_TAGS);
    }

    #[tokio::test]
    async fn test_tags_fall_back_on_garbage_and_errors() {
        let llm = ScriptedLlm::new(vec![ScriptedLlm::reply("not json at all")]);
        let tags = GenerateTags::new(llm)
            .execute("War Protocol", "Boom.", "Romance", "English")
            .await;
        assert_eq!(tags, fallback_tags());

        let llm = ScriptedLlm::new(vec![Err(LlmError::RequestFailed("down".to_string()))]);
        let tags = GenerateTags::new(llm)
            .execute("War Protocol", "Boom.", "Romance", "English")
            .await;
        assert_eq!(tags, fallback_tags());
    }

    fn lookup(llm: Arc<ScriptedLlm>) -> LookupMovie {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).single().expect("valid"));
        LookupMovie::new(llm, Arc::new(clock))
    }

    #[tokio::test]
    async fn test_lookup_parses_reply() {
        let llm = ScriptedLlm::new(vec![ScriptedLlm::reply(
            r#"{"title": "Love Actually", "year": 2003, "genre": "Romance/Comedy", "director": "Richard Curtis", "summary": "Nine stories."}"#,
        )]);
        let info = lookup(llm).execute("love actualy").await;
        assert_eq!(info.title, "Love Actually");
        assert_eq!(info.year, Some(2003));
    }

    #[tokio::test]
    async fn test_lookup_accepts_string_year() {
        let llm = ScriptedLlm::new(vec![ScriptedLlm::reply(
            r#"{"title": "Love Actually", "year": "2003", "genre": "", "director": "", "summary": ""}"#,
        )]);
        let info = lookup(llm).execute("love actually").await;
        assert_eq!(info.year, Some(2003));
    }

    #[tokio::test]
    async fn test_lookup_never_fails() {
        let llm = ScriptedLlm::new(vec![Err(LlmError::RequestFailed("down".to_string()))]);
        let info = lookup(llm).execute("Some Movie").await;
        assert_eq!(info.title, "Some Movie");
        assert_eq!(info.year, Some(2026));
        assert_eq!(info.genre, "Drama");

        let llm = ScriptedLlm::new(vec![ScriptedLlm::reply("")]);
        let info = lookup(llm).execute("Some Movie").await;
        assert_eq!(info.title, "Some Movie");

        let llm = ScriptedLlm::new(vec![ScriptedLlm::reply("{broken")]);
        let info = lookup(llm).execute("Some Movie").await;
        assert_eq!(info.title, "Some Movie");
    }
}
