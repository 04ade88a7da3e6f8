//! Gemini generation client
//!
//! Two remote operations live behind the [`GenerationBackend`] trait: ask the
//! model for a pairing, and ask it for integration snippets once a pairing
//! exists. Both calls pin the model's output to a JSON `responseSchema`, so a
//! successful response is guaranteed to deserialize into the typed contract
//! and the rest of the system never re-validates it.
//!
//! API: <https://ai.google.dev/api/generate-content>

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{ConfigError, GenerationError, GenerationOp, GenerationResult};
use crate::models::{CodeSnippets, PairingResult};

/// Default endpoint for the Gemini REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const PAIRING_SYSTEM_INSTRUCTION: &str = "You are an expert typographer and design assistant. \
    Your goal is to provide professional font pairings for web design. For any given font, you \
    must recommend a complementary headline font, body font, and accent font exclusively from \
    the Google Fonts library. Ensure the font names are spelled correctly for use with the \
    Google Fonts API.";

const SNIPPETS_SYSTEM_INSTRUCTION: &str = "You are an expert web development assistant \
    specializing in typography. You provide clean, correct, and ready-to-use code snippets for \
    HTML, CSS, and Tailwind CSS based on a given font pairing. The font names must be correct \
    for the Google Fonts API.";

/// The seam between the controllers and the remote model.
///
/// The production implementation is [`GeminiClient`]; tests substitute their
/// own canned backends.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Recommend a headline/body/accent pairing for the given font.
    async fn request_pairing(&self, font_name: &str) -> GenerationResult<PairingResult>;

    /// Generate HTML/CSS/Tailwind integration snippets for a pairing.
    async fn request_snippets(
        &self,
        font_name: &str,
        pairing: &PairingResult,
    ) -> GenerationResult<CodeSnippets>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client for the given model and credential.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ConfigError::HttpClient { source })?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Point the client at a different endpoint. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One schema-constrained `generateContent` round trip, returning the
    /// candidate text.
    async fn generate(
        &self,
        op: GenerationOp,
        system_instruction: &str,
        prompt: &str,
        response_schema: Value,
    ) -> GenerationResult<String> {
        // The key travels as a query parameter; errors and logs carry the
        // endpoint without it.
        let endpoint = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let url = format!("{}?key={}", endpoint, self.api_key);

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "systemInstruction": {
                "parts": [{ "text": system_instruction }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema
            }
        });

        tracing::debug!(op = %op, model = %self.model, "sending generation request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| GenerationError::network(op, &endpoint, source))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::backend(op, status, body));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(op, format!("invalid response envelope: {}", e)))?;

        let text = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| GenerationError::parse(op, "response contained no candidate text"))?;

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn request_pairing(&self, font_name: &str) -> GenerationResult<PairingResult> {
        let op = GenerationOp::Pairing;
        let text = self
            .generate(op, PAIRING_SYSTEM_INSTRUCTION, &pairing_prompt(font_name), pairing_schema())
            .await?;

        let pairing: PairingResult = serde_json::from_str(&text)
            .map_err(|e| GenerationError::parse(op, e.to_string()))?;

        tracing::info!(
            font = font_name,
            headline = %pairing.headline.name,
            body = %pairing.body.name,
            accent = %pairing.accent.name,
            "pairing generated"
        );
        Ok(pairing)
    }

    async fn request_snippets(
        &self,
        font_name: &str,
        pairing: &PairingResult,
    ) -> GenerationResult<CodeSnippets> {
        let op = GenerationOp::Snippets;
        let text = self
            .generate(
                op,
                SNIPPETS_SYSTEM_INSTRUCTION,
                &snippets_prompt(font_name, pairing),
                snippets_schema(),
            )
            .await?;

        let snippets: CodeSnippets = serde_json::from_str(&text)
            .map_err(|e| GenerationError::parse(op, e.to_string()))?;

        tracing::info!(font = font_name, "snippets generated");
        Ok(snippets)
    }
}

/// User prompt for the pairing operation.
pub fn pairing_prompt(font_name: &str) -> String {
    format!(
        "The user has selected the font \"{}\". Please provide a font pairing recommendation \
         from the Google Fonts library.",
        font_name
    )
}

/// User prompt for the snippet operation, embedding the chosen pairing.
pub fn snippets_prompt(font_name: &str, pairing: &PairingResult) -> String {
    format!(
        "Given the font pairing for the base font \"{}\":\n\
         - Headline: {} (weight: {})\n\
         - Body: {} (weight: {})\n\
         - Accent: {} (weight: {})\n\
         \n\
         Generate code snippets for a web developer to use this pairing.\n\
         - The HTML snippet must include preconnect links and a single <link> to Google Fonts \
         for all unique families and weights.\n\
         - The CSS snippet must include an @import, CSS custom properties for each font role, \
         and example usage.\n\
         - The Tailwind snippet must show the full content for a tailwind.config.js file that \
         extends the theme.",
        font_name,
        pairing.headline.name,
        pairing.headline.weight,
        pairing.body.name,
        pairing.body.weight,
        pairing.accent.name,
        pairing.accent.weight,
    )
}

/// Output schema for the pairing operation: three name/weight objects plus a
/// short rationale, all required.
pub fn pairing_schema() -> Value {
    let font = |example_name: &str, example_weight: u16, role: &str| {
        json!({
            "type": "OBJECT",
            "description": format!("The recommended font for {}.", role),
            "properties": {
                "name": {
                    "type": "STRING",
                    "description": format!(
                        "The Google Font family name (e.g., \"{}\").", example_name
                    )
                },
                "weight": {
                    "type": "INTEGER",
                    "description": format!("A suitable font weight, e.g., {}.", example_weight)
                }
            },
            "required": ["name", "weight"]
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "headline": font("Roboto Slab", 700, "headlines"),
            "body": font("Open Sans", 400, "body text"),
            "accent": font("Playfair Display", 600, "accents or secondary headings"),
            "reasoning": {
                "type": "STRING",
                "description": "A 2-3 sentence explanation of why this font combination works \
                    well together, explaining the principles of contrast, harmony, and mood."
            }
        },
        "required": ["headline", "body", "accent", "reasoning"]
    })
}

/// Output schema for the snippet operation: three non-empty strings, all
/// required.
pub fn snippets_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "html": {
                "type": "STRING",
                "description": "A string containing the complete HTML <link> tags to import \
                    all necessary Google Fonts. Preconnect links should be included. All font \
                    families and weights should be in a single request to Google Fonts."
            },
            "css": {
                "type": "STRING",
                "description": "A string containing the complete CSS code. It must include the \
                    @import rule for Google Fonts, define CSS custom properties \
                    (--font-headline, --font-body, --font-accent), and provide example usage \
                    for h1, body, and an .accent-text class."
            },
            "tailwind": {
                "type": "STRING",
                "description": "A string containing the full JavaScript code for a \
                    tailwind.config.js file. It must import 'defaultTheme' from \
                    'tailwindcss/defaultTheme' and extend the 'fontFamily' with 'headline', \
                    'body', and 'accent' keys, spreading the default theme's sans/serif fonts \
                    as fallbacks."
            }
        },
        "required": ["html", "css", "tailwind"]
    })
}
