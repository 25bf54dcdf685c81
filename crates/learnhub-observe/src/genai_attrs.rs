//! OpenTelemetry GenAI Semantic Convention attribute names and values used
//! on the inference gateway span.
//!
//! `tracing` field names must be written literally in the macros; these
//! constants are the canonical spelling those literals must match.

// --- Required attributes ---

/// The name of the operation being performed.
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider.
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

// --- Recommended attributes ---

/// The model ID requested.
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

/// Number of caller-supplied messages forwarded (system prompt excluded).
pub const GEN_AI_REQUEST_MESSAGE_COUNT: &str = "gen_ai.request.message_count";

// --- Operation name values ---

/// Streaming chat completion.
pub const OP_CHAT: &str = "chat";
