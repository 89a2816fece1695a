//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Jeeves Configuration
# Only override what you want to change -- missing fields use defaults.

[provider]
# base_url = "http://127.0.0.1:8045/v1"
# api_key = ""                 # prefer the JEEVES_API_KEY env var over writing a key here
# wire = "openai-flat"         # openai-flat | turn-based
# request_timeout_secs = 45    # 1-600
# connect_timeout_secs = 10    # 1-120
# max_tokens = 4096            # turn-based generation cap
# temperature = 0.7            # 0.0-2.0

[models]
# default = "gemini-3-flash"
# allowed = [
#     "gemini-3-flash",
#     "gemini-3-pro-high",
#     "gemini-3-pro-low",
#     "gemini-3-pro-image",
#     "gemini-2.5-flash",
#     "gemini-2.5-flash-thinking",
#     "claude-sonnet-4-5",
#     "claude-sonnet-4-5-thinking",
#     "claude-opus-4-5-thinking",
# ]

[chat]
# max_history_turns = 10       # exchanges kept per conversation, oldest dropped first

[defaults]
# city = "佛山顺德"             # seed city for the weather module
"##
    .to_string()
}
