//! Command classification.

const REGISTER: &str = "/register";
const HELP: &str = "/help";
const COSPLAY: &str = "/cosplay";
const CLEAR: &str = "/clear";
const IMAGE: &str = "/image";

/// What an inbound text message asks for. Produced once by [`Command::parse`] and matched
/// exhaustively by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { token: String },
    Help,
    /// New system message for the user.
    Persona(String),
    Clear,
    Image(String),
    /// Chat, or a page / video summary when the text holds a URL.
    Content(String),
}

impl Command {
    /// First matching prefix wins; the argument is the rest of the trimmed text, trimmed.
    pub fn parse(text: &str) -> Command {
        let text = text.trim();
        let arg = |prefix: &str| text[prefix.len()..].trim().to_string();

        if text.starts_with(REGISTER) {
            Command::Register {
                token: arg(REGISTER),
            }
        } else if text.starts_with(HELP) {
            Command::Help
        } else if text.starts_with(COSPLAY) {
            Command::Persona(arg(COSPLAY))
        } else if text.starts_with(CLEAR) {
            Command::Clear
        } else if text.starts_with(IMAGE) {
            Command::Image(arg(IMAGE))
        } else {
            Command::Content(text.to_string())
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::Help => "help",
            Command::Persona(_) => "cosplay",
            Command::Clear => "clear",
            Command::Image(_) => "image",
            Command::Content(_) => "content",
        }
    }

    /// Image and content requests call the bound model; a failure there discards the window.
    pub fn uses_model(&self) -> bool {
        matches!(self, Command::Image(_) | Command::Content(_))
    }
}
