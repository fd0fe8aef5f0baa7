pub const PLAY_AUDIO_SCRIPT: &str = "function playAudio(url) { new Audio(url).play(); }";

/// The `onclick` expression that plays `url` once.
pub fn play_audio(url: &str) -> String {
    // a JSON string literal is a valid JS string literal
    let literal = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_owned());
    format!("playAudio({literal})")
}
