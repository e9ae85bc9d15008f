//! Text-to-speech seam for reading coach messages aloud.

/// Speech output. Implementations decide whether playback is synchronous.
pub trait TextToSpeech {
    fn speak(&mut self, text: &str);
    fn cancel(&mut self);
    fn is_speaking(&self) -> bool;
}

/// Prints utterances instead of voicing them. Playback completes
/// immediately, so it is never left speaking.
#[derive(Debug, Default)]
pub struct ConsoleSpeech {
    spoken: Vec<String>,
}

impl ConsoleSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything spoken so far, oldest first
    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }
}

impl TextToSpeech for ConsoleSpeech {
    fn speak(&mut self, text: &str) {
        tracing::debug!(chars = text.len(), "speaking");
        println!("🔊 {}", text);
        self.spoken.push(text.to_string());
    }

    fn cancel(&mut self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}
