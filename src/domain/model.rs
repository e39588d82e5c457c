use serde::Deserialize;
use std::time::Duration;

/// 遠端播放動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PlayChord,
    PlayNote,
}

impl Action {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Action::PlayChord => "/play_chord/",
            Action::PlayNote => "/play_note/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    pub action: Action,
    pub identifier: String,
}

impl PlayRequest {
    pub fn chord(chord: impl Into<String>) -> Self {
        Self {
            action: Action::PlayChord,
            identifier: chord.into(),
        }
    }

    pub fn note(note: impl Into<String>) -> Self {
        Self {
            action: Action::PlayNote,
            identifier: note.into(),
        }
    }

    /// 伺服器路由為 `/play_note/{note}/{octave}`
    pub fn note_in_octave(note: &str, octave: i32) -> Self {
        Self::note(format!("{}/{}", note, octave))
    }
}

/// 伺服器回應的確認訊息，例如 `{"status": "play_chord success"}`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayAck {
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub url: String,
    pub status: Option<u16>,
    pub ack: Option<String>,
    pub elapsed: Duration,
}
