use crate::domain::model::{Action, PlayRequest};

/// 組合請求目標：`base` + 動作路徑 + 識別字。
///
/// 純字串串接，不做編碼、不做驗證，也不處理 `base` 結尾的斜線。
pub fn build_url(base: &str, action: Action, identifier: &str) -> String {
    let segment = action.path_segment();
    let mut url = String::with_capacity(base.len() + segment.len() + identifier.len());
    url.push_str(base);
    url.push_str(segment);
    url.push_str(identifier);
    url
}

pub fn request_url(base: &str, request: &PlayRequest) -> String {
    build_url(base, request.action, &request.identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "http://0.0.0.0:8001";

    #[test]
    fn test_build_chord_url() {
        assert_eq!(
            build_url(HOST, Action::PlayChord, "CEG_C"),
            "http://0.0.0.0:8001/play_chord/CEG_C"
        );
    }

    #[test]
    fn test_build_note_url() {
        assert_eq!(
            build_url(HOST, Action::PlayNote, "A"),
            "http://0.0.0.0:8001/play_note/A"
        );
    }

    #[test]
    fn test_identifier_is_not_encoded() {
        for id in ["C# E G#", "Bb/3", "ドミソ", "?x=1", ""] {
            let url = build_url(HOST, Action::PlayChord, id);
            assert_eq!(url, format!("{}/play_chord/{}", HOST, id));
        }
    }

    #[test]
    fn test_trailing_slash_is_kept() {
        assert_eq!(
            build_url("http://host/", Action::PlayNote, "C"),
            "http://host//play_note/C"
        );
    }

    #[test]
    fn test_request_url_for_note_in_octave() {
        let request = PlayRequest::note_in_octave("C", 4);
        assert_eq!(request_url(HOST, &request), "http://0.0.0.0:8001/play_note/C/4");
    }
}
