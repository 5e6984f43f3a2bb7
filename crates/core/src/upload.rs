//! Audio upload gate for submissions.
//!
//! Only MP3 files up to 150 MiB are accepted. The gate runs before any
//! bytes are relayed to the music backend.

use crate::error::CoreError;

/// Largest accepted audio upload (150 MiB).
pub const MAX_AUDIO_UPLOAD_BYTES: u64 = 150 * 1024 * 1024;

/// Required file extension (compared case-insensitively).
pub const AUDIO_EXTENSION: &str = ".mp3";

/// MIME types browsers and tools report for MP3 audio.
pub const ACCEPTED_AUDIO_TYPES: &[&str] =
    &["audio/mpeg", "audio/mp3", "audio/mpeg3", "audio/x-mpeg-3"];

/// Validate the name, declared content type, and size of an audio upload.
pub fn validate_audio_upload(
    filename: &str,
    content_type: Option<&str>,
    size_bytes: u64,
) -> Result<(), CoreError> {
    validate_audio_file(filename, content_type)?;
    validate_audio_size(size_bytes)
}

/// Validate the name and declared content type, before any bytes are read.
///
/// A missing content type is tolerated; multipart clients do not always
/// send one. Parameters such as `; charset=binary` are ignored.
pub fn validate_audio_file(filename: &str, content_type: Option<&str>) -> Result<(), CoreError> {
    if !filename.to_ascii_lowercase().ends_with(AUDIO_EXTENSION) {
        return Err(CoreError::Validation(format!(
            "File '{filename}' is not an MP3 file"
        )));
    }

    if let Some(ct) = content_type {
        if !is_accepted_audio_type(ct) {
            return Err(CoreError::Validation(format!(
                "Unsupported content type '{ct}'. Only MP3 audio is accepted"
            )));
        }
    }

    Ok(())
}

/// Validate only the size of an audio upload.
pub fn validate_audio_size(size_bytes: u64) -> Result<(), CoreError> {
    if size_bytes == 0 {
        return Err(CoreError::Validation("Audio file is empty".into()));
    }
    if size_bytes > MAX_AUDIO_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "Audio file is {} MB; the limit is {} MB",
            size_bytes.div_ceil(1024 * 1024),
            MAX_AUDIO_UPLOAD_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Whether `content_type` (possibly with parameters) names MP3 audio.
pub fn is_accepted_audio_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    ACCEPTED_AUDIO_TYPES.contains(&essence.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_mp3_at_limit() {
        assert!(validate_audio_upload("song.mp3", Some("audio/mpeg"), MAX_AUDIO_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(validate_audio_upload("SONG.MP3", None, 1024).is_ok());
    }

    #[test]
    fn rejects_one_byte_over_limit() {
        let result = validate_audio_upload("song.mp3", None, MAX_AUDIO_UPLOAD_BYTES + 1);
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("150 MB"));
    }

    #[test]
    fn rejects_empty_file() {
        assert_matches!(
            validate_audio_upload("song.mp3", None, 0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_wav_extension() {
        assert_matches!(
            validate_audio_upload("song.wav", Some("audio/mpeg"), 10),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_non_mp3_content_type() {
        assert_matches!(
            validate_audio_upload("song.mp3", Some("audio/wav"), 10),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn file_check_needs_no_size() {
        assert!(validate_audio_file("demo.mp3", Some("audio/mp3")).is_ok());
        assert_matches!(
            validate_audio_file("demo.flac", None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        assert!(is_accepted_audio_type("Audio/MPEG; charset=binary"));
        assert!(!is_accepted_audio_type("application/octet-stream"));
    }
}
