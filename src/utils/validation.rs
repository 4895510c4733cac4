//! Reference validation for submitted links

use crate::utils::error::ValidationError;

/// Length of a bare YouTube video id
pub const VIDEO_ID_LEN: usize = 11;

/// Check that `reference` plausibly points at a YouTube video or playlist.
///
/// Accepts anything mentioning `youtube.com` or `youtu.be`, or a bare
/// 11-character id. The caller trims user input first.
pub fn validate(reference: &str) -> Result<(), ValidationError> {
    if reference.trim().is_empty() {
        return Err(ValidationError::Missing);
    }

    if reference.contains("youtube.com")
        || reference.contains("youtu.be")
        || is_bare_video_id(reference)
    {
        Ok(())
    } else {
        Err(ValidationError::Malformed)
    }
}

/// Exactly 11 characters of `[A-Za-z0-9_-]`
pub fn is_bare_video_id(reference: &str) -> bool {
    reference.len() == VIDEO_ID_LEN
        && reference
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_links_and_bare_ids() {
        assert!(validate("https://www.youtube.com/watch?v=dQw4w9WgXcQ").is_ok());
        assert!(validate("https://youtu.be/dQw4w9WgXcQ").is_ok());
        assert!(validate("https://youtube.com/playlist?list=PL123").is_ok());
        assert!(validate("dQw4w9WgXcQ").is_ok());
        assert!(validate("a-b_c-d_e-f").is_ok());
    }

    #[test]
    fn empty_and_blank_are_missing() {
        assert_eq!(validate(""), Err(ValidationError::Missing));
        assert_eq!(validate("   \t"), Err(ValidationError::Missing));
    }

    #[test]
    fn everything_else_is_malformed() {
        assert_eq!(validate("not a link"), Err(ValidationError::Malformed));
        assert_eq!(validate("dQw4w9WgXc"), Err(ValidationError::Malformed));
        assert_eq!(validate("dQw4w9WgXcQQ"), Err(ValidationError::Malformed));
        assert_eq!(validate("dQw4w9WgX.Q"), Err(ValidationError::Malformed));
        assert_eq!(validate("https://vimeo.com/1234"), Err(ValidationError::Malformed));
    }

    #[test]
    fn bare_id_rejects_multibyte_lookalikes() {
        // 11 chars but more than 11 bytes
        assert!(!is_bare_video_id("dQw4w9WgXcé"));
    }
}
