//! Uploaded files and their inline `data:` URL form.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;

/// Content type assumed when a multipart part does not declare one.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A file received in a multipart upload. Lives for one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content: Bytes,
    pub content_type: String,
    pub file_name: String,
}

impl UploadedFile {
    pub fn to_data_url(&self) -> String {
        to_data_url(&self.content, &self.content_type)
    }
}

/// Encodes a buffer and its MIME type as `data:<mime>;base64,<payload>`.
/// The MIME string is trusted and embedded as-is.
pub fn to_data_url(content: &[u8], mime_type: &str) -> String {
    format!("data:{mime_type};base64,{}", BASE64.encode(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(token: &str) -> (String, Vec<u8>) {
        let rest = token.strip_prefix("data:").unwrap();
        let (mime, payload) = rest.split_once(";base64,").unwrap();
        (mime.to_string(), BASE64.decode(payload).unwrap())
    }

    #[test]
    fn test_data_url_shape() {
        assert_eq!(to_data_url(b"hi", "text/plain"), "data:text/plain;base64,aGk=");
    }

    #[test]
    fn test_empty_buffer_yields_empty_payload() {
        assert_eq!(to_data_url(&[], "application/pdf"), "data:application/pdf;base64,");
        let (mime, bytes) = decode(&to_data_url(&[], "application/pdf"));
        assert_eq!(mime, "application/pdf");
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_decoding_recovers_buffer_and_mime() {
        let samples: [(&[u8], &str); 3] = [
            (b"%PDF-1.7\n\x00\xff\xfe binary", "application/pdf"),
            (&[0u8; 257], "application/octet-stream"),
            (
                "résumé ✓".as_bytes(),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
        ];
        for (content, mime) in samples {
            let (decoded_mime, decoded) = decode(&to_data_url(content, mime));
            assert_eq!(decoded_mime, mime);
            assert_eq!(decoded, content);
        }
    }

    #[test]
    fn test_uploaded_file_uses_declared_type() {
        let file = UploadedFile {
            content: Bytes::from_static(b"abc"),
            content_type: "image/png".to_string(),
            file_name: "cv.png".to_string(),
        };
        assert_eq!(file.to_data_url(), "data:image/png;base64,YWJj");
    }
}
