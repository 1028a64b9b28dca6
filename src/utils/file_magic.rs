use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// 拆分 data URL，返回 (媒体类型, base64 载荷)
///
/// 形如 `data:image/jpeg;base64,<payload>`；格式不符返回 None。
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    if mime.is_empty() || payload.is_empty() {
        return None;
    }
    Some((mime, payload))
}

/// 解码 base64 载荷
pub fn decode_payload(payload: &str) -> Option<Vec<u8>> {
    BASE64.decode(payload).ok()
}

/// 验证文件内容的魔术字节是否与声明的媒体类型匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `mime_type` - 声明的媒体类型（如 "image/jpeg"）
///
/// # Returns
/// * `true` - 魔术字节匹配
/// * `false` - 魔术字节不匹配或类型不受支持
pub fn validate_magic_bytes(data: &[u8], mime_type: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match mime_type.to_lowercase().as_str() {
        // 图片格式
        "image/png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        "image/jpeg" | "image/jpg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        "image/webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",

        // 文档格式
        "application/pdf" => data.starts_with(b"%PDF"),

        // 其它类型 - 默认拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_data_url() {
        let (mime, payload) = split_data_url("data:image/jpeg;base64,/9j/AAA=").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(payload, "/9j/AAA=");
    }

    #[test]
    fn test_split_data_url_rejects_malformed() {
        assert!(split_data_url("image/jpeg;base64,xxx").is_none());
        assert!(split_data_url("data:image/jpeg,xxx").is_none());
        assert!(split_data_url("data:;base64,xxx").is_none());
        assert!(split_data_url("data:image/jpeg;base64,").is_none());
    }

    #[test]
    fn test_png_magic() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(validate_magic_bytes(&png_header, "image/png"));
        assert!(validate_magic_bytes(&png_header, "IMAGE/PNG"));
        assert!(!validate_magic_bytes(&png_header, "image/jpeg"));
    }

    #[test]
    fn test_jpeg_magic() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_magic_bytes(&jpeg_header, "image/jpeg"));
        assert!(validate_magic_bytes(&jpeg_header, "image/jpg"));
        assert!(!validate_magic_bytes(&jpeg_header, "image/png"));
    }

    #[test]
    fn test_pdf_magic() {
        let pdf_header = b"%PDF-1.4";
        assert!(validate_magic_bytes(pdf_header, "application/pdf"));
        assert!(!validate_magic_bytes(pdf_header, "image/jpeg"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], "image/png"));
        assert!(!validate_magic_bytes(&[], "application/pdf"));
    }

    #[test]
    fn test_unknown_mime() {
        let data = [0x00, 0x01, 0x02, 0x03];
        assert!(!validate_magic_bytes(&data, "application/x-msdownload"));
        assert!(!validate_magic_bytes(&data, "text/html"));
    }

    #[test]
    fn test_decode_payload() {
        assert_eq!(decode_payload("aGVsbG8=").unwrap(), b"hello");
        assert!(decode_payload("not base64!!!").is_none());
    }
}
