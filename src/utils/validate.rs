use once_cell::sync::Lazy;
use regex::Regex;

// 班级名形如 "9-A"：年级数字 + 连字符 + 大写字母
static CLASS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}-[A-Z]$").expect("Invalid class name regex"));

/// 校验班级名格式
pub fn validate_class_name(class_name: &str) -> Result<(), &'static str> {
    if !CLASS_NAME_RE.is_match(class_name) {
        return Err("Class name must look like '9-A' (grade, hyphen, section letter)");
    }
    Ok(())
}

/// 校验正确率是否在 0-100 范围内
pub fn validate_accuracy(accuracy: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&accuracy) {
        return Err("Accuracy must be between 0 and 100");
    }
    Ok(())
}

/// 校验科目名非空
pub fn validate_subject(subject: &str) -> Result<(), &'static str> {
    if subject.trim().is_empty() {
        return Err("Subject must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_class_names() {
        assert!(validate_class_name("5-A").is_ok());
        assert!(validate_class_name("9-A").is_ok());
        assert!(validate_class_name("11-V").is_ok());
    }

    #[test]
    fn test_invalid_class_names() {
        assert!(validate_class_name("").is_err());
        assert!(validate_class_name("9A").is_err());
        assert!(validate_class_name("9-a").is_err());
        assert!(validate_class_name("ninth-A").is_err());
        assert!(validate_class_name("123-A").is_err());
    }

    #[test]
    fn test_accuracy_range() {
        assert!(validate_accuracy(0).is_ok());
        assert!(validate_accuracy(78).is_ok());
        assert!(validate_accuracy(100).is_ok());
        assert!(validate_accuracy(-1).is_err());
        assert!(validate_accuracy(101).is_err());
    }

    #[test]
    fn test_subject() {
        assert!(validate_subject("Matematika").is_ok());
        assert!(validate_subject("   ").is_err());
    }
}
