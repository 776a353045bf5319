//! # 문자열 유틸리티
//!
//! 요청 검증과 저장소 쿼리 작성에 쓰이는 공통 문자열 함수들입니다.

use validator::ValidationError;

/// `validator`의 `custom` 검증용: 빈 문자열이나 공백만 있는 값을 거부합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct PostCustomerRequest {
///     #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
///     name: String,
/// }
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// 문자열이 비어 있거나 공백만으로 구성되어 있는지 확인
///
/// # 예제
/// ```rust,ignore
/// assert!(is_blank("   "));
/// assert!(!is_blank("Ma"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// MongoDB `$regex` 연산자에 넣을 수 있도록 정규식 메타 문자를 이스케이프합니다.
///
/// 이름 부분 일치 검색이 사용자 입력을 정규식이 아닌 리터럴로 다루게 합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(escape_regex("a.b"), "a\\.b");
/// ```
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#' | '-'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Maicon").is_ok());
        assert!(validate_not_blank("  Duda  ").is_ok());

        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_escape_regex_plain_text_unchanged() {
        assert_eq!(escape_regex("Maicon"), "Maicon");
        assert_eq!(escape_regex("안녕하세요"), "안녕하세요");
    }

    #[test]
    fn test_escape_regex_meta_characters() {
        assert_eq!(escape_regex("a.b"), "a\\.b");
        assert_eq!(escape_regex("(x)*"), "\\(x\\)\\*");
        assert_eq!(escape_regex("^$"), "\\^\\$");
        assert_eq!(escape_regex("c:\\"), "c:\\\\");
    }
}
