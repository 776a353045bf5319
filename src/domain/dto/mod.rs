//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 요청 본문은 `validator`로 검증되고, 응답은 도메인 값에서 `From`으로 변환됩니다.
//! 응답 DTO는 비밀번호 해시나 역할 같은 내부 필드를 노출하지 않습니다.
//!
//! # Modules
//!
//! - [`customers`] - 고객 생성/수정 요청, 고객 응답
//! - [`books`] - 도서 등록 요청, 도서 응답
//! - [`purchases`] - 구매 요청, 구매 응답

pub mod books;
pub mod customers;
pub mod purchases;
