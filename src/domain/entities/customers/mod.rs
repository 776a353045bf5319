//! 고객 엔티티 모듈
//!
//! 고객 생명주기의 경계마다 별도의 값 타입을 사용합니다.
//!
//! | 타입 | 용도 |
//! |------|------|
//! | [`CustomerRegistration`] | 생성 입력 (평문 비밀번호 포함) |
//! | [`Customer`] | 도메인 값 (비밀번호 해시만 보관) |
//! | [`CustomerUpdate`] | 수정 입력 (이름, 이메일만) |
//! | [`CustomerDocument`] | MongoDB 저장 레코드 |
//! | [`CachedCustomer`] | Redis 캐시 값 (비밀번호 해시 제외) |

pub mod customer;

pub use customer::*;
