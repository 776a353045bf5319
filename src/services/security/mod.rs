//! 보안 서비스 모듈
//!
//! 비밀번호 단방향 해싱을 [`PasswordHasher`] trait으로 추상화합니다.
//! 서비스는 생성 시점에 `Arc<dyn PasswordHasher>`로 주입받습니다.

pub mod password_hasher;

pub use password_hasher::{BcryptPasswordHasher, PasswordHasher};
