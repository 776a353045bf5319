//! # 비밀번호 해싱
//!
//! bcrypt 기반 구현을 제공합니다. cost는 환경별로 다르며 `PasswordConfig`가 결정합니다.
//!
//! | 환경 | cost | 해싱 시간(대략) |
//! |------|------|-----------------|
//! | Development / Test | 4 | ~1ms |
//! | Staging | 10 | ~60ms |
//! | Production | 12 | ~250ms |

use std::time::Instant;

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 단방향 비밀번호 해싱 기능
pub trait PasswordHasher: Send + Sync {
    /// 평문을 해시합니다. 같은 입력이라도 솔트 때문에 결과가 매번 다를 수 있습니다.
    fn hash(&self, plaintext: &str) -> AppResult<String>;

    /// 평문이 해시와 일치하는지 확인합니다.
    fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool>;
}

/// bcrypt 구현
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정(`BCRYPT_COST`, `ENVIRONMENT`)의 cost로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> AppResult<String> {
        let started = Instant::now();
        let hashed = bcrypt::hash(plaintext, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?} (cost {})", started.elapsed(), self.cost);
        Ok(hashed)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        let started = Instant::now();
        let valid = bcrypt::verify(plaintext, hash).context("비밀번호 검증 실패")?;

        log::debug!("Password verification took: {:?}", started.elapsed());
        Ok(valid)
    }
}
