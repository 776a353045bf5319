//! 도메인 이벤트 리스너

pub mod update_sold_book;

pub use update_sold_book::UpdateSoldBookListener;
