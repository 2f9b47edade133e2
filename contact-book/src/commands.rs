pub mod als;
pub mod cnt;
pub mod eml;
pub mod lst;
pub mod rem;
pub mod sav;
pub mod traits;
