pub mod cosmetic;
