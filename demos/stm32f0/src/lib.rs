#![no_std]

pub mod systick;
pub mod user_button;
