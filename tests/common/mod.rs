#![allow(dead_code)]

pub mod asserts;
pub mod dummy_data;
pub mod environment;
