//! Random secrets for newly created access keys.

mod generator;

pub use generator::{
    class_counts, generate_random_string, generate_random_string_with, DIGITS, LETTERS,
    MIN_SECRET_LENGTH, SPECIALS,
};
