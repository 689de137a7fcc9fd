mod bullets;
mod common;
mod scoring;
