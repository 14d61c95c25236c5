//! Quizforge - Quiz Authoring and Scoring Service
//!
//! This crate implements quiz authoring (single-choice, multiple-choice and
//! free-text questions) and deterministic automatic scoring of submitted
//! answers against stored correct-answer data.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
