//! Utility modules for common functionality
//!
//! This module provides logging and configuration support used throughout the application.

pub mod logger;
pub mod config;
