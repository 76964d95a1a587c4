//! Hours Calculator
//!
//! This crate reads timesheet workbooks, classifies each logged date as a
//! workday or a holiday, and reports hours worked against hours required
//! after crediting leave taken within the configured allowances.

#![warn(missing_docs)]

pub mod calculation;
pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod timesheet;
