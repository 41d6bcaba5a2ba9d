//! Valohai Core
//!
//! Core types for talking to the Valohai platform API.
//!
//! This crate contains:
//! - Domain types: the execution status vocabulary and its three-way classification
//! - DTOs: request/response payloads for the platform's REST endpoints

pub mod domain;
pub mod dto;
