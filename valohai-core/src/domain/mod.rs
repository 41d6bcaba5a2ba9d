//! Core domain types
//!
//! This module contains the domain structures shared by every consumer of the
//! Valohai API: the execution status vocabulary and how it classifies into
//! retry / fail / done buckets.

pub mod execution;
