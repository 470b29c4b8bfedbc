//! # conveyor-etl
//!
//! A concurrent batch data-movement engine built on Tokio.
//!
//! One **source** feeds a **transform** and fans out to any number of
//! **sinks**; every source→sink chain runs as its own job, failures stay
//! inside the job that caused them, and each completed job's outcome can be
//! fanned out to report observers.
//!
//! ## Features
//!
//! - **Fan-out execution**: one job per sink, all started concurrently
//! - **Per-instance serialization** of shared sources and transforms
//! - **Failure as data**: phase-tagged errors inside [`job::JobResult`],
//!   never panics or early aborts
//! - **Composable topologies**: processors aggregate into (nestable)
//!   collections behind one [`processor::Pipeline`] contract
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use conveyor_etl::processor::{Pipeline, ProcessorBuilder};
//!
//! let mut topology = ProcessorBuilder::with_sinks(vec![warehouse, audit_log])
//!     .add_source("orders", orders_source, order_mapper)
//!     .add_report(outcome_printer)
//!     .build();
//!
//! for handle in topology.run() {
//!     let result = handle.await?;
//!     if !result.completed_without_errors() {
//!         eprintln!("{} failed: {}", result.sink_id(), result.errors()[0]);
//!     }
//! }
//! topology.close().await?;
//! ```
//!
//! ## Modules
//!
//! - [`components`] - Capability traits implemented by sources, transforms,
//!   sinks and report observers
//! - [`job`] - Job outcomes and phase-tagged errors
//! - [`processor`] - Job fan-out, topology composition and fluent assembly

pub mod components;
pub mod job;
pub mod processor;
