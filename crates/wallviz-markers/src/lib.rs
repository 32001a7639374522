//! `wallviz-markers` – virtual wall marker engine.
//!
//! Converts the planning constraints submitted each cycle (stop lines,
//! slow-down zones, deadlines) into a [`MarkerArray`][wallviz_types::MarkerArray]
//! for the scene viewer, deleting markers from earlier cycles that are no
//! longer backed by a wall.
//!
//! # Modules
//!
//! - [`creator`] – [`VirtualWallMarkerCreator`][creator::VirtualWallMarkerCreator]:
//!   the session-long engine planning code talks to.
//! - [`reconcile`] – [`reconcile`][reconcile::reconcile]: the pure
//!   snapshot / emit / retract / prune pass over
//!   [`NamespaceCounters`][reconcile::NamespaceCounters].
//! - [`renderer`] – the [`WallRenderer`][renderer::WallRenderer] capability,
//!   the stock [`VirtualWallRenderer`][renderer::VirtualWallRenderer] and
//!   per-style dispatch in [`WallRenderers`][renderer::WallRenderers].
//! - [`store`] – [`WallSpecStore`][store::WallSpecStore]: walls queued for
//!   the next pass.
//! - [`config`] – [`MarkerConfig`][config::MarkerConfig]: TOML-backed
//!   appearance settings.
//! - [`telemetry`] – [`init_tracing`][telemetry::init_tracing].

pub mod config;
pub mod creator;
pub mod reconcile;
pub mod renderer;
pub mod store;
pub mod telemetry;

pub use config::{ConfigError, MarkerConfig};
pub use creator::VirtualWallMarkerCreator;
pub use reconcile::{reconcile, MarkerCount, NamespaceCounters, Reconciliation};
pub use renderer::{VirtualWallRenderer, WallRenderRequest, WallRenderer, WallRenderers};
pub use store::WallSpecStore;
