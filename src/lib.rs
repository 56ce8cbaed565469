//! Oriented-layout engine for composing a furnished room.
//!
//! The engine owns the full lifecycle of a room layout: translating decoded
//! pointer and keyboard events into furniture and wall-feature mutations,
//! gating every candidate state through a separating-axis collision test,
//! re-flowing wall features when the room is resized, and converting the
//! layout to and from a plain JSON document. The host is responsible only for
//! delivering input events, drawing the entity model, and doing file I/O.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session object [`engine::EngineCore`] and the emitted [`engine::Action`]s |
//! | [`model`] | Room, furniture, wall features, and the in-memory [`model::LayoutStore`] |
//! | [`geometry`] | Oriented boxes, SAT overlap, rotated extents, angle snapping |
//! | [`collision`] | Collision gate and whole-layout validation queries |
//! | [`reflow`] | Room resize and wall-feature re-flow |
//! | [`input`] | Pointer/key event types and the gesture state machine |
//! | [`hit`] | Hit-testing furniture bodies, handles, and wall features |
//! | [`view`] | Screen-to-room coordinate mapping |
//! | [`codec`] | Layout document encode/decode |
//! | [`catalog`] | Furniture templates resolved by name |
//! | [`config`] | Engine policy flags |
//! | [`error`] | Library error type |
//! | [`consts`] | Shared numeric constants (minimum sizes, tolerances, etc.) |

pub mod catalog;
pub mod codec;
pub mod collision;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod model;
pub mod reflow;
pub mod view;
