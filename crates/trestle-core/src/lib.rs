//! Core types and traits for Trestle widgets.
//!
//! This crate provides the foundation the widget crate builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] and the shared [`palette`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - The [`Widget`] and [`Canvas`] traits plus a [`RecordingCanvas`]
//! - The markup tree widgets render to: [`Node`], [`Element`], [`ClassList`]

mod canvas;
mod class_list;
mod color;
mod constraints;
mod event;
mod geometry;
mod id;
pub mod markup;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use class_list::ClassList;
pub use color::{palette, Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use id::ElementId;
pub use markup::{Attribute, Element, Node};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};
