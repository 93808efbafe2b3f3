//! UI module for the matrix panel
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Panel-specific UI with Message handling
//! - **Animation** (`animation`): Hover and dialog transitions

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;
