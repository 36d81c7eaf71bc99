//! Backend-independent UI primitives: geometry, styles, paint commands,
//! hit-testing and pointer interaction.

pub mod geom;
pub mod input;
pub mod layout;
pub mod painter;
pub mod runtime;
pub mod style;
pub mod text;
pub mod tree;
pub mod widget;
