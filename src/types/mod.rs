//! Core value types shared by the layout and animation models

pub mod bitfield;
pub mod byte_order;
pub mod color;
pub mod id;
pub mod vector;

pub use bitfield::BitField;
pub use byte_order::ByteOrder;
pub use color::{Color16, Color8};
pub use id::{MaterialId, NodeId};
pub use vector::{TexCoord, Vector2, Vector3};
