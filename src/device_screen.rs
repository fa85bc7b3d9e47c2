pub mod impl_fake;
pub mod impl_gui;
pub mod interface;
