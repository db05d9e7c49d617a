//! Control demos: basic input, layout, collections, indicators, media and styling

pub mod badge;
pub mod buttons;
pub mod gauge;
pub mod grid;
pub mod list;
pub mod modifiers;
pub mod picker;
pub mod progress;
pub mod sliders;
pub mod stacks;
pub mod table;
pub mod tabs;
pub mod text;
pub mod text_field;
pub mod toggles;
pub mod video;

pub use badge::BadgeDemo;
pub use buttons::ButtonsDemo;
pub use gauge::GaugeDemo;
pub use grid::GridDemo;
pub use list::ListDemo;
pub use modifiers::ModifiersDemo;
pub use picker::PickerDemo;
pub use progress::ProgressDemo;
pub use sliders::SlidersDemo;
pub use stacks::StacksDemo;
pub use table::TableDemo;
pub use tabs::TabsDemo;
pub use text::TextDemo;
pub use text_field::TextFieldDemo;
pub use toggles::TogglesDemo;
pub use video::VideoPlayerDemo;
