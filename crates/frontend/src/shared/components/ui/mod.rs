pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod slider;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use slider::Slider;
pub use textarea::Textarea;
