//! Form primitives shared by every page.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod textarea;
pub use textarea::Textarea;
