mod button;
mod card;
mod input;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardBody, CardHeader};
pub use input::{InputType, TextInput};
