pub mod card;
pub use card::*;

pub mod codec;

pub mod hand;
pub use hand::*;

pub mod layout;
pub use layout::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
