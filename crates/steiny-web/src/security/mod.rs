pub mod cookie;
pub mod gate;

pub use gate::subscription_gate;
