//! Strategy pattern: ducks with swappable fly and quack behaviors.

mod behavior;
#[allow(clippy::module_inception)]
mod duck;

pub use behavior::{
    FlyBehavior, FlyKind, FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack,
    QuackBehavior, QuackKind, Squeak,
};
pub use duck::{mallard_duck, model_duck, Duck, DuckKind};
