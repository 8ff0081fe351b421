use tracing::debug;

use super::behavior::{FlyBehavior, FlyNoWay, FlyWithWings, Quack, QuackBehavior};

/// Which preset a duck was built from. Only affects `display()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuckKind {
    Mallard,
    Model,
    Custom,
}

impl DuckKind {
    pub fn description(self) -> &'static str {
        match self {
            DuckKind::Mallard => "I'm a real Mallard duck",
            DuckKind::Model => "I'm a model duck",
            DuckKind::Custom => "I'm a duck",
        }
    }
}

/// Delegates flying and quacking to whichever behaviors are installed.
pub struct Duck {
    kind: DuckKind,
    fly_behavior: Box<dyn FlyBehavior>,
    quack_behavior: Box<dyn QuackBehavior>,
}

impl Duck {
    pub fn new(
        fly_behavior: Box<dyn FlyBehavior>,
        quack_behavior: Box<dyn QuackBehavior>,
    ) -> Self {
        Self::with_kind(DuckKind::Custom, fly_behavior, quack_behavior)
    }

    fn with_kind(
        kind: DuckKind,
        fly_behavior: Box<dyn FlyBehavior>,
        quack_behavior: Box<dyn QuackBehavior>,
    ) -> Self {
        Self {
            kind,
            fly_behavior,
            quack_behavior,
        }
    }

    pub fn perform_fly(&self) -> String {
        self.fly_behavior.fly()
    }

    pub fn perform_quack(&self) -> String {
        self.quack_behavior.quack()
    }

    pub fn swim(&self) -> &'static str {
        "All ducks float, even decoys!"
    }

    pub fn display(&self) -> &'static str {
        self.kind.description()
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    pub fn set_fly_behavior(&mut self, fly_behavior: Box<dyn FlyBehavior>) {
        debug!(
            from = self.fly_behavior.name(),
            to = fly_behavior.name(),
            "swapping fly behavior"
        );
        self.fly_behavior = fly_behavior;
    }

    pub fn set_quack_behavior(&mut self, quack_behavior: Box<dyn QuackBehavior>) {
        debug!(
            from = self.quack_behavior.name(),
            to = quack_behavior.name(),
            "swapping quack behavior"
        );
        self.quack_behavior = quack_behavior;
    }

    pub fn fly_behavior_name(&self) -> &str {
        self.fly_behavior.name()
    }

    pub fn quack_behavior_name(&self) -> &str {
        self.quack_behavior.name()
    }
}

pub fn mallard_duck() -> Duck {
    Duck::with_kind(DuckKind::Mallard, Box::new(FlyWithWings), Box::new(Quack))
}

pub fn model_duck() -> Duck {
    Duck::with_kind(DuckKind::Model, Box::new(FlyNoWay), Box::new(Quack))
}
