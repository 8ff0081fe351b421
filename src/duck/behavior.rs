use serde::Deserialize;

// ============================================================================
// Fly behaviors
// ============================================================================

pub trait FlyBehavior {
    fn fly(&self) -> String;
    fn name(&self) -> &str;
}

pub struct FlyWithWings;
impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> String {
        "flying".to_string()
    }

    fn name(&self) -> &str {
        "FlyWithWings"
    }
}

pub struct FlyNoWay;
impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> String {
        "can't fly".to_string()
    }

    fn name(&self) -> &str {
        "FlyNoWay"
    }
}

pub struct FlyRocketPowered;
impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> String {
        "flying with rocket boost".to_string()
    }

    fn name(&self) -> &str {
        "FlyRocketPowered"
    }
}

// ============================================================================
// Quack behaviors
// ============================================================================

pub trait QuackBehavior {
    fn quack(&self) -> String;
    fn name(&self) -> &str;
}

pub struct Quack;
impl QuackBehavior for Quack {
    fn quack(&self) -> String {
        "Quack!".to_string()
    }

    fn name(&self) -> &str {
        "Quack"
    }
}

pub struct MuteQuack;
impl QuackBehavior for MuteQuack {
    fn quack(&self) -> String {
        "silence".to_string()
    }

    fn name(&self) -> &str {
        "MuteQuack"
    }
}

pub struct Squeak;
impl QuackBehavior for Squeak {
    fn quack(&self) -> String {
        "Squeak".to_string()
    }

    fn name(&self) -> &str {
        "Squeak"
    }
}

// ============================================================================
// Selecting behaviors by name
// ============================================================================

/// Fly behavior as it appears in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlyKind {
    #[default]
    WithWings,
    NoWay,
    RocketPowered,
}

impl FlyKind {
    pub fn into_behavior(self) -> Box<dyn FlyBehavior> {
        match self {
            FlyKind::WithWings => Box::new(FlyWithWings),
            FlyKind::NoWay => Box::new(FlyNoWay),
            FlyKind::RocketPowered => Box::new(FlyRocketPowered),
        }
    }
}

/// Quack behavior as it appears in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuackKind {
    #[default]
    Quack,
    Mute,
    Squeak,
}

impl QuackKind {
    pub fn into_behavior(self) -> Box<dyn QuackBehavior> {
        match self {
            QuackKind::Quack => Box::new(Quack),
            QuackKind::Mute => Box::new(MuteQuack),
            QuackKind::Squeak => Box::new(Squeak),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fly_strings() {
        assert_eq!(FlyWithWings.fly(), "flying");
        assert_eq!(FlyNoWay.fly(), "can't fly");
        assert_eq!(FlyRocketPowered.fly(), "flying with rocket boost");
    }

    #[test]
    fn test_quack_strings() {
        assert_eq!(Quack.quack(), "Quack!");
        assert_eq!(MuteQuack.quack(), "silence");
        assert_eq!(Squeak.quack(), "Squeak");
    }

    #[test]
    fn test_kinds_map_to_behaviors() {
        assert_eq!(FlyKind::RocketPowered.into_behavior().name(), "FlyRocketPowered");
        assert_eq!(FlyKind::default().into_behavior().fly(), "flying");
        assert_eq!(QuackKind::Mute.into_behavior().quack(), "silence");
        assert_eq!(QuackKind::Squeak.into_behavior().name(), "Squeak");
    }
}
