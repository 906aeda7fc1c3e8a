use crate::data::family::EvaluationFamily;
use crate::providers::delivery::trait_delivery::DeliveryProvider;

/// Entrega a través de la plataforma interactiva (familia gamificada).
#[derive(Debug, Default)]
pub struct InteractiveDelivery;

impl InteractiveDelivery {
    pub fn new() -> Self {
        Self
    }
}

impl DeliveryProvider for InteractiveDelivery {
    fn get_name(&self) -> &str {
        "interactive_delivery"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Exam delivered through the interactive platform"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Gamified
    }

    fn channel(&self) -> &'static str {
        "Delivered through interactive platform."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_delivery_line_and_family() {
        let d = InteractiveDelivery::new();
        assert_eq!(d.channel(), "Delivered through interactive platform.");
        assert_eq!(d.get_family(), EvaluationFamily::Gamified);
    }
}
