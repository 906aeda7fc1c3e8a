//! Trait para proveedores de entrega del examen.
use crate::data::family::EvaluationFamily;

pub trait DeliveryProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_version(&self) -> &str;
    fn get_description(&self) -> &str;
    fn get_family(&self) -> EvaluationFamily;
    /// Línea fija que describe el canal de entrega.
    fn channel(&self) -> &'static str;

    /// Entrega el examen (una línea en stdout). No falla ni devuelve valor.
    fn deliver(&self) {
        println!("{}", self.channel());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyDelivery;

    impl DeliveryProvider for DummyDelivery {
        fn get_name(&self) -> &str {
            "dummy_delivery"
        }
        fn get_version(&self) -> &str {
            "0.0.1"
        }
        fn get_description(&self) -> &str {
            "Dummy delivery provider for testing"
        }
        fn get_family(&self) -> EvaluationFamily {
            EvaluationFamily::Gamified
        }
        fn channel(&self) -> &'static str {
            "Dummy delivery line."
        }
    }

    #[test]
    fn test_dummy_delivery_metadata() {
        let d = DummyDelivery;
        assert_eq!(d.get_name(), "dummy_delivery");
        assert_eq!(d.get_version(), "0.0.1");
        assert_eq!(d.get_description(), "Dummy delivery provider for testing");
        assert_eq!(d.get_family(), EvaluationFamily::Gamified);
        assert_eq!(d.channel(), "Dummy delivery line.");
    }
}
