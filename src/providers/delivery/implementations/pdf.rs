use crate::data::family::EvaluationFamily;
use crate::providers::delivery::trait_delivery::DeliveryProvider;

/// Entrega del examen como documento PDF (familia tradicional).
#[derive(Debug, Default)]
pub struct PdfDelivery;

impl PdfDelivery {
    pub fn new() -> Self {
        Self
    }
}

impl DeliveryProvider for PdfDelivery {
    fn get_name(&self) -> &str {
        "pdf_delivery"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Exam delivered as a printable PDF document"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Traditional
    }

    fn channel(&self) -> &'static str {
        "Exam delivered as PDF."
    }
}
