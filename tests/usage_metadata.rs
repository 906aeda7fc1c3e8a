use examflow_rust::data::family::EvaluationFamily;
use examflow_rust::factory::factory_for;
use examflow_rust::factory::implementations::gamified::GamifiedEvaluationFactory;
use examflow_rust::factory::implementations::traditional::TraditionalEvaluationFactory;
use examflow_rust::factory::trait_factory::EvaluationFactory;

// Exercise every metadata accessor of factories and providers so the public
// surface stays covered.
#[test]
fn test_factory_metadata_accessors() {
    let traditional = TraditionalEvaluationFactory::new();
    assert_eq!(traditional.get_name(), "traditional_evaluation_factory");
    assert_eq!(traditional.get_family(), EvaluationFamily::Traditional);

    let gamified = GamifiedEvaluationFactory::new();
    assert_eq!(gamified.get_name(), "gamified_evaluation_factory");
    assert_eq!(gamified.get_family(), EvaluationFamily::Gamified);
}

#[test]
fn test_provider_metadata_accessors() {
    for family in EvaluationFamily::all() {
        let factory = factory_for(family);

        let question = factory.create_question();
        assert!(!question.get_name().is_empty());
        assert!(!question.get_version().is_empty());
        assert!(!question.get_description().is_empty());
        assert_eq!(question.get_family(), family);

        let grading = factory.create_grading();
        assert!(!grading.get_name().is_empty());
        assert!(!grading.get_version().is_empty());
        assert!(!grading.get_description().is_empty());
        assert_eq!(grading.get_family(), family);

        let feedback = factory.create_feedback();
        assert!(!feedback.get_name().is_empty());
        assert!(!feedback.get_version().is_empty());
        assert!(!feedback.get_description().is_empty());
        assert_eq!(feedback.get_family(), family);

        let delivery = factory.create_delivery();
        assert!(!delivery.get_name().is_empty());
        assert!(!delivery.get_version().is_empty());
        assert!(!delivery.get_description().is_empty());
        assert_eq!(delivery.get_family(), family);
    }
}

#[test]
fn test_provider_lines_match_family_table() {
    // Tabla completa de líneas por familia (una por capacidad)
    let traditional = factory_for(EvaluationFamily::Traditional);
    assert_eq!(traditional.create_question().prompt(), "Multiple choice question.");
    assert_eq!(traditional.create_grading().scheme(), "Numeric grading over 100.");
    assert_eq!(traditional.create_feedback().style(), "Basic textual feedback.");
    assert_eq!(traditional.create_delivery().channel(), "Exam delivered as PDF.");

    let gamified = factory_for(EvaluationFamily::Gamified);
    assert_eq!(gamified.create_question().prompt(), "Interactive challenge question.");
    assert_eq!(gamified.create_grading().scheme(), "Grading based on achievements.");
    assert_eq!(gamified.create_feedback().style(), "Visual feedback with badges.");
    assert_eq!(gamified.create_delivery().channel(), "Delivered through interactive platform.");
}
